pub mod gate;
pub mod password;
pub mod user_interface;

// Re-export the main types and functions
pub use gate::authenticate;
pub use password::{validate_password, PasswordError};
pub use user_interface::{login_flow, LoginOutcome};
