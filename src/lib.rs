// First, declare the modules folder itself
mod modules;

// Re-export everything from modules for easier access
pub use modules::{auth, catalog, utils};

// Re-export commonly used types
pub use modules::auth::password::{validate_password, PasswordError};
pub use modules::catalog::model::{Book, Category};
pub use modules::catalog::report::LookupReport;
pub use modules::catalog::store::Catalog;

// Constants
pub const ADMIN_USERNAME: &str = "admin";
pub const PASSWORD_MIN_LENGTH: usize = 8;
