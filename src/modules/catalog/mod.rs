pub mod model;
pub mod report;
pub mod store;
pub mod user_interface;

// Re-export the main types and functions
pub use model::{Book, Category};
pub use report::LookupReport;
pub use store::Catalog;
