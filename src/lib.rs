pub mod config;
pub mod csv;
pub mod error;
pub mod models;
pub mod stats;
pub mod store;

pub use models::ImportResult;
pub use store::Store;
