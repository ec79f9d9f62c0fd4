pub mod connection;
pub mod models;
pub mod repository;
pub mod schema;

pub use connection::*;
pub use repository::PgCatalogStore;
