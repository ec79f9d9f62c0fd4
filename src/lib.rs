//! Product catalog browsing service: substring search with page-based
//! pagination, soft delete and validated inserts over a `products` table.

pub mod db;
pub mod error;
pub mod handlers;
pub mod mock_data;
pub mod models;
pub mod mutation;
pub mod pagination;
pub mod planner;
pub mod render;
pub mod settings;
pub mod store;

pub use error::{CatalogError, StartupError, StoreError};
pub use models::{Listing, NameFilter, Outcome, PageLink, PageWindow, Product, PAGE_SIZE};
pub use store::{CatalogStore, MemoryCatalogStore};
