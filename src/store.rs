use std::sync::Mutex;

use crate::error::StoreError;
use crate::models::{NameFilter, Product};

/// Query interface over the persisted product catalog.
///
/// Listing calls (`count_matching`, `fetch_page`) only ever see rows whose
/// `deleted` flag is unset. Rows are never physically removed.
pub trait CatalogStore: Send + Sync {
    fn count_matching(&self, filter: &NameFilter) -> Result<u64, StoreError>;

    /// Up to `limit` visible matching products in insertion order, starting
    /// at `offset`. A window past the end yields fewer rows, possibly none.
    fn fetch_page(
        &self,
        filter: &NameFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Product>, StoreError>;

    /// Flags the product as deleted. Returns `false` when no row has `id`.
    fn soft_delete(&self, id: i32) -> Result<bool, StoreError>;

    fn insert(&self, name: &str, image_url: &str) -> Result<Product, StoreError>;
}

/// Rejects writes that would persist a product without a name or image.
pub(crate) fn check_new_product(name: &str, image_url: &str) -> Result<(), StoreError> {
    if name.trim().is_empty() {
        return Err(StoreError::invalid("product name cannot be empty"));
    }
    if image_url.trim().is_empty() {
        return Err(StoreError::invalid("product image URL cannot be empty"));
    }
    Ok(())
}

#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    products: Mutex<Vec<Product>>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    // rows must already be in id order
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
        }
    }

    fn visible<'a>(
        products: &'a [Product],
        filter: &'a NameFilter,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        products
            .iter()
            .filter(move |p| !p.deleted && filter.matches(&p.name))
    }
}

impl CatalogStore for MemoryCatalogStore {
    fn count_matching(&self, filter: &NameFilter) -> Result<u64, StoreError> {
        let products = self.products.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(Self::visible(&products, filter).count() as u64)
    }

    fn fetch_page(
        &self,
        filter: &NameFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Product>, StoreError> {
        let products = self.products.lock().map_err(|_| StoreError::Poisoned)?;
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(Self::visible(&products, filter)
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    fn soft_delete(&self, id: i32) -> Result<bool, StoreError> {
        let mut products = self.products.lock().map_err(|_| StoreError::Poisoned)?;
        match products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                product.deleted = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn insert(&self, name: &str, image_url: &str) -> Result<Product, StoreError> {
        check_new_product(name, image_url)?;
        let mut products = self.products.lock().map_err(|_| StoreError::Poisoned)?;
        let id = products
            .iter()
            .map(|p| p.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| StoreError::invalid("product ids exhausted"))?;
        let product = Product {
            id,
            name: name.to_string(),
            image_url: image_url.to_string(),
            deleted: false,
        };
        products.push(product.clone());
        Ok(product)
    }
}
