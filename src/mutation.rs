use crate::error::StoreError;
use crate::models::Outcome;
use crate::store::CatalogStore;

pub const MISSING_PRODUCT_FIELDS: &str = "Name and image URL are required";
pub const MISSING_PRODUCT_ID: &str = "Product ID is required";

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Adds a visible product. Both fields must be present and non-blank.
pub fn add_product(
    store: &dyn CatalogStore,
    name: Option<&str>,
    image_url: Option<&str>,
) -> Result<Outcome, StoreError> {
    let (Some(name), Some(image_url)) = (present(name), present(image_url)) else {
        return Ok(Outcome::ValidationError(MISSING_PRODUCT_FIELDS.to_string()));
    };

    let product = store.insert(name, image_url)?;
    log::info!("added product {} ({:?})", product.id, product.name);
    Ok(Outcome::Success)
}

/// Soft-deletes a product by its submitted id. An id that is not a number
/// cannot name any row and is reported as not found.
pub fn delete_product(
    store: &dyn CatalogStore,
    raw_id: Option<&str>,
) -> Result<Outcome, StoreError> {
    let Some(raw_id) = present(raw_id) else {
        return Ok(Outcome::ValidationError(MISSING_PRODUCT_ID.to_string()));
    };
    let Ok(id) = raw_id.trim().parse::<i32>() else {
        log::info!("delete requested for malformed product id {:?}", raw_id);
        return Ok(Outcome::NotFound);
    };

    if store.soft_delete(id)? {
        log::info!("deleted product {}", id);
        Ok(Outcome::Success)
    } else {
        Ok(Outcome::NotFound)
    }
}
