use crate::models::Product;

const DEMO_PRODUCTS: [&str; 12] = [
    "Oak Desk",
    "Walnut Bookshelf",
    "Linen Armchair",
    "Brass Floor Lamp",
    "Wool Rug",
    "Ceramic Vase",
    "Oak Dining Table",
    "Velvet Sofa",
    "Pine Nightstand",
    "Glass Coffee Table",
    "Rattan Basket",
    "Steel Desk Lamp",
];

/// Seed rows for the in-memory catalog, enough to span two pages.
pub fn init_mock_data() -> Vec<Product> {
    DEMO_PRODUCTS
        .iter()
        .zip(1..)
        .map(|(name, id)| Product {
            id,
            name: name.to_string(),
            image_url: format!("/public/images/product-{}.jpg", id),
            deleted: false,
        })
        .collect()
}
