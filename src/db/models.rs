use diesel::prelude::*;

use crate::db::schema::products;
use crate::models::Product;

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub image_url: String,
    pub deleted: bool,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub image_url: &'a str,
    pub deleted: bool,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            image_url: row.image_url,
            deleted: row.deleted,
        }
    }
}
