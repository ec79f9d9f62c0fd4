use diesel::pg::Pg;
use diesel::prelude::*;

use crate::db::connection::{PgPool, PgPooledConnection};
use crate::db::models::{NewProduct, ProductRow};
use crate::db::schema::products;
use crate::error::StoreError;
use crate::models::{NameFilter, Product};
use crate::store::{check_new_product, CatalogStore};

/// Catalog backed by the PostgreSQL `products` table.
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn conn(&self) -> Result<PgPooledConnection, StoreError> {
        Ok(self.pool.get()?)
    }
}

/// Visible rows whose name matches the filter. The term is bound as an
/// escaped LIKE pattern, never spliced into SQL.
fn visible_matching<'a>(filter: &NameFilter) -> products::BoxedQuery<'a, Pg> {
    let pattern = filter.like_pattern();
    let query = products::table
        .filter(products::deleted.eq(false))
        .into_boxed();

    if filter.case_sensitive() {
        query.filter(products::name.like(pattern))
    } else {
        query.filter(products::name.ilike(pattern))
    }
}

fn to_sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl CatalogStore for PgCatalogStore {
    fn count_matching(&self, filter: &NameFilter) -> Result<u64, StoreError> {
        let conn = &mut self.conn()?;
        let count: i64 = visible_matching(filter).count().get_result(conn)?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    fn fetch_page(
        &self,
        filter: &NameFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Product>, StoreError> {
        let conn = &mut self.conn()?;
        let rows = visible_matching(filter)
            .order(products::id.asc())
            .limit(to_sql_int(limit))
            .offset(to_sql_int(offset))
            .select(ProductRow::as_select())
            .load(conn)?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    fn soft_delete(&self, id: i32) -> Result<bool, StoreError> {
        let conn = &mut self.conn()?;
        let updated = diesel::update(products::table.find(id))
            .set(products::deleted.eq(true))
            .execute(conn)?;
        Ok(updated > 0)
    }

    fn insert(&self, name: &str, image_url: &str) -> Result<Product, StoreError> {
        check_new_product(name, image_url)?;
        let conn = &mut self.conn()?;
        let row = diesel::insert_into(products::table)
            .values(&NewProduct {
                name,
                image_url,
                deleted: false,
            })
            .returning(ProductRow::as_returning())
            .get_result(conn)?;
        Ok(row.into())
    }
}
