use diesel::prelude::*;

use catalog::db::{self, PgCatalogStore};
use catalog::mutation;
use catalog::planner;
use catalog::settings::DatabaseSettings;
use catalog::{CatalogStore, NameFilter, Outcome};

fn maybe_store() -> Option<PgCatalogStore> {
    let database_url = std::env::var("TEST_DATABASE_URL").ok()?;
    let settings = DatabaseSettings {
        url: Some(database_url.clone()),
        pool_size: 2,
        timeout_seconds: 5,
    };
    let pool = db::init_pool(&database_url, &settings).ok()?;
    db::run_migrations(&pool).ok()?;
    Some(PgCatalogStore::new(pool))
}

#[test]
fn postgres_catalog_flow() {
    let Some(store) = maybe_store() else {
        eprintln!("Skipping postgres_catalog_flow: TEST_DATABASE_URL is not set or the database is unreachable.");
        return;
    };

    let mut conn = store.pool().get().expect("connection should be available");
    diesel::sql_query("TRUNCATE TABLE products RESTART IDENTITY")
        .execute(&mut conn)
        .expect("truncate should succeed");
    drop(conn);

    for i in 0..23 {
        store
            .insert(&format!("Widget {}", i), "http://img/w.png")
            .expect("insert should succeed");
    }
    store
        .insert("100%_pure wool", "http://img/rug.png")
        .expect("insert should succeed");

    let widgets = NameFilter::new("Widget", true);
    let window = planner::plan(&store, &widgets, Some("3")).expect("plan should succeed");
    assert_eq!(window.total_matches, 23);
    assert_eq!(window.total_pages, 3);
    assert_eq!(window.offset, 20);

    let last = store
        .fetch_page(&widgets, window.offset, window.page_size)
        .expect("fetch should succeed");
    assert_eq!(last.len(), 3);
    assert_eq!(last[0].name, "Widget 20");
    assert!(store
        .fetch_page(&widgets, 500, 10)
        .expect("fetch should succeed")
        .is_empty());

    // LIKE metacharacters in the term match literally.
    assert_eq!(store.count_matching(&NameFilter::new("%_", true)).unwrap(), 1);
    assert_eq!(store.count_matching(&NameFilter::new("W_dget", true)).unwrap(), 0);
    assert_eq!(store.count_matching(&NameFilter::new("widget", true)).unwrap(), 0);
    assert_eq!(store.count_matching(&NameFilter::new("widget", false)).unwrap(), 23);

    let first_id = last[0].id.to_string();
    assert_eq!(
        mutation::delete_product(&store, Some(&first_id)).unwrap(),
        Outcome::Success
    );
    assert_eq!(store.count_matching(&widgets).unwrap(), 22);
    assert_eq!(
        mutation::delete_product(&store, Some("999999")).unwrap(),
        Outcome::NotFound
    );

    assert!(store.insert("", "http://img/x.png").is_err());
}
