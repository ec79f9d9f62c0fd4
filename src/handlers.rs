use std::sync::Arc;

use actix_web::{http::header, web, HttpResponse};
use url::form_urlencoded;

use crate::error::{CatalogError, StoreError};
use crate::models::{
    AddProductForm, DeleteProductForm, ListingQuery, NameFilter, Outcome, PaginatedResponse,
    Product,
};
use crate::mutation;
use crate::planner;
use crate::render::{self, Flash};
use crate::store::CatalogStore;

const STORE_FAILURE: &str = "Something went wrong, please try again";

pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
    pub case_sensitive: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>, case_sensitive: bool) -> Self {
        Self {
            store,
            case_sensitive,
        }
    }

    fn filter(&self, term: Option<String>) -> NameFilter {
        NameFilter::new(term.unwrap_or_default(), self.case_sensitive)
    }
}

/// Registers the catalog routes. Static files are mounted separately since
/// they depend on startup settings.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/api/products", web::get().to(list_products))
        .route("/add", web::post().to(add_product))
        .route("/delete", web::post().to(delete_product));
}

async fn index(
    data: web::Data<AppState>,
    query: web::Query<ListingQuery>,
) -> Result<HttpResponse, CatalogError> {
    let ListingQuery {
        query,
        page,
        success,
        error,
    } = query.into_inner();
    let store = Arc::clone(&data.store);
    let filter = data.filter(query);

    let listing =
        web::block(move || planner::browse(store.as_ref(), &filter, page.as_deref())).await??;

    let html = render::render_listing(&listing, &Flash { success, error });
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

async fn list_products(
    data: web::Data<AppState>,
    query: web::Query<ListingQuery>,
) -> Result<HttpResponse, CatalogError> {
    let ListingQuery { query, page, .. } = query.into_inner();
    let store = Arc::clone(&data.store);
    let filter = data.filter(query);

    let listing =
        web::block(move || planner::browse(store.as_ref(), &filter, page.as_deref())).await??;

    Ok(HttpResponse::Ok().json(PaginatedResponse::<Product>::from(listing)))
}

async fn add_product(
    data: web::Data<AppState>,
    form: web::Form<AddProductForm>,
) -> Result<HttpResponse, CatalogError> {
    let AddProductForm { name, image_url } = form.into_inner();
    let store = Arc::clone(&data.store);

    let outcome = web::block(move || {
        mutation::add_product(store.as_ref(), name.as_deref(), image_url.as_deref())
    })
    .await?;

    Ok(redirect_for(outcome, "Product added successfully"))
}

async fn delete_product(
    data: web::Data<AppState>,
    form: web::Form<DeleteProductForm>,
) -> Result<HttpResponse, CatalogError> {
    let DeleteProductForm { product_id } = form.into_inner();
    let store = Arc::clone(&data.store);

    let outcome =
        web::block(move || mutation::delete_product(store.as_ref(), product_id.as_deref()))
            .await?;

    Ok(redirect_for(outcome, "Product deleted successfully"))
}

fn redirect_for(outcome: Result<Outcome, StoreError>, success: &str) -> HttpResponse {
    let (key, message) = match outcome {
        Ok(Outcome::Success) => ("success", success.to_string()),
        Ok(Outcome::NotFound) => ("error", "Product not found".to_string()),
        Ok(Outcome::ValidationError(message)) => ("error", message),
        Err(err) => {
            log::error!("catalog update failed: {}", err);
            ("error", STORE_FAILURE.to_string())
        }
    };

    let location = format!(
        "/?{}",
        form_urlencoded::Serializer::new(String::new())
            .append_pair(key, &message)
            .finish()
    );
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
