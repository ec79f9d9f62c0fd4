use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};

use catalog::db::{self, PgCatalogStore};
use catalog::handlers::{self, AppState};
use catalog::mock_data;
use catalog::settings::Settings;
use catalog::{CatalogStore, MemoryCatalogStore, StartupError};

fn build_store(settings: &Settings) -> Result<Arc<dyn CatalogStore>, StartupError> {
    match &settings.database.url {
        Some(url) => {
            let pool = db::init_pool(url, &settings.database)?;
            db::run_migrations(&pool)?;
            log::info!("using PostgreSQL catalog");
            Ok(Arc::new(PgCatalogStore::new(pool)))
        }
        None => {
            log::warn!("no database.url configured, serving the in-memory demo catalog");
            Ok(Arc::new(MemoryCatalogStore::with_products(
                mock_data::init_mock_data(),
            )))
        }
    }
}

fn cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .max_age(3600);
    if origins.is_empty() {
        return cors.allow_any_origin();
    }
    origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

#[actix_web::main]
async fn main() -> Result<(), StartupError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load()?;
    let store = build_store(&settings)?;
    let app_state = web::Data::new(AppState::new(store, settings.search.case_sensitive));

    let static_root = settings.server.static_root.clone();
    let origins = settings.server.allowed_origins.clone();
    let (host, port) = settings.address();

    log::info!("Server is running at http://{}:{}", host, port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors(&origins))
            .app_data(app_state.clone())
            .service(Files::new("/public", &static_root))
            .configure(handlers::routes)
    })
    .bind((host, port))?
    .run()
    .await?;

    Ok(())
}
