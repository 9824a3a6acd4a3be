use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Store;
use crate::services::{BookingService, SeaOrmBookingService};

mod book;
mod browse;
mod error;
mod health;
mod identify;
pub mod observability;
pub mod paths;
pub mod views;

pub use error::ApiError;
pub use views::{Page, Views};

#[derive(Clone)]
pub struct AppState {
    pub store: Store,

    pub booking: Arc<dyn BookingService>,

    pub views: Arc<Views>,
}

impl AppState {
    pub fn new(store: Store) -> anyhow::Result<Self> {
        let views = Views::new().map_err(|e| anyhow::anyhow!("Failed to compile templates: {e}"))?;

        Ok(Self {
            booking: Arc::new(SeaOrmBookingService::new(store.clone())),
            views: Arc::new(views),
            store,
        })
    }
}

/// Opens the database, applies migrations, seeds empty tables and wires the services.
pub async fn create_app_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;
    store.initialize(&config.schedule).await?;

    Ok(Arc::new(AppState::new(store)?))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            paths::IDENTIFY,
            get(identify::show_form).post(identify::submit),
        )
        .route(paths::BOOKING, get(browse::show).post(browse::show))
        .route(paths::BOOK, post(book::confirm))
        .route(paths::HEALTH, get(health::health))
        .route_layer(middleware::from_fn(observability::logging_middleware))
        .with_state(state)
        .layer(middleware::from_fn(observability::security_headers_middleware))
        .layer(TraceLayer::new_for_http())
}
