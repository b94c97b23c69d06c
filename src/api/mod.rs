mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::portal::Portal;

/// Router with permissive CORS, for local use and tests.
pub fn create_router(portal: Portal) -> Router {
    create_router_with_config(portal, &ServerConfig::default())
}

pub fn create_router_with_config(portal: Portal, config: &ServerConfig) -> Router {
    let site_page = "/sites/{site_type}/{site_name}/pages/{page}";

    let api = Router::new()
        // Pages
        .route("/pages", get(handlers::list_pages))
        .route("/pages", post(handlers::create_page))
        .route(
            site_page,
            get(handlers::get_page).delete(handlers::delete_page),
        )
        .route(
            &format!("{}/outline", site_page),
            get(handlers::get_page_outline),
        )
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(config.cors_layer())
        .with_state(portal)
}
