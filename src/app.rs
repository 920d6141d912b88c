use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::AppConfig;
use crate::routes::{country_routes, system_routes};
use crate::store::DynCountryStore;

/// Build the complete Axum application:
/// - /countries  (the catalog)
/// - /system     (alive + version)
///
/// `cfg` is passed to /system/version so the server can expose its version.
pub fn build_app(store: DynCountryStore, cfg: AppConfig) -> Router {
    Router::new()
        .merge(country_routes::routes(store))
        .nest("/system", system_routes::routes(cfg))
        // Logging middleware
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
