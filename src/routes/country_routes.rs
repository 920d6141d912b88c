use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};

use crate::models::Country;
use crate::store::DynCountryStore;

/// Build all catalog routes under /countries.
///
/// Unsupported verbs on a matched path answer 405 through the per-route
/// fallback; paths with extra segments answer 404 through the wildcard.
pub fn routes(store: DynCountryStore) -> Router {
    Router::new()
        .route(
            "/countries",
            get(list_countries)
                .post(create_country)
                .fallback(method_not_allowed),
        )
        .route(
            "/countries/:id",
            get(get_country)
                .delete(delete_country)
                .fallback(method_not_allowed),
        )
        .route("/countries/:id/*rest", any(wrong_path_shape))
        .with_state(store)
}

//
// ─────────────────────────────────────────────────────────────
// GET /countries
// Return every stored country as a JSON array
// ─────────────────────────────────────────────────────────────
//
async fn list_countries(State(store): State<DynCountryStore>) -> Json<Vec<Country>> {
    Json(store.get_all_countries())
}

//
// ─────────────────────────────────────────────────────────────
// POST /countries
// Store the country from the JSON body
// ─────────────────────────────────────────────────────────────
//
async fn create_country(
    State(store): State<DynCountryStore>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if content_type != "application/json" {
        return (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            format!("need content-type 'application/json', but got '{content_type}'"),
        )
            .into_response();
    }

    // Parsed by hand rather than through the Json extractor so the 400
    // body carries the parser's own message.
    let country: Country = match serde_json::from_str(&body) {
        Ok(country) => country,
        Err(err) => return (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
    };

    store.add_country(country);
    StatusCode::OK.into_response()
}

//
// ─────────────────────────────────────────────────────────────
// GET /countries/{id}
// Return one country, or redirect for the reserved id "random"
// ─────────────────────────────────────────────────────────────
//
async fn get_country(State(store): State<DynCountryStore>, Path(id): Path<String>) -> Response {
    if id == "random" {
        return random_country(&store);
    }

    match store.get_country_by_id(&id) {
        Ok(country) => Json(country).into_response(),
        Err(err) => err.into_response(),
    }
}

/// 302 to /countries/{id} for a uniformly drawn stored id.
fn random_country(store: &DynCountryStore) -> Response {
    match store.get_random_country_id() {
        Ok(id) => (
            StatusCode::FOUND,
            [(header::LOCATION, format!("/countries/{id}"))],
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

//
// ─────────────────────────────────────────────────────────────
// DELETE /countries/{id}
// Remove a country if it exists; absent ids still answer 200
// ─────────────────────────────────────────────────────────────
//
async fn delete_country(State(store): State<DynCountryStore>, Path(id): Path<String>) -> StatusCode {
    store.delete_country(&id);
    StatusCode::OK
}

async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
}

async fn wrong_path_shape() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Wrong number of parts on URL path")
}
