use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Domain errors surfaced by the country store.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Country not found")]
    NotFound,

    #[error("No countries available to choose randomly")]
    NoCountriesAvailable,
}

/// Both variants map to 404 with the display string as the body.
impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, self.to_string()).into_response()
    }
}
