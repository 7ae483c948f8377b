use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

use crate::routes::ping::PingError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

pub fn map_error(err: &PingError) -> (StatusCode, Json<ErrorBody>) {
    match err {
        PingError::InvalidJson => (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: "invalid json",
            }),
        ),
    }
}

pub(crate) async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody { error: "not found" }),
    )
}
