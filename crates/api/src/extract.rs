//! Request extractors.

use axum::extract::FromRequest;
use axum::extract::rejection::JsonRejection;

use crate::error::AppError;

/// JSON body extractor whose rejection is rendered as `{"error": "..."}`.
///
/// `axum::Json` rejects malformed bodies with a plain-text response; this
/// wrapper routes the rejection through [`AppError`] so every failure on
/// this API, including undeserializable bodies, keeps the JSON error shape.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
