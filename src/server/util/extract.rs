use axum::extract::FromRequest;

use crate::server::error::AppError;

/// JSON body extractor whose rejections are reported through `AppError`.
///
/// Malformed or mistyped bodies produce the standard `{error}` JSON with a 400 instead
/// of axum's plain-text rejection.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
