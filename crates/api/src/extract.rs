//! Request extractors.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor whose rejection goes through [`AppError`].
///
/// Missing fields, wrong types and unparseable bodies answer 400 with the
/// usual `{ error, code }` body instead of axum's plain-text 422.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
