// src/handlers/guide.rs

use axum::{
    Json,
    extract::Path,
    response::IntoResponse,
};

use crate::{data, error::AppError, models::guide::DocumentType};

/// Looks up the application guide for a document type.
///
/// Unknown keys are an expected outcome rendered as a 404 notice, never a
/// failure: the domain lookup is total and the handler only maps `None`.
pub async fn get_guide(Path(key): Path<String>) -> Result<impl IntoResponse, AppError> {
    DocumentType::from_key(&key)
        .and_then(data::guide_for)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No guide available for '{}'", key)))
}
