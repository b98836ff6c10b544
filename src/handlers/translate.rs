// src/handlers/translate.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    error::AppError,
    state::SharedSession,
    utils::translator::{TranslationGate, translate_mock},
};

/// Fixed user-visible message substituted for any translation failure.
pub const TRANSLATION_FAILURE_MESSAGE: &str = "Translation failed. Please try again.";

#[derive(Debug, Deserialize, Validate)]
pub struct TranslateRequest {
    #[validate(length(min = 1, max = 5000))]
    pub text: String,

    /// Target language code; unsupported codes are echoed as the display name.
    #[validate(length(min = 1, max = 16))]
    pub to: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub translated: String,

    /// False when a newer request overtook this one while it was in flight;
    /// its result was discarded instead of being applied to the session.
    pub applied: bool,
}

/// Translates text through the mock service.
///
/// Overlapping calls are sequenced with a generation ticket: only the newest
/// request applies its result to the session. A failure is replaced with a
/// fixed message, so the caller always receives something renderable and can
/// always clear its loading state.
pub async fn translate(
    State(session): State<SharedSession>,
    State(gate): State<TranslationGate>,
    Json(payload): Json<TranslateRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let ticket = gate.begin();

    let translated = match translate_mock(&payload.text, &payload.to).await {
        Ok(translated) => translated,
        Err(e) => {
            tracing::warn!("Mock translation failed: {:?}", e);
            TRANSLATION_FAILURE_MESSAGE.to_string()
        }
    };

    let applied = gate.is_current(ticket);
    if applied {
        let mut session = session.lock().await;
        session.last_translation = Some(translated.clone());
    }

    Ok(Json(TranslateResponse { translated, applied }))
}
