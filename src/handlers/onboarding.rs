// src/handlers/onboarding.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use validator::Validate;

use crate::{
    data,
    error::AppError,
    models::{
        onboarding::{OnboardingWizard, Step1Input, Step2Input, Step3Input, WizardForm},
        session::Screen,
    },
    state::SharedSession,
    storage::{self, KvStore},
};

#[derive(Debug, Serialize)]
pub struct WizardView {
    pub step: u8,
    pub total_steps: u8,
    pub form: WizardForm,
    pub can_go_previous: bool,
    pub action_label: &'static str,
}

fn view_of(wizard: &OnboardingWizard) -> WizardView {
    WizardView {
        step: wizard.step(),
        total_steps: wizard.total_steps(),
        form: wizard.form().clone(),
        can_go_previous: wizard.can_go_previous(),
        action_label: wizard.action_label(),
    }
}

/// Current wizard position and form buffer.
pub async fn get_wizard(
    State(session): State<SharedSession>,
) -> Result<impl IntoResponse, AppError> {
    let session = session.lock().await;
    Ok(Json(view_of(&session.wizard)))
}

/// Region choices offered by step 2.
pub async fn list_regions() -> impl IntoResponse {
    Json(data::regions())
}

/// Step 1: basic information. Advances only when the name survives trimming.
pub async fn submit_step1(
    State(session): State<SharedSession>,
    Json(payload): Json<Step1Input>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let mut session = session.lock().await;
    session.expect_screen(Screen::Onboarding)?;
    session.wizard.submit_step1(payload)?;
    Ok(Json(view_of(&session.wizard)))
}

/// Step 2: date of birth and region, both required.
pub async fn submit_step2(
    State(session): State<SharedSession>,
    Json(payload): Json<Step2Input>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let mut session = session.lock().await;
    session.expect_screen(Screen::Onboarding)?;
    session.wizard.submit_step2(payload)?;
    Ok(Json(view_of(&session.wizard)))
}

/// Step 3: existing-document flags (all optional). Completes the wizard,
/// persists the emitted profile, and moves the session to the dashboard.
pub async fn submit_step3(
    State(store): State<KvStore>,
    State(session): State<SharedSession>,
    Json(payload): Json<Step3Input>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = session.lock().await;
    session.expect_screen(Screen::Onboarding)?;

    let profile = session.wizard.submit_step3(payload)?;
    store.set(storage::PROFILE_KEY, &profile).await;
    session.onboarding_completed();

    tracing::info!("Onboarding completed for '{}'", profile.name);
    Ok((StatusCode::CREATED, Json(profile)))
}

/// Back-navigation; rejected on the first step.
pub async fn previous_step(
    State(session): State<SharedSession>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = session.lock().await;
    session.expect_screen(Screen::Onboarding)?;
    session.wizard.previous()?;
    Ok(Json(view_of(&session.wizard)))
}
