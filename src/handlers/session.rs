// src/handlers/session.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use crate::{
    error::AppError,
    models::{
        guide::DocumentType,
        profile::UserProfile,
        session::{NavAction, Screen, Session},
    },
    state::SharedSession,
    storage::{self, KvStore},
};

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub screen: Screen,
    pub selected_guide: Option<DocumentType>,
    pub nav_visible: bool,
    pub last_translation: Option<String>,
}

fn view_of(session: &Session, has_profile: bool) -> SessionView {
    SessionView {
        screen: session.screen,
        selected_guide: session.selected_guide,
        nav_visible: session.nav_visible(has_profile),
        last_translation: session.last_translation.clone(),
    }
}

/// True when a completed profile is persisted.
pub(crate) async fn has_completed_profile(store: &KvStore) -> bool {
    store
        .get::<Option<UserProfile>>(storage::PROFILE_KEY, None)
        .await
        .map(|profile| profile.completed_onboarding)
        .unwrap_or(false)
}

/// Returns the current screen and navigation context.
pub async fn get_session(
    State(store): State<KvStore>,
    State(session): State<SharedSession>,
) -> Result<impl IntoResponse, AppError> {
    let has_profile = has_completed_profile(&store).await;
    let session = session.lock().await;
    Ok(Json(view_of(&session, has_profile)))
}

/// Applies a navigation action and returns the resulting view.
/// Entering the dashboard without a persisted profile lands on onboarding.
pub async fn navigate(
    State(store): State<KvStore>,
    State(session): State<SharedSession>,
    Json(action): Json<NavAction>,
) -> Result<impl IntoResponse, AppError> {
    let has_profile = has_completed_profile(&store).await;
    let mut session = session.lock().await;
    session.navigate(action, has_profile)?;
    Ok(Json(view_of(&session, has_profile)))
}
