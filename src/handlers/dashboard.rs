// src/handlers/dashboard.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;

use crate::{
    data,
    error::AppError,
    models::{
        checklist::{ChecklistItem, ChecklistState},
        profile::UserProfile,
    },
    storage::{self, KvStore},
};

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub profile: UserProfile,
    pub age: Option<u32>,
    pub region_name: Option<String>,
    pub checklist: Vec<ChecklistItem>,
    pub completed_count: usize,
    pub total: usize,
    pub remaining: usize,
    pub progress_percent: u8,
}

async fn load_profile(store: &KvStore) -> Result<UserProfile, AppError> {
    store
        .get::<Option<UserProfile>>(storage::PROFILE_KEY, None)
        .await
        .ok_or_else(|| {
            AppError::NotFound("No user profile found. Complete onboarding first.".to_string())
        })
}

/// Ensures the persisted checklist has been derived once from the profile.
/// A seeded state is reused as-is, even when it is empty or the profile has
/// changed since; derivation never runs twice.
async fn load_checklist(store: &KvStore, profile: &UserProfile) -> ChecklistState {
    let state = store
        .get::<ChecklistState>(storage::CHECKLIST_KEY, ChecklistState::default())
        .await;
    if state.seeded {
        return state;
    }

    let derived = ChecklistState::derive(data::checklist_templates(), profile);
    store.set(storage::CHECKLIST_KEY, &derived).await;
    tracing::info!("Seeded checklist with {} items", derived.items.len());
    derived
}

fn view_of(profile: UserProfile, checklist: ChecklistState) -> DashboardView {
    let completed_count = checklist.completed_count();
    let total = checklist.items.len();
    DashboardView {
        age: profile.age_in_years(chrono::Utc::now().date_naive()),
        region_name: data::region_name(&profile.state).map(str::to_string),
        completed_count,
        total,
        remaining: total - completed_count,
        progress_percent: checklist.progress_percent(),
        checklist: checklist.items,
        profile,
    }
}

/// Personalized dashboard: profile summary, checklist, progress.
pub async fn get_dashboard(State(store): State<KvStore>) -> Result<impl IntoResponse, AppError> {
    let profile = load_profile(&store).await?;
    let checklist = load_checklist(&store, &profile).await;
    Ok(Json(view_of(profile, checklist)))
}

/// Flips completion of a single checklist item and persists the new state.
pub async fn toggle_item(
    State(store): State<KvStore>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let profile = load_profile(&store).await?;
    let mut checklist = load_checklist(&store, &profile).await;

    if !checklist.toggle(&id) {
        return Err(AppError::NotFound(format!(
            "Checklist item '{}' not found",
            id
        )));
    }

    store.set(storage::CHECKLIST_KEY, &checklist).await;
    Ok(Json(view_of(profile, checklist)))
}
