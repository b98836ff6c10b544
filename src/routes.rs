// src/routes.rs

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{dashboard, faq, guide, onboarding, quiz, session, translate},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges all feature sub-routers (session, onboarding, dashboard, quiz,
///   faq, guide, translate).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (store, session, translation gate).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let session_routes = Router::new()
        .route("/", get(session::get_session))
        .route("/navigate", post(session::navigate));

    let onboarding_routes = Router::new()
        .route("/", get(onboarding::get_wizard))
        .route("/regions", get(onboarding::list_regions))
        .route("/step1", post(onboarding::submit_step1))
        .route("/step2", post(onboarding::submit_step2))
        .route("/step3", post(onboarding::submit_step3))
        .route("/previous", post(onboarding::previous_step));

    let dashboard_routes = Router::new()
        .route("/", get(dashboard::get_dashboard))
        .route("/checklist/{id}/toggle", post(dashboard::toggle_item));

    let quiz_routes = Router::new()
        .route("/", get(quiz::get_quiz))
        .route("/select", post(quiz::select_answer))
        .route("/next", post(quiz::next_question))
        .route("/retake", post(quiz::retake));

    let faq_routes = Router::new().route("/", get(faq::list_faqs));

    let guide_routes = Router::new().route("/{document_type}", get(guide::get_guide));

    let translate_routes = Router::new().route("/", post(translate::translate));

    Router::new()
        .nest("/api/session", session_routes)
        .nest("/api/onboarding", onboarding_routes)
        .nest("/api/dashboard", dashboard_routes)
        .nest("/api/quiz", quiz_routes)
        .nest("/api/faqs", faq_routes)
        .nest("/api/guides", guide_routes)
        .nest("/api/translate", translate_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
