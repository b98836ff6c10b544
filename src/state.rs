use std::sync::Arc;

use axum::extract::FromRef;
use tokio::sync::Mutex;

use crate::{
    config::Config, models::session::Session, storage::KvStore, utils::translator::TranslationGate,
};

/// The single in-process session, the counterpart of the one local browser
/// context the application serves.
pub type SharedSession = Arc<Mutex<Session>>;

#[derive(Clone)]
pub struct AppState {
    pub store: KvStore,
    pub config: Config,
    pub session: SharedSession,
    pub translation_gate: TranslationGate,
}

impl AppState {
    pub fn new(store: KvStore, config: Config) -> Self {
        Self {
            store,
            config,
            session: Arc::new(Mutex::new(Session::new())),
            translation_gate: TranslationGate::default(),
        }
    }
}

impl FromRef<AppState> for KvStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for SharedSession {
    fn from_ref(state: &AppState) -> Self {
        state.session.clone()
    }
}

impl FromRef<AppState> for TranslationGate {
    fn from_ref(state: &AppState) -> Self {
        state.translation_gate.clone()
    }
}
