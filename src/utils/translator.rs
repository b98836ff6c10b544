// src/utils/translator.rs

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};
use std::time::Duration;

use crate::{config::TRANSLATION_LATENCY_MS, error::AppError};

/// Display name for a target language code.
/// Codes outside the supported set are echoed back unchanged.
pub fn language_name(code: &str) -> &str {
    match code {
        "hi" => "Hindi",
        "kn" => "Kannada",
        "mr" => "Marathi",
        "bn" => "Bengali",
        "ta" => "Tamil",
        "te" => "Telugu",
        "ml" => "Malayalam",
        "gu" => "Gujarati",
        other => other,
    }
}

/// Simulates the Azure Translator call: a fixed suspend standing in for
/// network latency, then a deterministic tagged string. The mock itself never
/// fails; the Result keeps the caller's failure-handling path honest.
pub async fn translate_mock(text: &str, to: &str) -> Result<String, AppError> {
    tokio::time::sleep(Duration::from_millis(TRANSLATION_LATENCY_MS)).await;
    Ok(format!("[Azure Translator MOCK → {}]: {}", language_name(to), text))
}

/// Sequences overlapping translation requests. Each request takes a ticket
/// before suspending; after resolving, only the holder of the newest ticket
/// may apply its result. Earlier in-flight results are discarded rather than
/// clobbering a newer one.
#[derive(Debug, Clone, Default)]
pub struct TranslationGate {
    latest: Arc<AtomicU64>,
}

impl TranslationGate {
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}
