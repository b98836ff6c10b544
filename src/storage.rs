// src/storage.rs

use serde::{Serialize, de::DeserializeOwned};
use sqlx::{Row, SqlitePool};

/// Persisted keys. Each is independently readable and writable; there is no
/// cross-key transaction.
pub const PROFILE_KEY: &str = "user-profile";
pub const CHECKLIST_KEY: &str = "citizen-checklist";
pub const QUIZ_COMPLETED_KEY: &str = "quiz-completed";
pub const BEST_SCORE_KEY: &str = "best-quiz-score";

/// Key-value adapter over the `kv_store` table. Values are JSON documents.
///
/// Reads fall back to a caller-supplied default and never write; writes are
/// fire-and-forget with failures logged and swallowed. No storage failure is
/// ever surfaced to the user.
#[derive(Debug, Clone)]
pub struct KvStore {
    pool: SqlitePool,
}

impl KvStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Reads and decodes the value stored under `key`. An absent row, a read
    /// failure, or an undecodable value all yield `default`; the read path
    /// never writes the default back.
    pub async fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await;

        let raw: String = match row {
            Ok(Some(row)) => row.get("value"),
            Ok(None) => return default,
            Err(e) => {
                tracing::error!("Failed to read key '{}': {:?}", key, e);
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    "Stored value under '{}' is not decodable, using the default: {:?}",
                    key,
                    e
                );
                default
            }
        }
    }

    /// Serializes `value` and upserts it under `key`. Encoding or database
    /// failures are logged and swallowed; whatever was stored before stays
    /// untouched.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) {
        let encoded = match serde_json::to_string(value) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::error!("Failed to encode value for key '{}': {:?}", key, e);
                return;
            }
        };

        let result = sqlx::query(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP",
        )
        .bind(key)
        .bind(&encoded)
        .execute(&self.pool)
        .await;

        if let Err(e) = result {
            tracing::error!("Failed to write key '{}': {:?}", key, e);
        }
    }
}
