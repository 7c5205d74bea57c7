//! Repository for the key/value `settings` table.

use sqlx::PgPool;

/// Reads and writes string settings by key.
pub struct SettingRepo;

impl SettingRepo {
    /// Stored value for `key`, if any.
    pub async fn get(pool: &PgPool, key: &str) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT value FROM settings WHERE key = $1")
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace the value for `key`, returning the stored value.
    pub async fn upsert(pool: &PgPool, key: &str, value: &str) -> Result<String, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "INSERT INTO settings (key, value) VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_settings_key DO UPDATE SET value = EXCLUDED.value
             RETURNING value",
        )
        .bind(key)
        .bind(value)
        .fetch_one(pool)
        .await
    }
}
