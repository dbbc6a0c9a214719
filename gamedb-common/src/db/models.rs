//! Database models

use serde::{Deserialize, Serialize};

/// Persisted catalog entry. `id` is assigned by the store on insert and
/// never supplied by clients; `created_at`/`updated_at` are maintained by
/// the store layer (RFC 3339).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: i64,
    pub publisher_id: String,
    pub name: String,
    pub platform: String,
    pub store_id: Option<String>,
    pub bundle_id: String,
    pub app_version: String,
    pub is_published: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Client-settable fields of a Game, as accepted by create/update and
/// produced by the feed pipeline.
///
/// All fields default so a sparse body deserializes; required-field
/// enforcement happens in the store layer, which reports every missing
/// field instead of failing on the first one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GamePayload {
    #[serde(default)]
    pub publisher_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub store_id: Option<String>,
    #[serde(default)]
    pub bundle_id: String,
    #[serde(default)]
    pub app_version: String,
    #[serde(default)]
    pub is_published: bool,
}

impl GamePayload {
    /// Names of required fields that are empty, in declaration order.
    /// Empty result means the payload is valid.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.publisher_id.trim().is_empty() {
            missing.push("publisherId");
        }
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.platform.trim().is_empty() {
            missing.push("platform");
        }
        if self.bundle_id.trim().is_empty() {
            missing.push("bundleId");
        }
        if self.app_version.trim().is_empty() {
            missing.push("appVersion");
        }
        missing
    }
}
