use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One match event reported by the recognition service, flattened to the
/// fixed field set exported to CSV. Every field is optional on the wire;
/// missing fields serialize as empty CSV cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchLogRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub profile_id: Option<String>,
    #[serde(default)]
    pub profile_name: Option<String>,
    /// Match confidence in [0.0, 1.0].
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub device_name: Option<String>,
    #[serde(default)]
    pub device_location: Option<String>,
    #[serde(default)]
    pub matched_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A named entity in the recognition system. `active` controls whether the
/// service matches against it; `name` is the case-insensitive key used for
/// reconciliation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub active: bool,
}

/// Project a raw match-log object onto [`MatchLogRecord`].
///
/// Pure projection: top-level fields are taken by name, anything missing or
/// null becomes `None`, and extra fields are dropped. No validation.
pub fn flatten_match_log(raw: &Value) -> MatchLogRecord {
    MatchLogRecord {
        id: string_field(raw, "id"),
        profile_id: string_field(raw, "profile_id"),
        profile_name: string_field(raw, "profile_name"),
        confidence: raw.get("confidence").and_then(Value::as_f64),
        device_id: string_field(raw, "device_id"),
        device_name: string_field(raw, "device_name"),
        device_location: string_field(raw, "device_location"),
        matched_at: string_field(raw, "matched_at"),
        created_at: string_field(raw, "created_at"),
    }
}

/// Read a field as a string. Numeric and boolean values are rendered with
/// their JSON representation so numeric ids survive the projection.
fn string_field(raw: &Value, key: &str) -> Option<String> {
    match raw.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}
