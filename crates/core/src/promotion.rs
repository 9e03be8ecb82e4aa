use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

/// The kind of eligibility condition a promotion carries.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionType {
    Product,
    Category,
}

impl ConditionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionType::Product => "product",
            ConditionType::Category => "category",
        }
    }
}

/// One stored eligibility rule: a condition type plus the set of target
/// identifiers it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(rename = "type")]
    pub condition_type: ConditionType,
    pub value: Vec<String>,
}

/// A promotion's full eligibility document, decoded from its stored
/// (JSONB) representation into a typed shape so matching is a membership
/// query rather than a text-pattern test.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionSet(Vec<Condition>);

impl ConditionSet {
    pub fn new(conditions: Vec<Condition>) -> Self {
        Self(conditions)
    }

    /// Typed membership query: does any condition of `condition_type`
    /// list `target_id` in its value set?
    pub fn contains(&self, condition_type: ConditionType, target_id: &str) -> bool {
        self.0
            .iter()
            .filter(|c| c.condition_type == condition_type)
            .any(|c| c.value.iter().any(|v| v == target_id))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode a stored conditions document. A malformed document is replaced
    /// with an empty set and logged, never surfaced as an error; the row is
    /// still usable, it just matches nothing.
    pub fn decode_lossy(raw: &JsonValue) -> Self {
        match serde_json::from_value(raw.clone()) {
            Ok(set) => set,
            Err(err) => {
                tracing::warn!(error = %err, "malformed conditions document, substituting empty set");
                Self::default()
            }
        }
    }
}

/// Stored promotion row. Read-only from this system's perspective: rows are
/// created and updated by an external administrative process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: Uuid,
    pub code: String,
    /// Promotion kind, e.g. `fixed_amount` or `percentage` (exposed as
    /// `type` at the API boundary).
    pub kind: String,
    pub value: Decimal,
    pub value_type: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub is_automatic: bool,
    pub usage_limit: Option<i32>,
    pub usage_count: Option<i32>,
    pub status: String,
    pub conditions: ConditionSet,
    /// Opaque rules payload, passed through unmodified.
    pub rules: JsonValue,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
