use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use promo_core::{ConditionSet, FieldError, Promotion, SearchInput};

// -------------------------
// Request DTOs
// -------------------------

/// Raw search query. Dates arrive as strings and are parsed here so a
/// malformed date is reported as a typed field error on the implicated
/// field, not a generic decode failure.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub status: Option<String>,
    pub starts_at: Option<String>,
    pub ends_at: Option<String>,
    #[serde(rename = "product-id")]
    pub product_id: Option<String>,
    #[serde(rename = "category-id")]
    pub category_id: Option<String>,
}

impl SearchQuery {
    pub fn into_input(self) -> Result<SearchInput, Vec<FieldError>> {
        let mut errors = Vec::new();
        let starts_at = parse_date("starts_at", self.starts_at.as_deref(), &mut errors);
        let ends_at = parse_date("ends_at", self.ends_at.as_deref(), &mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(SearchInput {
            status: self.status,
            starts_at,
            ends_at,
            product_id: self.product_id,
            category_id: self.category_id,
        })
    }
}

fn parse_date(
    field: &'static str,
    raw: Option<&str>,
    errors: &mut Vec<FieldError>,
) -> Option<DateTime<Utc>> {
    let raw = raw?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(_) => {
            errors.push(FieldError::new(field, "Invalid date format"));
            None
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct PromotionResponse {
    pub id: Uuid,
    pub code: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: Decimal,
    pub value_type: String,
    #[serde(serialize_with = "iso_utc_seconds")]
    pub starts_at: DateTime<Utc>,
    #[serde(serialize_with = "iso_utc_seconds")]
    pub ends_at: DateTime<Utc>,
    pub is_automatic: bool,
    pub usage_limit: Option<i32>,
    pub usage_count: Option<i32>,
    pub status: String,
    pub conditions: ConditionSet,
    pub rules: JsonValue,
    #[serde(serialize_with = "iso_utc_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "iso_utc_seconds")]
    pub updated_at: DateTime<Utc>,
}

impl From<Promotion> for PromotionResponse {
    fn from(p: Promotion) -> Self {
        Self {
            id: p.id,
            code: p.code,
            kind: p.kind,
            value: p.value,
            value_type: p.value_type,
            starts_at: p.starts_at,
            ends_at: p.ends_at,
            is_automatic: p.is_automatic,
            usage_limit: p.usage_limit,
            usage_count: p.usage_count,
            status: p.status,
            conditions: p.conditions,
            rules: p.rules,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Timestamps are exposed as `yyyy-MM-dd'T'HH:mm:ss'Z'` (second precision,
/// always UTC).
fn iso_utc_seconds<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
}
