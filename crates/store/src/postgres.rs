//! Postgres-backed promotion store.
//!
//! One instance per tier, each with its own connection pool, table name,
//! and date-window semantics. Condition matching pushes down to JSONB
//! containment (`conditions_json @> ...`) so the membership test runs
//! against structured data, never against serialized text.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{json, Value as JsonValue};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use promo_core::{ConditionSet, ConditionType, Promotion, WindowSemantics};

use crate::r#trait::{PromotionStore, StoreError};

const COLUMNS: &str = "id, code, type, value_json, value_type, starts_at, ends_at, \
     is_automatic, usage_limit, usage_count, status, conditions_json, rules_json, \
     created_at, updated_at";

pub struct PostgresPromotionStore {
    pool: PgPool,
    table: String,
    semantics: WindowSemantics,
}

impl PostgresPromotionStore {
    /// `table` comes from static tier configuration, never from request
    /// input.
    pub fn new(pool: PgPool, table: impl Into<String>, semantics: WindowSemantics) -> Self {
        Self {
            pool,
            table: table.into(),
            semantics,
        }
    }

    fn search_sql(&self) -> String {
        // The two tiers compare date bounds in opposite directions; see
        // `WindowSemantics`.
        let (starts_pred, ends_pred) = match self.semantics {
            WindowSemantics::Overlap => ("ends_at >= $3", "starts_at <= $4"),
            WindowSemantics::Containment => ("starts_at >= $3", "ends_at <= $4"),
        };
        format!(
            "SELECT {COLUMNS} FROM {table} \
             WHERE status = $1 \
             AND conditions_json @> $2::jsonb \
             AND ($3::timestamptz IS NULL OR {starts_pred}) \
             AND ($4::timestamptz IS NULL OR {ends_pred})",
            table = self.table,
        )
    }
}

#[async_trait]
impl PromotionStore for PostgresPromotionStore {
    async fn find_by_status_and_condition(
        &self,
        status: &str,
        condition_type: ConditionType,
        target_id: &str,
        starts_at: Option<DateTime<Utc>>,
        ends_at: Option<DateTime<Utc>>,
    ) -> Result<Vec<Promotion>, StoreError> {
        // A containment probe against the conditions array: matches any row
        // whose document has an entry of this type listing the target id.
        let probe = json!([{ "type": condition_type.as_str(), "value": [target_id] }]);

        let rows = sqlx::query(&self.search_sql())
            .bind(status)
            .bind(probe)
            .bind(starts_at)
            .bind(ends_at)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_promotion).collect()
    }

    async fn find_by_status(&self, status: &str) -> Result<Vec<Promotion>, StoreError> {
        let sql = format!("SELECT {COLUMNS} FROM {table} WHERE status = $1", table = self.table);
        let rows = sqlx::query(&sql).bind(status).fetch_all(&self.pool).await?;
        rows.iter().map(row_to_promotion).collect()
    }
}

fn row_to_promotion(row: &PgRow) -> Result<Promotion, StoreError> {
    let conditions: Option<JsonValue> = row.try_get("conditions_json")?;
    let rules: Option<JsonValue> = row.try_get("rules_json")?;

    Ok(Promotion {
        id: row.try_get("id")?,
        code: row.try_get("code")?,
        kind: row.try_get("type")?,
        value: row.try_get("value_json")?,
        value_type: row.try_get("value_type")?,
        starts_at: row.try_get("starts_at")?,
        ends_at: row.try_get("ends_at")?,
        is_automatic: row.try_get("is_automatic")?,
        usage_limit: row.try_get("usage_limit")?,
        usage_count: row.try_get("usage_count")?,
        status: row.try_get("status")?,
        conditions: conditions
            .as_ref()
            .map(ConditionSet::decode_lossy)
            .unwrap_or_default(),
        rules: rules.unwrap_or_else(|| json!({})),
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
