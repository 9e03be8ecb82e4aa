use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use promo_core::{ConditionType, Promotion};

/// Failure at the store boundary. Distinct from "no rows": the coordinator
/// never treats a store error as an empty result set.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A query failed mid-flight (connection loss, bad SQL, decode failure).
    #[error("store query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// The store could not be reached at all.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Read-only search capability over one backing promotion store.
///
/// Two independently configured instances exist at runtime (primary and
/// fallback); both are long-lived and safe to share across concurrent
/// requests. Timeouts and retries are the adapter's concern, never the
/// caller's.
#[async_trait]
pub trait PromotionStore: Send + Sync {
    /// Promotions with the given status whose conditions contain
    /// `target_id` under `condition_type`, filtered by the store's date
    /// window semantics when bounds are supplied. Row order is the store's
    /// own; callers take the first.
    async fn find_by_status_and_condition(
        &self,
        status: &str,
        condition_type: ConditionType,
        target_id: &str,
        starts_at: Option<DateTime<Utc>>,
        ends_at: Option<DateTime<Utc>>,
    ) -> Result<Vec<Promotion>, StoreError>;

    /// All promotions with the given status, no condition or date filter.
    async fn find_by_status(&self, status: &str) -> Result<Vec<Promotion>, StoreError>;
}
