use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use promo_core::{ConditionType, Promotion, WindowSemantics};

use crate::r#trait::{PromotionStore, StoreError};

/// In-memory promotion store.
///
/// Intended for tests/dev. Rows are returned in insertion order, matching
/// the "store's own order" contract.
#[derive(Debug)]
pub struct InMemoryPromotionStore {
    semantics: WindowSemantics,
    rows: RwLock<Vec<Promotion>>,
}

impl InMemoryPromotionStore {
    pub fn new(semantics: WindowSemantics) -> Self {
        Self {
            semantics,
            rows: RwLock::new(Vec::new()),
        }
    }

    pub fn insert(&self, promotion: Promotion) {
        self.rows.write().expect("rows lock poisoned").push(promotion);
    }
}

#[async_trait]
impl PromotionStore for InMemoryPromotionStore {
    async fn find_by_status_and_condition(
        &self,
        status: &str,
        condition_type: ConditionType,
        target_id: &str,
        starts_at: Option<DateTime<Utc>>,
        ends_at: Option<DateTime<Utc>>,
    ) -> Result<Vec<Promotion>, StoreError> {
        let rows = self.rows.read().expect("rows lock poisoned");
        Ok(rows
            .iter()
            .filter(|p| {
                p.status == status
                    && p.conditions.contains(condition_type, target_id)
                    && self
                        .semantics
                        .window_matches(p.starts_at, p.ends_at, starts_at, ends_at)
            })
            .cloned()
            .collect())
    }

    async fn find_by_status(&self, status: &str) -> Result<Vec<Promotion>, StoreError> {
        let rows = self.rows.read().expect("rows lock poisoned");
        Ok(rows.iter().filter(|p| p.status == status).cloned().collect())
    }
}
