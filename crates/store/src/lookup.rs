//! Two-tier fallback lookup.
//!
//! The coordinator walks an ordered list of store handles: the first tier
//! returning rows wins and later tiers are never queried; a store error
//! propagates immediately instead of being treated as empty; all tiers
//! empty reports not-found with the original request field and value.

use std::sync::Arc;

use promo_core::{MatchOutcome, SearchCriteria, SourceTier};

use crate::r#trait::{PromotionStore, StoreError};

pub struct FallbackLookup {
    tiers: Vec<(SourceTier, Arc<dyn PromotionStore>)>,
}

impl FallbackLookup {
    pub fn new(primary: Arc<dyn PromotionStore>, fallback: Arc<dyn PromotionStore>) -> Self {
        Self::with_tiers(vec![
            (SourceTier::Primary, primary),
            (SourceTier::Fallback, fallback),
        ])
    }

    pub fn with_tiers(tiers: Vec<(SourceTier, Arc<dyn PromotionStore>)>) -> Self {
        Self { tiers }
    }

    /// Search each tier in order. Exactly one round trip per tier, strictly
    /// sequential; the second fires only once the first is known empty.
    pub async fn lookup(&self, criteria: &SearchCriteria) -> Result<MatchOutcome, StoreError> {
        let target = criteria.target();

        for (tier, store) in &self.tiers {
            let matches = store
                .find_by_status_and_condition(
                    criteria.status(),
                    target.condition_type(),
                    target.id(),
                    criteria.starts_at(),
                    criteria.ends_at(),
                )
                .await?;

            if let Some(promotion) = matches.into_iter().next() {
                tracing::debug!(tier = ?tier, promotion_id = %promotion.id, "promotion matched");
                return Ok(MatchOutcome::Found {
                    promotion,
                    tier: *tier,
                });
            }
            tracing::debug!(tier = ?tier, "no match in tier");
        }

        Ok(MatchOutcome::NotFound {
            field: target.request_field().to_string(),
            value: target.id().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::in_memory::InMemoryPromotionStore;
    use async_trait::async_trait;
    use chrono::{DateTime, NaiveDate, Utc};
    use promo_core::{
        validate_with_today, Condition, ConditionSet, ConditionType, Promotion, SearchInput,
        WindowSemantics,
    };
    use rust_decimal::Decimal;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use uuid::Uuid;

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn promo(code: &str, target: &str) -> Promotion {
        Promotion {
            id: Uuid::now_v7(),
            code: code.into(),
            kind: "percentage".into(),
            value: Decimal::new(1500, 2),
            value_type: "percentage".into(),
            starts_at: ts("2026-01-01T00:00:00Z"),
            ends_at: ts("2026-12-31T00:00:00Z"),
            is_automatic: true,
            usage_limit: None,
            usage_count: None,
            status: "active".into(),
            conditions: ConditionSet::new(vec![Condition {
                condition_type: ConditionType::Product,
                value: vec![target.into()],
            }]),
            rules: serde_json::json!({}),
            created_at: ts("2026-01-01T00:00:00Z"),
            updated_at: ts("2026-01-01T00:00:00Z"),
        }
    }

    fn criteria(product_id: &str) -> SearchCriteria {
        let input = SearchInput {
            status: Some("active".into()),
            product_id: Some(product_id.into()),
            ..SearchInput::default()
        };
        validate_with_today(&input, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()).unwrap()
    }

    /// Wraps a store and counts queries, for never-called assertions.
    struct CountingStore {
        inner: InMemoryPromotionStore,
        calls: AtomicUsize,
    }

    impl CountingStore {
        fn new(inner: InMemoryPromotionStore) -> Self {
            Self {
                inner,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PromotionStore for CountingStore {
        async fn find_by_status_and_condition(
            &self,
            status: &str,
            condition_type: ConditionType,
            target_id: &str,
            starts_at: Option<DateTime<Utc>>,
            ends_at: Option<DateTime<Utc>>,
        ) -> Result<Vec<Promotion>, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner
                .find_by_status_and_condition(status, condition_type, target_id, starts_at, ends_at)
                .await
        }

        async fn find_by_status(&self, status: &str) -> Result<Vec<Promotion>, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.find_by_status(status).await
        }
    }

    /// Always errors, standing in for an unreachable store.
    struct BrokenStore;

    #[async_trait]
    impl PromotionStore for BrokenStore {
        async fn find_by_status_and_condition(
            &self,
            _status: &str,
            _condition_type: ConditionType,
            _target_id: &str,
            _starts_at: Option<DateTime<Utc>>,
            _ends_at: Option<DateTime<Utc>>,
        ) -> Result<Vec<Promotion>, StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }

        async fn find_by_status(&self, _status: &str) -> Result<Vec<Promotion>, StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn primary_hit_never_queries_the_fallback() {
        let primary = InMemoryPromotionStore::new(WindowSemantics::Overlap);
        primary.insert(promo("PRIMARY", "SKU-1"));
        let fallback = InMemoryPromotionStore::new(WindowSemantics::Containment);
        fallback.insert(promo("FALLBACK", "SKU-1"));
        let fallback = Arc::new(CountingStore::new(fallback));

        let lookup = FallbackLookup::new(Arc::new(primary), fallback.clone());
        let outcome = lookup.lookup(&criteria("SKU-1")).await.unwrap();

        match outcome {
            MatchOutcome::Found { promotion, tier } => {
                assert_eq!(promotion.code, "PRIMARY");
                assert_eq!(tier, SourceTier::Primary);
            }
            other => panic!("expected a primary match, got {other:?}"),
        }
        assert_eq!(fallback.calls(), 0);
    }

    #[tokio::test]
    async fn empty_primary_falls_through_and_tags_the_fallback_tier() {
        let primary = InMemoryPromotionStore::new(WindowSemantics::Overlap);
        let fallback = InMemoryPromotionStore::new(WindowSemantics::Containment);
        fallback.insert(promo("FALLBACK", "SKU-1"));

        let lookup = FallbackLookup::new(Arc::new(primary), Arc::new(fallback));
        let outcome = lookup.lookup(&criteria("SKU-1")).await.unwrap();

        match outcome {
            MatchOutcome::Found { promotion, tier } => {
                assert_eq!(promotion.code, "FALLBACK");
                assert_eq!(tier, SourceTier::Fallback);
            }
            other => panic!("expected a fallback match, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn both_tiers_empty_reports_not_found_with_field_and_value() {
        let primary = Arc::new(CountingStore::new(InMemoryPromotionStore::new(
            WindowSemantics::Overlap,
        )));
        let fallback = Arc::new(CountingStore::new(InMemoryPromotionStore::new(
            WindowSemantics::Containment,
        )));

        let lookup = FallbackLookup::new(primary.clone(), fallback.clone());
        let outcome = lookup.lookup(&criteria("SKU-NONE")).await.unwrap();

        assert_eq!(
            outcome,
            MatchOutcome::NotFound {
                field: "product-id".into(),
                value: "SKU-NONE".into(),
            }
        );
        // Exactly one round trip per tier.
        assert_eq!(primary.calls(), 1);
        assert_eq!(fallback.calls(), 1);
    }

    #[tokio::test]
    async fn primary_error_propagates_instead_of_falling_back() {
        let fallback = InMemoryPromotionStore::new(WindowSemantics::Containment);
        fallback.insert(promo("FALLBACK", "SKU-1"));
        let fallback = Arc::new(CountingStore::new(fallback));

        let lookup = FallbackLookup::new(Arc::new(BrokenStore), fallback.clone());
        let err = lookup.lookup(&criteria("SKU-1")).await.unwrap_err();

        assert!(matches!(err, StoreError::Unavailable(_)));
        assert_eq!(fallback.calls(), 0);
    }

    #[tokio::test]
    async fn multiple_matches_in_one_tier_returns_the_first() {
        let primary = InMemoryPromotionStore::new(WindowSemantics::Overlap);
        primary.insert(promo("FIRST", "SKU-1"));
        primary.insert(promo("SECOND", "SKU-1"));
        let fallback = InMemoryPromotionStore::new(WindowSemantics::Containment);

        let lookup = FallbackLookup::new(Arc::new(primary), Arc::new(fallback));
        match lookup.lookup(&criteria("SKU-1")).await.unwrap() {
            MatchOutcome::Found { promotion, .. } => assert_eq!(promotion.code, "FIRST"),
            other => panic!("expected a match, got {other:?}"),
        }
    }
}
