use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

use promo_store::{
    FallbackLookup, PostgresPromotionStore, PromotionStore, StoreSettings, TierSettings,
};

/// Long-lived application services shared across requests.
pub struct AppServices {
    pub lookup: FallbackLookup,
}

/// Connect both tiers and assemble the fallback lookup.
pub async fn build_services(settings: &StoreSettings) -> anyhow::Result<AppServices> {
    let primary = connect_tier(&settings.primary).await?;
    let fallback = connect_tier(&settings.fallback).await?;
    Ok(AppServices {
        lookup: FallbackLookup::new(primary, fallback),
    })
}

async fn connect_tier(tier: &TierSettings) -> anyhow::Result<Arc<dyn PromotionStore>> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&tier.url)
        .await?;
    tracing::info!(table = %tier.table, "connected promotion store tier");
    Ok(Arc::new(PostgresPromotionStore::new(
        pool,
        tier.table.clone(),
        tier.semantics,
    )))
}
