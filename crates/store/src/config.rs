//! Tier configuration.
//!
//! Each tier is independently configured: its own connection string, table
//! name, and date-window semantics. The defaults mirror the two source
//! schemas (`promotions` on the primary, `promotion` on the fallback).

use thiserror::Error;

use promo_core::WindowSemantics;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

#[derive(Debug, Clone)]
pub struct TierSettings {
    pub url: String,
    pub table: String,
    pub semantics: WindowSemantics,
}

#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub primary: TierSettings,
    pub fallback: TierSettings,
}

impl StoreSettings {
    /// Load both tiers from the environment (`PRIMARY_DATABASE_URL`,
    /// `FALLBACK_DATABASE_URL`).
    pub fn from_env() -> Result<Self, ConfigError> {
        let primary_url = require_var("PRIMARY_DATABASE_URL")?;
        let fallback_url = require_var("FALLBACK_DATABASE_URL")?;
        Ok(Self::for_urls(primary_url, fallback_url))
    }

    pub fn for_urls(primary_url: String, fallback_url: String) -> Self {
        Self {
            primary: TierSettings {
                url: primary_url,
                table: "promotions".to_string(),
                semantics: WindowSemantics::Overlap,
            },
            fallback: TierSettings {
                url: fallback_url,
                table: "promotion".to_string(),
                semantics: WindowSemantics::Containment,
            },
        }
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}
