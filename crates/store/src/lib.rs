//! Store layer: the `PromotionStore` capability, its Postgres and
//! in-memory adapters, tier configuration, and the two-tier fallback
//! lookup coordinator.

pub mod config;
pub mod in_memory;
pub mod lookup;
pub mod postgres;
pub mod r#trait;

pub use config::{StoreSettings, TierSettings};
pub use in_memory::InMemoryPromotionStore;
pub use lookup::FallbackLookup;
pub use postgres::PostgresPromotionStore;
pub use r#trait::{PromotionStore, StoreError};
