use chrono::{DateTime, Utc};

use crate::promotion::ConditionType;

/// The only status value this service searches for.
pub const STATUS_ACTIVE: &str = "active";

/// Raw, already-decoded search input. Dates have been parsed by the input
/// layer; everything else is still unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    pub status: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub product_id: Option<String>,
    pub category_id: Option<String>,
}

/// The single identifier a search targets. Product and category are
/// mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTarget {
    Product(String),
    Category(String),
}

impl SearchTarget {
    pub fn condition_type(&self) -> ConditionType {
        match self {
            SearchTarget::Product(_) => ConditionType::Product,
            SearchTarget::Category(_) => ConditionType::Category,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            SearchTarget::Product(id) | SearchTarget::Category(id) => id,
        }
    }

    /// The field name used in the request (and echoed back in not-found
    /// reporting). Hyphenated, unlike the snake_case validation keys.
    pub fn request_field(&self) -> &'static str {
        match self {
            SearchTarget::Product(_) => "product-id",
            SearchTarget::Category(_) => "category-id",
        }
    }
}

/// A validated, immutable search. Only constructible via
/// [`crate::validate::validate`], so an instance that reaches the matching
/// stage has passed every validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub(crate) status: String,
    pub(crate) target: SearchTarget,
    pub(crate) starts_at: Option<DateTime<Utc>>,
    pub(crate) ends_at: Option<DateTime<Utc>>,
}

impl SearchCriteria {
    /// Canonical (lowercase) status used for storage-layer comparison.
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn target(&self) -> &SearchTarget {
        &self.target
    }

    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        self.starts_at
    }

    pub fn ends_at(&self) -> Option<DateTime<Utc>> {
        self.ends_at
    }
}
