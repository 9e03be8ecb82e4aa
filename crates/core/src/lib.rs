//! `promo-core` — domain foundation for promotion lookup.
//!
//! This crate contains **pure domain** logic (no infrastructure concerns):
//! the promotion data model, search-criteria validation, condition matching,
//! and date-window semantics.

pub mod criteria;
pub mod matching;
pub mod outcome;
pub mod promotion;
pub mod validate;

pub use criteria::{SearchCriteria, SearchInput, SearchTarget, STATUS_ACTIVE};
pub use matching::{promotion_matches, WindowSemantics};
pub use outcome::{MatchOutcome, SourceTier};
pub use promotion::{Condition, ConditionSet, ConditionType, Promotion};
pub use validate::{validate, validate_with_today, FieldError};
