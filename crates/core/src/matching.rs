//! Promotion/criteria matching and date-window arithmetic.
//!
//! Pure functions with no dependencies; the store adapters reproduce the
//! same semantics in SQL.

use chrono::{DateTime, Utc};

use crate::criteria::SearchCriteria;
use crate::promotion::Promotion;

/// How a promotion's own active window is compared against a requested
/// window. The two tiers of the original system disagree on this, so it is
/// configured per tier instead of being a single hard-coded rule:
///
/// - the primary store admits partial intersection (`Overlap`);
/// - the fallback store requires the promotion's window to sit inside the
///   requested window (`Containment`).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WindowSemantics {
    /// Partial intersection: `promo.ends_at >= req.starts_at` and
    /// `promo.starts_at <= req.ends_at`, each half skipped when that bound
    /// is absent from the request.
    Overlap,
    /// Full containment: `promo.starts_at >= req.starts_at` and
    /// `promo.ends_at <= req.ends_at`, each half skipped when absent.
    Containment,
}

impl WindowSemantics {
    /// Check a promotion window against an optionally-bounded requested
    /// window.
    pub fn window_matches(
        &self,
        promo_starts_at: DateTime<Utc>,
        promo_ends_at: DateTime<Utc>,
        req_starts_at: Option<DateTime<Utc>>,
        req_ends_at: Option<DateTime<Utc>>,
    ) -> bool {
        match self {
            WindowSemantics::Overlap => {
                req_starts_at.is_none_or(|s| promo_ends_at >= s)
                    && req_ends_at.is_none_or(|e| promo_starts_at <= e)
            }
            WindowSemantics::Containment => {
                req_starts_at.is_none_or(|s| promo_starts_at >= s)
                    && req_ends_at.is_none_or(|e| promo_ends_at <= e)
            }
        }
    }
}

/// Full match test: status equality (case-sensitive, against the validated
/// canonical value), condition membership, and the window check under the
/// given semantics.
pub fn promotion_matches(
    promotion: &Promotion,
    criteria: &SearchCriteria,
    semantics: WindowSemantics,
) -> bool {
    promotion.status == criteria.status()
        && promotion
            .conditions
            .contains(criteria.target().condition_type(), criteria.target().id())
        && semantics.window_matches(
            promotion.starts_at,
            promotion.ends_at,
            criteria.starts_at(),
            criteria.ends_at(),
        )
}
