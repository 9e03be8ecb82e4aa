use serde::Serialize;

use crate::promotion::Promotion;

/// One of the two ordered data sources searched in sequence.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceTier {
    Primary,
    Fallback,
}

/// Outcome of a full two-tier lookup: the winning promotion tagged with the
/// tier it came from, or a not-found report carrying the request field and
/// identifier that failed to match.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    Found {
        promotion: Promotion,
        tier: SourceTier,
    },
    NotFound {
        field: String,
        value: String,
    },
}
