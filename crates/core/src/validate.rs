//! Search-criteria validation.
//!
//! A plain function returning typed field errors, callable and testable
//! without any framework context. All rules are evaluated and violations
//! accumulate, except the documented product/category blank short-circuit.

use chrono::{NaiveDate, Utc};

use crate::criteria::{SearchCriteria, SearchInput, SearchTarget, STATUS_ACTIVE};

/// One field-level validation violation. `field` uses the external
/// snake_case naming (`starts_at`, `product_id`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validate a raw search input against today's UTC calendar date.
pub fn validate(input: &SearchInput) -> Result<SearchCriteria, Vec<FieldError>> {
    validate_with_today(input, Utc::now().date_naive())
}

/// Validation with an explicit "today" so date rules are deterministic in
/// tests.
pub fn validate_with_today(
    input: &SearchInput,
    today: NaiveDate,
) -> Result<SearchCriteria, Vec<FieldError>> {
    let mut errors = Vec::new();

    validate_status(input, &mut errors);
    let target = validate_target(input, &mut errors);
    validate_dates(input, today, &mut errors);

    match target {
        Some(target) if errors.is_empty() => Ok(SearchCriteria {
            status: STATUS_ACTIVE.to_string(),
            target,
            starts_at: input.starts_at,
            ends_at: input.ends_at,
        }),
        _ => Err(errors),
    }
}

fn validate_status(input: &SearchInput, errors: &mut Vec<FieldError>) {
    match input.status.as_deref() {
        None => errors.push(FieldError::new("status", "Status is required")),
        Some(status) if status.trim().is_empty() => {
            errors.push(FieldError::new("status", "Status is required"));
        }
        Some(status) if !status.eq_ignore_ascii_case(STATUS_ACTIVE) => {
            errors.push(FieldError::new("status", "status value must be as active"));
        }
        Some(_) => {}
    }
}

fn validate_target(input: &SearchInput, errors: &mut Vec<FieldError>) -> Option<SearchTarget> {
    let product_id = input.product_id.as_deref();
    let category_id = input.category_id.as_deref();

    // Blank-but-present identifiers short-circuit the remaining
    // product/category checks for this request.
    if let Some(id) = product_id {
        if id.trim().is_empty() {
            errors.push(FieldError::new(
                "product_id",
                "product_id must be a valid string",
            ));
            return None;
        }
    }
    if let Some(id) = category_id {
        if id.trim().is_empty() {
            errors.push(FieldError::new(
                "category_id",
                "category_id must be a valid string",
            ));
            return None;
        }
    }

    match (product_id, category_id) {
        (Some(_), Some(_)) => {
            errors.push(FieldError::new(
                "product_id, category_id",
                "Fields product_id and category_id are mutually exclusive, only one must be provided",
            ));
            None
        }
        (None, None) => {
            errors.push(FieldError::new(
                "product_id, category_id",
                "Either product_id or category_id must be provided",
            ));
            None
        }
        (Some(id), None) => Some(SearchTarget::Product(id.to_string())),
        (None, Some(id)) => Some(SearchTarget::Category(id.to_string())),
    }
}

fn validate_dates(input: &SearchInput, today: NaiveDate, errors: &mut Vec<FieldError>) {
    // Only the UTC calendar date is compared; a starts_at later today still
    // fails.
    if let Some(starts_at) = input.starts_at {
        if starts_at.date_naive() <= today {
            errors.push(FieldError::new(
                "starts_at",
                "Start date must not be in the past",
            ));
        }
    }

    if let (Some(starts_at), Some(ends_at)) = (input.starts_at, input.ends_at) {
        if ends_at < starts_at {
            errors.push(FieldError::new(
                "ends_at",
                "End date must be after start date",
            ));
        }
    }
}
