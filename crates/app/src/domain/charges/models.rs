//! Charge Models

use jiff::{Timestamp, civil::Date};

/// Sentinel id carried by a charge that has not been persisted yet.
pub const UNSAVED_CHARGE_ID: i32 = 0;

/// Charge Model
///
/// A named fee plan with an amount, a validity window and audit timestamps.
/// Audit fields are owned by the store; callers never set them.
#[derive(Debug, Clone, PartialEq)]
pub struct Charge {
    pub charge_id: i32,
    pub name: String,
    pub amount: i32,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub created_date: Timestamp,
    pub updated_date: Timestamp,
}

/// Charge Save Data
///
/// The user-editable subset submitted to `save`. A `charge_id` of
/// [`UNSAVED_CHARGE_ID`] requests an insert, anything else an update.
#[derive(Debug, Clone, PartialEq)]
pub struct ChargeData {
    pub charge_id: i32,
    pub name: String,
    pub amount: i32,
    pub start_date: Date,
    pub end_date: Option<Date>,
}

/// Charge Search Condition
///
/// Transient value carrying the operator's name-substring query. Never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChargeSearchCondition {
    pub name: Option<String>,
}

/// Build the `LIKE` pattern for a search condition.
///
/// An absent or empty name yields `%%`, which matches every row. `%` and
/// `_` inside the condition are passed through unescaped and keep their
/// wildcard meaning.
#[must_use]
pub fn name_like_pattern(condition: &ChargeSearchCondition) -> String {
    format!("%{}%", condition.name.as_deref().unwrap_or(""))
}
