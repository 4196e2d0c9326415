//! Charge form binding and validation.
//!
//! Form fields arrive as `application/x-www-form-urlencoded` strings.
//! [`ChargeForm::bind`] parses and validates them in one pass so that a
//! malformed date is reported exactly like any other field error, and the
//! submitted values stay available for re-rendering the edit view.

use jiff::civil::Date;
use serde::Deserialize;

use charge_app::domain::charges::models::{Charge, ChargeData, UNSAVED_CHARGE_ID};

/// A field-keyed binding or validation error, rendered inline in the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldError {
    pub(crate) field: &'static str,
    pub(crate) message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

const CHARGE_ID_ERROR: &str = "料金IDが不正です。";
const NAME_ERROR: &str = "名前を入力してください。";
const AMOUNT_ERROR: &str = "金額を整数で入力してください。";
const START_DATE_ERROR: &str = "開始日を yyyy-MM-dd 形式で入力してください。";
const END_DATE_ERROR: &str = "終了日を yyyy-MM-dd 形式で入力してください。";

/// Raw charge edit form. Every field is kept as the submitted string.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ChargeForm {
    #[serde(default)]
    pub(crate) charge_id: String,

    #[serde(default)]
    pub(crate) name: String,

    #[serde(default)]
    pub(crate) amount: String,

    #[serde(default)]
    pub(crate) start_date: String,

    #[serde(default)]
    pub(crate) end_date: String,
}

impl ChargeForm {
    /// Parse and validate the submitted fields.
    ///
    /// Returns the typed save data, or every field error found. The form
    /// itself is left untouched so the edit view can re-render it.
    pub(crate) fn bind(&self) -> Result<ChargeData, Vec<FieldError>> {
        let mut errors = Vec::new();

        let charge_id = match self.charge_id.trim() {
            "" => UNSAVED_CHARGE_ID,
            raw => match raw.parse::<i32>() {
                Ok(id) => id,
                Err(_) => {
                    errors.push(FieldError::new("charge_id", CHARGE_ID_ERROR));
                    UNSAVED_CHARGE_ID
                }
            },
        };

        let name = self.name.trim().to_string();
        if name.is_empty() {
            errors.push(FieldError::new("name", NAME_ERROR));
        }

        let amount = match self.amount.trim().parse::<i32>() {
            Ok(amount) => amount,
            Err(_) => {
                errors.push(FieldError::new("amount", AMOUNT_ERROR));
                0
            }
        };

        let start_date = match self.start_date.trim().parse::<Date>() {
            Ok(date) => date,
            Err(_) => {
                errors.push(FieldError::new("start_date", START_DATE_ERROR));
                Date::default()
            }
        };

        let end_date = match self.end_date.trim() {
            "" => None,
            raw => match raw.parse::<Date>() {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push(FieldError::new("end_date", END_DATE_ERROR));
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ChargeData {
            charge_id,
            name,
            amount,
            start_date,
            end_date,
        })
    }
}

impl From<Charge> for ChargeForm {
    fn from(charge: Charge) -> Self {
        Self {
            charge_id: charge.charge_id.to_string(),
            name: charge.name,
            amount: charge.amount.to_string(),
            start_date: charge.start_date.to_string(),
            end_date: charge
                .end_date
                .map(|date| date.to_string())
                .unwrap_or_default(),
        }
    }
}
