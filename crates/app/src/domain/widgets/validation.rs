//! Widget payload validation.
//!
//! [`validate`] is a pure function from a draft payload to the ordered list of
//! field violations. Fields are checked in `name`, `description`, `price`
//! order so that callers can report every problem at once.

use std::{fmt, ops::RangeInclusive};

use rust_decimal::Decimal;
use smallvec::SmallVec;
use thiserror::Error;

use crate::domain::widgets::data::{NewWidget, WidgetUpdate};

const NAME_LENGTH: RangeInclusive<usize> = 3..=100;
const DESCRIPTION_LENGTH: RangeInclusive<usize> = 5..=1000;

/// Price scale is kept at two so bounds render as `1.00` and `20000.00`.
fn min_price() -> Decimal {
    Decimal::new(100, 2)
}

fn max_price() -> Decimal {
    Decimal::new(2_000_000, 2)
}

const MAX_INTEGER_DIGITS: u32 = 5;
const MAX_FRACTION_DIGITS: u32 = 2;

const NOT_NULL: &str = "must not be null";

/// Unvalidated widget payload, as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
}

impl WidgetDraft {
    /// Validate the draft for creating a widget.
    ///
    /// # Errors
    ///
    /// Returns every field violation when the draft is invalid.
    pub fn into_new_widget(self) -> Result<NewWidget, Violations> {
        let (name, description, price) = self.into_fields()?;

        Ok(NewWidget {
            name,
            description,
            price,
        })
    }

    /// Validate the draft for updating a widget.
    ///
    /// # Errors
    ///
    /// Returns every field violation when the draft is invalid.
    pub fn into_update(self) -> Result<WidgetUpdate, Violations> {
        let (name, description, price) = self.into_fields()?;

        Ok(WidgetUpdate {
            name,
            description,
            price,
        })
    }

    fn into_fields(self) -> Result<(String, String, Decimal), Violations> {
        let violations = validate(&self);

        match (self.name, self.description, self.price) {
            (Some(name), Some(description), Some(price)) if violations.is_empty() => {
                Ok((name, description, price))
            }
            _ => Err(violations),
        }
    }
}

/// A single failed field constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered field violations for one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field violation(s)", .0.len())]
pub struct Violations(SmallVec<[FieldViolation; 3]>);

impl Violations {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.0.iter()
    }

    /// Violations rendered as `"<field>: <message>"`.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldViolation {
            field,
            message: message.into(),
        });
    }
}

/// Check every field constraint of a widget payload.
#[must_use]
pub fn validate(draft: &WidgetDraft) -> Violations {
    let mut violations = Violations::default();

    check_length(
        &mut violations,
        "name",
        draft.name.as_deref(),
        &NAME_LENGTH,
    );

    check_length(
        &mut violations,
        "description",
        draft.description.as_deref(),
        &DESCRIPTION_LENGTH,
    );

    check_price(&mut violations, draft.price);

    violations
}

fn check_length(
    violations: &mut Violations,
    field: &'static str,
    value: Option<&str>,
    bounds: &RangeInclusive<usize>,
) {
    let Some(value) = value else {
        violations.push(field, NOT_NULL);
        return;
    };

    if !bounds.contains(&value.chars().count()) {
        violations.push(
            field,
            format!(
                "size must be between {} and {}",
                bounds.start(),
                bounds.end()
            ),
        );
    }
}

fn check_price(violations: &mut Violations, price: Option<Decimal>) {
    let Some(price) = price else {
        violations.push("price", NOT_NULL);
        return;
    };

    let (min, max) = (min_price(), max_price());

    if price < min {
        violations.push("price", format!("must be greater than or equal to {min}"));
    }

    if price > max {
        violations.push("price", format!("must be less than or equal to {max}"));
    }

    let (integer_digits, fraction_digits) = digits(price);

    if integer_digits > MAX_INTEGER_DIGITS || fraction_digits > MAX_FRACTION_DIGITS {
        violations.push(
            "price",
            format!(
                "numeric value out of bounds (<{MAX_INTEGER_DIGITS} digits>.<{MAX_FRACTION_DIGITS} digits> expected)"
            ),
        );
    }
}

/// Integer and fraction digit counts of the price as written, so `20.000`
/// has three fraction digits.
fn digits(price: Decimal) -> (u32, u32) {
    let fraction_digits = price.scale();

    let precision = price
        .mantissa()
        .unsigned_abs()
        .checked_ilog10()
        .map_or(1, |log| log + 1);

    (precision.saturating_sub(fraction_digits), fraction_digits)
}
