//! Widget Records

use rust_decimal::Decimal;

/// Widget Record
///
/// `name` keeps the casing it was created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetRecord {
    pub name: String,
    pub description: String,
    pub price: Decimal,
}
