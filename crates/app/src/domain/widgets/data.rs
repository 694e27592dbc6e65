//! Widgets Data

use rust_decimal::Decimal;

/// New Widget Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWidget {
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

/// Widget Update Data
///
/// `name` only locates the stored widget, it is never written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetUpdate {
    pub name: String,
    pub description: String,
    pub price: Decimal,
}
