//! Widget Responses

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Serialize, Serializer, ser::Error as _};
use serde_json::value::RawValue;

use widgets_app::domain::widgets::records::WidgetRecord;

/// Widget Response
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct WidgetResponse {
    /// Widget name, in the casing it was created with
    pub name: String,

    /// Widget description
    pub description: String,

    /// Price, always written with two decimal places
    #[serde(serialize_with = "serialize_price")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,
}

impl From<WidgetRecord> for WidgetResponse {
    fn from(widget: WidgetRecord) -> Self {
        WidgetResponse {
            name: widget.name,
            description: widget.description,
            price: widget.price,
        }
    }
}

/// Emit the price as a bare JSON number with exactly two fraction digits.
fn serialize_price<S>(price: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    RawValue::from_string(format!("{:.2}", price.round_dp(2)))
        .map_err(S::Error::custom)?
        .serialize(serializer)
}
