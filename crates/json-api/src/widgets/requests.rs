//! Widget Request Payloads

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::value::RawValue;

use widgets_app::domain::widgets::validation::WidgetDraft;

/// Widget Request
///
/// Body of create and update calls. Missing fields are reported by validation
/// rather than rejected while parsing.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub(crate) struct WidgetRequest {
    /// Widget name, 3 to 100 characters, unique ignoring case
    #[serde(default)]
    pub name: Option<String>,

    /// Widget description, 5 to 1000 characters
    #[serde(default)]
    pub description: Option<String>,

    /// Price between 1.00 and 20000.00 with at most two decimal places
    #[serde(default, deserialize_with = "deserialize_price")]
    #[salvo(schema(value_type = Option<f64>))]
    pub price: Option<Decimal>,
}

impl From<WidgetRequest> for WidgetDraft {
    fn from(request: WidgetRequest) -> Self {
        WidgetDraft {
            name: request.name,
            description: request.description,
            price: request.price,
        }
    }
}

/// Parse a JSON number from its literal text, so `20.000` keeps scale three and
/// `12.3400000000000001` is not collapsed through an `f64`.
fn deserialize_price<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<Box<RawValue>>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let text = raw.get();

    if !text.starts_with(|c: char| c == '-' || c.is_ascii_digit()) {
        return Err(D::Error::custom(format!("invalid type: expected a number, found {text}")));
    }

    Decimal::from_str_exact(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map(Some)
        .map_err(D::Error::custom)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn parse(body: &str) -> Result<WidgetRequest, serde_json::Error> {
        serde_json::from_str(body)
    }

    #[test]
    fn price_keeps_written_digits() -> TestResult {
        let request = parse(r#"{ "price": 20.034 }"#)?;

        assert_eq!(request.price, Some(Decimal::new(20_034, 3)));

        Ok(())
    }

    #[test]
    fn price_keeps_trailing_zeros() -> TestResult {
        let price = parse(r#"{ "price": 20.000 }"#)?.price;

        assert_eq!(price.map(|p| p.scale()), Some(3));

        Ok(())
    }

    #[test]
    fn price_beyond_f64_precision_is_not_rounded() -> TestResult {
        let request = parse(r#"{ "price": 12.3400000000000001 }"#)?;

        assert_eq!(request.price, Some("12.3400000000000001".parse()?));

        let request = parse(r#"{ "price": 19999.999999999999 }"#)?;

        assert_eq!(request.price, Some("19999.999999999999".parse()?));

        Ok(())
    }

    #[test]
    fn exponent_price_is_accepted() -> TestResult {
        let request = parse(r#"{ "price": 1.5e2 }"#)?;

        assert_eq!(request.price, Some(Decimal::from(150)));

        Ok(())
    }

    #[test]
    fn integer_price_is_accepted() -> TestResult {
        let request = parse(r#"{ "price": 15 }"#)?;

        assert_eq!(request.price, Some(Decimal::from(15)));

        Ok(())
    }

    #[test]
    fn missing_and_null_fields_become_none() -> TestResult {
        let request = parse(r#"{ "name": null, "price": null }"#)?;

        assert_eq!(request.name, None);
        assert_eq!(request.description, None);
        assert_eq!(request.price, None);

        Ok(())
    }

    #[test]
    fn unknown_fields_are_ignored() -> TestResult {
        let request = parse(r#"{ "name": "Widget A", "colour": "blue" }"#)?;

        assert_eq!(request.name.as_deref(), Some("Widget A"));

        Ok(())
    }

    #[test]
    fn non_numeric_prices_are_rejected() {
        for body in [
            r#"{ "price": "20.00" }"#,
            r#"{ "price": true }"#,
            r#"{ "price": [20] }"#,
            r#"{ "price": { "amount": 20 } }"#,
        ] {
            assert!(parse(body).is_err(), "expected type error for {body}");
        }
    }
}
