//! Decoding of monetary amounts from request bodies.
//!
//! Amounts arrive as JSON numbers from API clients and as strings from HTML
//! forms, so both are accepted. Numeric strings are cast to numbers, an empty
//! string or `null` means the amount was left out. NaN and infinite amounts
//! are rejected since they cannot be stored or sent back as JSON.

use serde::{Deserialize, Deserializer, de::Error as _};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

/// Deserialize an optional amount from a number, a numeric string or null.
///
/// # Errors
/// Fails if the value is a string that is not a number, or if the amount is
/// not finite, e.g. "NaN", "inf" or "1e400".
pub fn deserialize_optional_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match Option::<RawAmount>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(RawAmount::Number(amount)) => amount,
        Some(RawAmount::Text(text)) => {
            let text = text.trim();

            if text.is_empty() {
                return Ok(None);
            }

            text.parse::<f64>()
                .map_err(|_| D::Error::custom(format!("\"{text}\" is not a valid amount")))?
        }
    };

    if !amount.is_finite() {
        return Err(D::Error::custom(format!("{amount} is not a finite amount")));
    }

    Ok(Some(amount))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::deserialize_optional_amount;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "deserialize_optional_amount")]
        amount: Option<f64>,
    }

    fn parse(json: &str) -> Result<Option<f64>, serde_json::Error> {
        serde_json::from_str::<Body>(json).map(|body| body.amount)
    }

    #[test]
    fn accepts_numbers() {
        assert_eq!(parse(r#"{"amount": -12.5}"#).unwrap(), Some(-12.5));
        assert_eq!(parse(r#"{"amount": 50}"#).unwrap(), Some(50.0));
    }

    #[test]
    fn casts_numeric_strings() {
        assert_eq!(parse(r#"{"amount": "30.25"}"#).unwrap(), Some(30.25));
        assert_eq!(parse(r#"{"amount": " -4 "}"#).unwrap(), Some(-4.0));
    }

    #[test]
    fn missing_null_and_empty_are_none() {
        assert_eq!(parse("{}").unwrap(), None);
        assert_eq!(parse(r#"{"amount": null}"#).unwrap(), None);
        assert_eq!(parse(r#"{"amount": ""}"#).unwrap(), None);
    }

    #[test]
    fn rejects_non_numeric_strings() {
        let error = parse(r#"{"amount": "lots"}"#).unwrap_err();

        assert!(error.to_string().contains("not a valid amount"), "{error}");
    }

    #[test]
    fn rejects_non_finite_strings() {
        for text in ["NaN", "nan", "inf", "-inf", "Infinity", "1e400"] {
            let error = parse(&format!(r#"{{"amount": "{text}"}}"#)).unwrap_err();

            assert!(error.to_string().contains("not a finite amount"), "{text}: {error}");
        }
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        assert!(parse(r#"{"amount": 1e400}"#).is_err());
        assert!(parse(r#"{"amount": -1e400}"#).is_err());
    }

    #[test]
    fn rejects_other_types() {
        assert!(parse(r#"{"amount": true}"#).is_err());
        assert!(parse(r#"{"amount": [1]}"#).is_err());
    }

    #[test]
    fn works_with_form_bodies() {
        let body: Body = parse_form("amount=12.30");

        assert_eq!(body.amount, Some(12.3));
    }

    fn parse_form(form: &str) -> Body {
        axum::extract::Query::<Body>::try_from_uri(
            &format!("http://localhost/?{form}").parse().unwrap(),
        )
        .expect("Could not parse query")
        .0
    }
}
