//! Value factories: raw field value to typed literal
//!
//! Every factory either returns exactly one literal or a [`SkipValue`]; none
//! of them has side effects.

use std::borrow::Cow;
use std::str::FromStr;

use mediaont_domain::vocab;
use mediaont_domain::{Literal, RawValue};
use rust_decimal::Decimal;

use crate::error::SkipValue;
use crate::types::FactoryContext;

/// Length of an ISO 8601 calendar date (`YYYY-MM-DD`)
const DATE_LEN: usize = 10;

fn text(raw: &RawValue) -> Result<Cow<'_, str>, SkipValue> {
    raw.as_text().ok_or_else(SkipValue::undecodable)
}

/// Text as-is, tagged with the configured language
pub fn string_literal(raw: &RawValue, ctx: &FactoryContext<'_>) -> Result<Literal, SkipValue> {
    Ok(Literal::with_language(text(raw)?, ctx.language))
}

/// Text as-is, never language-tagged (codes, identifiers)
pub fn plain_literal(raw: &RawValue, _ctx: &FactoryContext<'_>) -> Result<Literal, SkipValue> {
    Ok(Literal::plain(text(raw)?))
}

/// Date-only prefix of an ISO-like timestamp, typed `xsd:date`
pub fn date_literal(raw: &RawValue, _ctx: &FactoryContext<'_>) -> Result<Literal, SkipValue> {
    let text = text(raw)?;
    let date: String = text.chars().take(DATE_LEN).collect();
    if date.chars().count() < DATE_LEN {
        return Err(SkipValue::new(format!("'{}' is too short for a date", text)));
    }
    Ok(Literal::typed(date, vocab::xsd_date()))
}

/// Numeric value, typed `xsd:decimal`
pub fn decimal_literal(raw: &RawValue, _ctx: &FactoryContext<'_>) -> Result<Literal, SkipValue> {
    let value = parse_decimal(text(raw)?.trim())?;
    Ok(Literal::typed(value.normalize().to_string(), vocab::xsd_decimal()))
}

/// Floating-point value, typed `xsd:double`
pub fn double_literal(raw: &RawValue, _ctx: &FactoryContext<'_>) -> Result<Literal, SkipValue> {
    let text = text(raw)?;
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| SkipValue::new(format!("'{}' is not a number", text)))?;
    if !value.is_finite() {
        return Err(SkipValue::new(format!("'{}' is not finite", text)));
    }
    Ok(Literal::typed(format!("{:E}", value), vocab::xsd_double()))
}

/// Integer milliseconds converted to seconds, typed `xsd:decimal`
pub fn duration_literal(raw: &RawValue, _ctx: &FactoryContext<'_>) -> Result<Literal, SkipValue> {
    let text = text(raw)?;
    let millis: i64 = text
        .trim()
        .parse()
        .map_err(|_| SkipValue::new(format!("'{}' is not a millisecond count", text)))?;
    let seconds = Decimal::new(millis, 3).normalize();
    Ok(Literal::typed(seconds.to_string(), vocab::xsd_decimal()))
}

/// Parse plain or scientific decimal notation
pub(crate) fn parse_decimal(text: &str) -> Result<Decimal, SkipValue> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| SkipValue::new(format!("'{}' is not a number", text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> FactoryContext<'static> {
        FactoryContext::default()
    }

    #[test]
    fn test_string_literal_language() {
        let tagged = FactoryContext { language: Some("it") };
        let literal = string_literal(&"Allegro".into(), &tagged).unwrap();
        assert_eq!(literal.language(), Some("it"));

        let untagged = string_literal(&"Allegro".into(), &ctx()).unwrap();
        assert_eq!(untagged.language(), None);
        assert_eq!(untagged.lexical(), "Allegro");
    }

    #[test]
    fn test_plain_literal_ignores_language() {
        let tagged = FactoryContext { language: Some("en") };
        let literal = plain_literal(&"fra".into(), &tagged).unwrap();
        assert_eq!(literal, Literal::plain("fra"));
    }

    #[test]
    fn test_undecodable_text_is_skipped() {
        let raw = RawValue::Bytes(vec![0xc3, 0x28]);
        assert_eq!(string_literal(&raw, &ctx()), Err(SkipValue::undecodable()));
    }

    #[test]
    fn test_date_literal_truncates() {
        let literal = date_literal(&"2011-03-04T12:30:00".into(), &ctx()).unwrap();
        assert_eq!(literal.lexical(), "2011-03-04");
        assert_eq!(literal.datatype(), Some(&vocab::xsd_date()));
    }

    #[test]
    fn test_date_literal_exact_length() {
        let literal = date_literal(&"2011-03-04".into(), &ctx()).unwrap();
        assert_eq!(literal.lexical(), "2011-03-04");
    }

    #[test]
    fn test_short_date_is_skipped() {
        assert!(date_literal(&"2011".into(), &ctx()).is_err());
        assert!(date_literal(&"2011-03-0".into(), &ctx()).is_err());
        assert!(date_literal(&"".into(), &ctx()).is_err());
    }

    #[test]
    fn test_duration_conversion() {
        let cases = [
            ("0", "0"),
            ("1000", "1"),
            ("1500", "1.5"),
            ("3600000", "3600"),
        ];
        for (millis, seconds) in cases {
            let literal = duration_literal(&millis.into(), &ctx()).unwrap();
            assert_eq!(literal.lexical(), seconds, "{} ms", millis);
            assert_eq!(literal.datatype(), Some(&vocab::xsd_decimal()));
        }
    }

    #[test]
    fn test_duration_rejects_non_integers() {
        assert!(duration_literal(&"1.5".into(), &ctx()).is_err());
        assert!(duration_literal(&"abc".into(), &ctx()).is_err());
    }

    #[test]
    fn test_decimal_literal() {
        assert_eq!(decimal_literal(&"4000".into(), &ctx()).unwrap().lexical(), "4000");
        assert_eq!(decimal_literal(&" 72.50 ".into(), &ctx()).unwrap().lexical(), "72.5");
        assert_eq!(decimal_literal(&"1e3".into(), &ctx()).unwrap().lexical(), "1000");
        assert!(decimal_literal(&"wide".into(), &ctx()).is_err());
    }

    #[test]
    fn test_double_literal() {
        let literal = double_literal(&"1.5".into(), &ctx()).unwrap();
        assert_eq!(literal.lexical(), "1.5E0");
        assert_eq!(literal.datatype(), Some(&vocab::xsd_double()));
        assert!(double_literal(&"inf".into(), &ctx()).is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: dates of 10+ characters keep exactly their first 10
        #[test]
        fn test_date_prefix(text in "[0-9:T-]{10,30}") {
            let literal =
                date_literal(&RawValue::Text(text.clone()), &FactoryContext::default()).unwrap();
            prop_assert_eq!(literal.lexical(), &text[..10]);
        }

        /// Property: shorter values never produce a literal
        #[test]
        fn test_short_dates_skip(text in "[0-9-]{0,9}") {
            prop_assert!(date_literal(&RawValue::Text(text), &FactoryContext::default()).is_err());
        }

        /// Property: duration is milliseconds divided by 1000
        #[test]
        fn test_duration_is_linear(millis in 0i64..10_000_000_000) {
            let raw = RawValue::Text(millis.to_string());
            let literal = duration_literal(&raw, &FactoryContext::default()).unwrap();
            let seconds = Decimal::from_str(literal.lexical()).unwrap();
            prop_assert_eq!(seconds * Decimal::from(1000), Decimal::from(millis));
        }
    }
}
