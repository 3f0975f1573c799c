use serde::{Deserialize, Deserializer};

/// Deserializes a nullable JSON string, mapping `null` to an empty string.
///
/// The EDINET document list reports absent values (a fund without a security code,
/// a filing without XBRL) as `null` rather than omitting the field.
pub fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parses a fact value as a decimal number.
///
/// An empty value is `0`. Thousands separators and surrounding whitespace are stripped
/// before parsing; anything that still fails to parse (or is not finite) is `0` as well,
/// so a missing fact and an explicit zero are indistinguishable to callers.
pub fn parse_number(value: &str) -> f64 {
    if value.is_empty() {
        return 0.0;
    }
    let cleaned = value.replace(',', "");
    match cleaned.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Formats a computed value with exactly two fractional digits.
///
/// Zero renders as an empty cell, which makes "computed to exactly zero" look the same
/// as "not computed" in the output.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return String::new();
    }
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("1,000,000,000"), 1_000_000_000.0);
        assert_eq!(parse_number("  -42.5 "), -42.5);
        assert_eq!(parse_number("n/a"), 0.0);
        assert_eq!(parse_number("NaN"), 0.0);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "");
        assert_eq!(format_number(-0.0), "");
        assert_eq!(format_number(12.3456), "12.35");
        assert_eq!(format_number(-7.0), "-7.00");
        assert_eq!(format_number(1_000_000_000.0), "1000000000.00");
    }

    #[test]
    fn test_null_strings() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(deserialize_with = "deserialize_null_as_empty")]
            code: String,
        }

        let row: Row = serde_json::from_str(r#"{"code": null}"#).unwrap();
        assert_eq!(row.code, "");
        let row: Row = serde_json::from_str(r#"{"code": "40260"}"#).unwrap();
        assert_eq!(row.code, "40260");
    }
}
