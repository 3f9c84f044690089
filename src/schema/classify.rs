//! Column type classification.
//!
//! Rules are checked top to bottom and the first rule with a matching
//! substring wins. `BIGINT` sits above `INT` and `DATETIME` above `DATE`,
//! otherwise the longer names would degrade to the shorter label.

use super::types::NormalizedType;

/// Ordered classification rules: any needle contained in the type selects the
/// label.
const TYPE_RULES: &[(&[&str], NormalizedType)] = &[
    (&["BIGINT"], NormalizedType::Bigint),
    (&["INT", "SERIAL"], NormalizedType::Int),
    (&["VARCHAR", "CHAR"], NormalizedType::Varchar),
    (&["DECIMAL", "NUMERIC"], NormalizedType::Decimal),
    (&["TIMESTAMP"], NormalizedType::Timestamp),
    (&["DATETIME"], NormalizedType::Datetime),
    (&["DATE"], NormalizedType::Date),
    (&["TEXT", "JSON"], NormalizedType::Text),
    (&["BOOLEAN", "BOOL"], NormalizedType::Boolean)
];

/// Classify a raw SQL type token such as `VARCHAR(255)` or `bigint`.
///
/// The parenthesized argument list is ignored. Unknown types fall back to
/// [`NormalizedType::Varchar`].
///
/// # Example
///
/// ```
/// use sql_erd::schema::{NormalizedType, classify};
///
/// assert_eq!(classify("DECIMAL(10,2)"), NormalizedType::Decimal);
/// assert_eq!(classify("bigint"), NormalizedType::Bigint);
/// assert_eq!(classify("GEOMETRY"), NormalizedType::Varchar);
/// ```
pub fn classify(raw_type: &str) -> NormalizedType {
    let base = raw_type.split('(').next().unwrap_or(raw_type);
    let upper = base.trim().to_ascii_uppercase();
    TYPE_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| upper.contains(needle)))
        .map(|&(_, normalized)| normalized)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_integers() {
        assert_eq!(classify("INT"), NormalizedType::Int);
        assert_eq!(classify("INTEGER"), NormalizedType::Int);
        assert_eq!(classify("TINYINT(1)"), NormalizedType::Int);
        assert_eq!(classify("SMALLINT"), NormalizedType::Int);
        assert_eq!(classify("SERIAL"), NormalizedType::Int);
    }

    #[test]
    fn test_bigint_is_not_int() {
        assert_eq!(classify("BIGINT"), NormalizedType::Bigint);
        assert_eq!(classify("BIGINT(20)"), NormalizedType::Bigint);
        assert_eq!(classify("bigint"), NormalizedType::Bigint);
    }

    #[test]
    fn test_bigserial_is_int() {
        assert_eq!(classify("BIGSERIAL"), NormalizedType::Int);
    }

    #[test]
    fn test_classify_strings() {
        assert_eq!(classify("VARCHAR(255)"), NormalizedType::Varchar);
        assert_eq!(classify("CHAR(2)"), NormalizedType::Varchar);
        assert_eq!(classify("TEXT"), NormalizedType::Text);
        assert_eq!(classify("LONGTEXT"), NormalizedType::Text);
        assert_eq!(classify("JSON"), NormalizedType::Text);
    }

    #[test]
    fn test_classify_numeric() {
        assert_eq!(classify("DECIMAL(10,2)"), NormalizedType::Decimal);
        assert_eq!(classify("NUMERIC"), NormalizedType::Decimal);
    }

    #[test]
    fn test_datetime_is_not_date() {
        assert_eq!(classify("DATETIME"), NormalizedType::Datetime);
        assert_eq!(classify("DATETIME(6)"), NormalizedType::Datetime);
        assert_eq!(classify("DATE"), NormalizedType::Date);
        assert_eq!(classify("TIMESTAMP"), NormalizedType::Timestamp);
    }

    #[test]
    fn test_classify_boolean() {
        assert_eq!(classify("BOOLEAN"), NormalizedType::Boolean);
        assert_eq!(classify("bool"), NormalizedType::Boolean);
    }

    #[test]
    fn test_unknown_type_falls_back_to_varchar() {
        assert_eq!(classify("GEOMETRY"), NormalizedType::Varchar);
        assert_eq!(classify("BLOB"), NormalizedType::Varchar);
        assert_eq!(classify(""), NormalizedType::Varchar);
    }

    #[test]
    fn test_arguments_do_not_affect_classification() {
        assert_eq!(classify("ENUM('INT','TEXT')"), NormalizedType::Varchar);
    }

    #[test]
    fn test_classification_is_deterministic() {
        for raw in ["BIGINT", "DATETIME", "VARCHAR(10)", "GEOMETRY"] {
            assert_eq!(classify(raw), classify(raw));
        }
    }
}
