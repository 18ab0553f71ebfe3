//! Lenient deserializers for form-sourced values.
//!
//! The upstream form layer sends "missing" in several costumes: an absent
//! key, `null`, `""`, `"NA"`, or a non-numeric string. All of them collapse
//! to `None` here, once, so no later stage has to re-interpret markers.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Num(f64),
    Bool(bool),
    Text(String),
}

fn is_absent_marker(s: &str) -> bool {
    s.is_empty() || s.eq_ignore_ascii_case("na") || s.eq_ignore_ascii_case("n/a")
}

/// Accepts a number, a numeric string, or an absent marker.
pub(crate) fn lenient_f64<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawValue>::deserialize(de)? {
        None | Some(RawValue::Bool(_)) => None,
        Some(RawValue::Num(n)) => Some(n),
        Some(RawValue::Text(s)) => {
            let t = s.trim();
            if is_absent_marker(t) {
                None
            } else {
                t.parse().ok()
            }
        }
    })
}

/// Accepts a categorical string, mapping absent markers to `None`.
pub(crate) fn lenient_string<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawValue>::deserialize(de)? {
        Some(RawValue::Text(s)) if !is_absent_marker(s.trim()) => Some(s.trim().to_string()),
        _ => None,
    })
}

/// Accepts a Yes/No flag in any of its wire forms: `"Yes"`/`"No"`,
/// `1`/`0`, or a boolean. Unrecognized values are absent, not `No`.
pub(crate) fn lenient_flag<'de, D>(de: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawValue>::deserialize(de)? {
        Some(RawValue::Bool(b)) => Some(b),
        Some(RawValue::Num(n)) if n == 1.0 => Some(true),
        Some(RawValue::Num(n)) if n == 0.0 => Some(false),
        Some(RawValue::Text(s)) => match s.trim() {
            t if t.eq_ignore_ascii_case("yes") || t == "1" => Some(true),
            t if t.eq_ignore_ascii_case("no") || t == "0" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize, Default)]
    #[serde(default)]
    struct Probe {
        #[serde(deserialize_with = "super::lenient_f64")]
        num: Option<f64>,
        #[serde(deserialize_with = "super::lenient_string")]
        cat: Option<String>,
        #[serde(deserialize_with = "super::lenient_flag")]
        flag: Option<bool>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).expect("Should parse")
    }

    #[test]
    fn test_absent_markers_collapse_to_none() {
        assert_eq!(probe(r#"{}"#).num, None);
        assert_eq!(probe(r#"{"num": null}"#).num, None);
        assert_eq!(probe(r#"{"num": ""}"#).num, None);
        assert_eq!(probe(r#"{"num": "NA"}"#).num, None);
        assert_eq!(probe(r#"{"num": "n/a"}"#).num, None);
        assert_eq!(probe(r#"{"num": "abc"}"#).num, None);
    }

    #[test]
    fn test_numbers_and_numeric_strings() {
        assert_eq!(probe(r#"{"num": 6.5}"#).num, Some(6.5));
        assert_eq!(probe(r#"{"num": "6.5"}"#).num, Some(6.5));
        assert_eq!(probe(r#"{"num": 0}"#).num, Some(0.0));
    }

    #[test]
    fn test_categorical_strings() {
        assert_eq!(probe(r#"{"cat": "irregular"}"#).cat.as_deref(), Some("irregular"));
        assert_eq!(probe(r#"{"cat": ""}"#).cat, None);
        assert_eq!(probe(r#"{"cat": "NA"}"#).cat, None);
    }

    #[test]
    fn test_flags() {
        assert_eq!(probe(r#"{"flag": "Yes"}"#).flag, Some(true));
        assert_eq!(probe(r#"{"flag": "no"}"#).flag, Some(false));
        assert_eq!(probe(r#"{"flag": 1}"#).flag, Some(true));
        assert_eq!(probe(r#"{"flag": 0}"#).flag, Some(false));
        assert_eq!(probe(r#"{"flag": true}"#).flag, Some(true));
        assert_eq!(probe(r#"{"flag": "maybe"}"#).flag, None);
    }
}
