//! Lenient field decoders for heterogeneous backend payloads.
//!
//! The same field arrives as an array on one endpoint and as a joined string
//! on another; booleans come as `0/1`; specification maps come JSON-encoded.
//! These decoders accept every observed shape and never fail on a shape
//! mismatch: unknown shapes decode to the empty value.
//!
//! Use together with `#[serde(default)]` so absent fields work too.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

fn list_from_value(value: Value, delimiter: char) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(value_to_text)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Value::String(s) => s
            .split(delimiter)
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

/// List stored as an array or as newline-joined text
pub fn newline_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(list_from_value(value, '\n'))
}

/// List stored as an array or as comma-joined text (tags)
pub fn comma_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(list_from_value(value, ','))
}

/// Map stored as a native object or as a JSON-encoded object string.
/// Unparsable strings decode to an empty map.
pub fn json_map<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(map) => map,
        Value::String(s) => match serde_json::from_str::<Value>(&s) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        },
        _ => Map::new(),
    })
}

/// Boolean flag as `true/false`, `0/1` or their string forms.
/// Absent and unrecognized values decode to `None`.
pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => Some(b),
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Integer as a number or a numeric string, 0 otherwise
pub fn int<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .and_then(|n| i32::try_from(n).ok())
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

/// Text field that may arrive as a number (prices, years) or `null`
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_text(value).unwrap_or_default())
}

/// Timestamp as RFC 3339 or `YYYY-MM-DD HH:MM:SS` (taken as UTC).
/// Anything else decodes to `None`.
pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::String(s) = value else {
        return Ok(None);
    };
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(Some(dt.with_timezone(&Utc)));
    }
    Ok(["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, Default)]
    struct Sample {
        #[serde(default, deserialize_with = "newline_list")]
        features: Vec<String>,
        #[serde(default, deserialize_with = "comma_list")]
        tags: Vec<String>,
        #[serde(default, deserialize_with = "json_map")]
        specifications: Map<String, Value>,
        #[serde(default, deserialize_with = "flag")]
        is_active: Option<bool>,
        #[serde(default, deserialize_with = "int")]
        order_number: i32,
        #[serde(default, deserialize_with = "text")]
        price: String,
    }

    fn sample(value: Value) -> Sample {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_absent_fields() {
        let p = sample(json!({}));
        assert!(p.features.is_empty());
        assert!(p.tags.is_empty());
        assert!(p.specifications.is_empty());
        assert_eq!(p.is_active, None);
        assert_eq!(p.order_number, 0);
        assert_eq!(p.price, "");
    }

    #[test]
    fn test_lists_from_array_and_text() {
        let p = sample(json!({"features": ["Fast", "  ", " Safe "], "tags": "a, b,,c"}));
        assert_eq!(p.features, vec!["Fast", "Safe"]);
        assert_eq!(p.tags, vec!["a", "b", "c"]);

        let p = sample(json!({"features": "Fast\n\n Safe \r\n", "tags": ["x"]}));
        assert_eq!(p.features, vec!["Fast", "Safe"]);
        assert_eq!(p.tags, vec!["x"]);

        let p = sample(json!({"features": null, "tags": 5}));
        assert!(p.features.is_empty());
        assert!(p.tags.is_empty());
    }

    #[test]
    fn test_specifications_shapes() {
        let p = sample(json!({"specifications": {"b": 2, "a": "1"}}));
        let keys: Vec<&String> = p.specifications.keys().collect();
        assert_eq!(keys, vec!["b", "a"]);

        let p = sample(json!({"specifications": "{\"weight\":\"2kg\"}"}));
        assert_eq!(p.specifications.get("weight"), Some(&json!("2kg")));

        let p = sample(json!({"specifications": "not json"}));
        assert!(p.specifications.is_empty());

        let p = sample(json!({"specifications": "[1,2]"}));
        assert!(p.specifications.is_empty());
    }

    #[test]
    fn test_flags_and_numbers() {
        assert_eq!(sample(json!({"is_active": 1})).is_active, Some(true));
        assert_eq!(sample(json!({"is_active": "false"})).is_active, Some(false));
        assert_eq!(sample(json!({"is_active": null})).is_active, None);
        assert_eq!(sample(json!({"order_number": "7"})).order_number, 7);
        assert_eq!(sample(json!({"order_number": 3})).order_number, 3);
        assert_eq!(sample(json!({"price": 19.5})).price, "19.5");
    }

    #[derive(Debug, Deserialize)]
    struct Stamp {
        #[serde(default, deserialize_with = "timestamp")]
        at: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_timestamps() {
        let parse = |v: Value| serde_json::from_value::<Stamp>(v).unwrap().at;
        assert!(parse(json!({"at": "2024-03-15T14:02:26.123Z"})).is_some());
        assert!(parse(json!({"at": "2024-03-15T21:02:26+07:00"})).is_some());
        assert_eq!(
            parse(json!({"at": "2024-03-15 14:02:26"})).map(|d| d.to_rfc3339()),
            Some("2024-03-15T14:02:26+00:00".to_string())
        );
        assert!(parse(json!({"at": "yesterday"})).is_none());
        assert!(parse(json!({"at": null})).is_none());
        assert!(parse(json!({})).is_none());
    }
}
