//! Conversions between stored field shapes and editable form state.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Delimiter a list field is edited with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListDelimiter {
    /// One element per line (requirements, features, ...)
    Newline,
    /// Comma-separated (tags)
    Comma,
}

impl ListDelimiter {
    fn joiner(&self) -> &'static str {
        match self {
            ListDelimiter::Newline => "\n",
            ListDelimiter::Comma => ", ",
        }
    }

    fn separator(&self) -> char {
        match self {
            ListDelimiter::Newline => '\n',
            ListDelimiter::Comma => ',',
        }
    }
}

/// Join a stored list into editable text
pub fn join_list(items: &[String], delimiter: ListDelimiter) -> String {
    items.join(delimiter.joiner())
}

/// Split edited text back into a list: elements are trimmed, empty ones dropped
pub fn split_list(text: &str, delimiter: ListDelimiter) -> Vec<String> {
    text.split(delimiter.separator())
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// "Use existing value unless absent"
pub fn flag_or(value: Option<bool>, default: bool) -> bool {
    value.unwrap_or(default)
}

// ============================================================================
// Specifications (key/value map edited as ordered rows)
// ============================================================================

/// One editable specification row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecRow {
    pub key: String,
    pub value: String,
}

impl SpecRow {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Flatten a stored map into editable rows, keeping key order.
///
/// Always yields at least one row so the editor has an add point.
pub fn spec_rows_from_map(map: &Map<String, Value>) -> Vec<SpecRow> {
    let mut rows: Vec<SpecRow> = map
        .iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            };
            SpecRow::new(key.clone(), value)
        })
        .collect();
    if rows.is_empty() {
        rows.push(SpecRow::default());
    }
    rows
}

/// Collapse rows into a key-unique map. Rows with a blank key are skipped;
/// a later duplicate key overwrites the earlier value.
pub fn spec_rows_to_map(rows: &[SpecRow]) -> Map<String, Value> {
    let mut map = Map::new();
    for row in rows {
        let key = row.key.trim();
        if key.is_empty() {
            continue;
        }
        map.insert(key.to_string(), Value::String(row.value.trim().to_string()));
    }
    map
}

/// JSON-encode the rows for submission; `None` when nothing is left so the
/// field is omitted from the payload.
pub fn spec_rows_to_json(rows: &[SpecRow]) -> Option<String> {
    let map = spec_rows_to_map(rows);
    if map.is_empty() {
        None
    } else {
        Some(Value::Object(map).to_string())
    }
}

// ============================================================================
// Dates
// ============================================================================

fn parse_any_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Value for an `<input type="date">` from whatever the server stored.
/// Unrecognized values pass through unchanged.
pub fn date_input_value(value: &str) -> String {
    match parse_any_datetime(value) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => value.trim().to_string(),
    }
}

/// Value for an `<input type="datetime-local">`
pub fn datetime_input_value(value: &str) -> String {
    match parse_any_datetime(value) {
        Some(dt) => dt.format("%Y-%m-%dT%H:%M").to_string(),
        None => value.trim().to_string(),
    }
}

// ============================================================================
// Images
// ============================================================================

/// Image field state of a form.
///
/// `existing` is the resolved URL of the image already stored on the server;
/// `preview` is what the form shows, replaced optimistically when the user
/// picks a local file. The file itself never lives here: it is attached to
/// the request only when one was chosen, and absence leaves the stored image
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageField {
    pub existing: Option<String>,
    pub preview: Option<String>,
    pub selected_name: Option<String>,
}

impl ImageField {
    pub fn from_existing(url: Option<String>) -> Self {
        Self {
            existing: url.clone(),
            preview: url,
            selected_name: None,
        }
    }

    /// A local file was chosen; `preview_url` is its object URL
    pub fn select(&mut self, file_name: String, preview_url: Option<String>) {
        self.selected_name = Some(file_name);
        self.preview = preview_url.or_else(|| self.existing.clone());
    }

    /// Drop the chosen file and fall back to the stored image
    pub fn reset(&mut self) {
        self.selected_name = None;
        self.preview = self.existing.clone();
    }

    pub fn has_new_file(&self) -> bool {
        self.selected_name.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_round_trip_drops_blank_lines() {
        let stored = vec!["Degree in CS".to_string(), "3+ years Rust".to_string()];
        let text = join_list(&stored, ListDelimiter::Newline);
        assert_eq!(text, "Degree in CS\n3+ years Rust");

        let edited = format!("{}\n\n   \n  Remote friendly  ", text);
        assert_eq!(
            split_list(&edited, ListDelimiter::Newline),
            vec!["Degree in CS", "3+ years Rust", "Remote friendly"]
        );
    }

    #[test]
    fn test_comma_round_trip() {
        let tags = vec!["rust".to_string(), "cms".to_string()];
        let text = join_list(&tags, ListDelimiter::Comma);
        assert_eq!(text, "rust, cms");
        assert_eq!(split_list(&text, ListDelimiter::Comma), tags);
        assert!(split_list(" , ,", ListDelimiter::Comma).is_empty());
    }

    #[test]
    fn test_flag_or() {
        assert!(flag_or(None, true));
        assert!(!flag_or(None, false));
        assert!(!flag_or(Some(false), true));
    }

    #[test]
    fn test_spec_rows_round_trip() {
        let stored = json!({"a": 1, "b": 2});
        let Value::Object(map) = stored else { unreachable!() };
        let rows = spec_rows_from_map(&map);
        assert_eq!(rows, vec![SpecRow::new("a", "1"), SpecRow::new("b", "2")]);

        let encoded = spec_rows_to_json(&rows).unwrap();
        let decoded: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, json!({"a": "1", "b": "2"}));
    }

    #[test]
    fn test_spec_rows_always_offer_a_row() {
        let rows = spec_rows_from_map(&Map::new());
        assert_eq!(rows, vec![SpecRow::default()]);
        assert_eq!(spec_rows_to_json(&rows), None);
    }

    #[test]
    fn test_duplicate_keys_last_wins_and_blank_keys_skipped() {
        let rows = vec![
            SpecRow::new("Color", "red"),
            SpecRow::new("  ", "ignored"),
            SpecRow::new(" Color ", "blue"),
            SpecRow::new("Size", " L "),
        ];
        let map = spec_rows_to_map(&rows);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("Color"), Some(&json!("blue")));
        assert_eq!(map.get("Size"), Some(&json!("L")));
    }

    #[test]
    fn test_date_inputs() {
        assert_eq!(date_input_value("2024-03-15T14:02:26.123Z"), "2024-03-15");
        assert_eq!(date_input_value("2024-03-15"), "2024-03-15");
        assert_eq!(date_input_value(""), "");
        assert_eq!(date_input_value("soon"), "soon");
        assert_eq!(datetime_input_value("2024-03-15 09:30:00"), "2024-03-15T09:30");
        assert_eq!(datetime_input_value("2024-03-15"), "2024-03-15T00:00");
    }

    #[test]
    fn test_image_field_selection() {
        let mut image = ImageField::from_existing(Some("http://h/uploads/a.png".to_string()));
        assert!(!image.has_new_file());

        image.select("b.png".to_string(), Some("blob:http://h/1".to_string()));
        assert!(image.has_new_file());
        assert_eq!(image.preview.as_deref(), Some("blob:http://h/1"));

        image.reset();
        assert_eq!(image.preview.as_deref(), Some("http://h/uploads/a.png"));
    }
}
