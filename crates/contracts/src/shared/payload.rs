//! Request payloads built from form state.
//!
//! A [`FormPayload`] is the ordered list of fields a form submits. It becomes
//! a JSON document when no file is attached, and a multipart body otherwise.
//! The file type is generic so this stays free of browser types.

use serde_json::{Map, Value};

/// Value of one submitted field
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadValue {
    Text(String),
    Int(i64),
    Bool(bool),
    /// Array value; repeated same-named parts in multipart
    List(Vec<String>),
}

impl PayloadValue {
    fn to_json(&self) -> Value {
        match self {
            PayloadValue::Text(s) => Value::String(s.clone()),
            PayloadValue::Int(n) => Value::from(*n),
            PayloadValue::Bool(b) => Value::Bool(*b),
            PayloadValue::List(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
        }
    }
}

/// Ordered set of fields a form submits (files excluded)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPayload {
    fields: Vec<(String, PayloadValue)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, PayloadValue::Text(value.into()));
        self
    }

    /// Text field sent only when non-blank (optional dates, links)
    pub fn opt_text(self, name: &str, value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self
        } else {
            self.text(name, trimmed)
        }
    }

    pub fn int(mut self, name: &str, value: i64) -> Self {
        self.set(name, PayloadValue::Int(value));
        self
    }

    pub fn flag(mut self, name: &str, value: bool) -> Self {
        self.set(name, PayloadValue::Bool(value));
        self
    }

    pub fn list(mut self, name: &str, items: Vec<String>) -> Self {
        self.set(name, PayloadValue::List(items));
        self
    }

    /// Field included only when `value` is `Some`
    pub fn maybe_text(self, name: &str, value: Option<String>) -> Self {
        match value {
            Some(v) => self.text(name, v),
            None => self,
        }
    }

    fn set(&mut self, name: &str, value: PayloadValue) {
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value;
        } else {
            self.fields.push((name.to_string(), value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&PayloadValue> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn fields(&self) -> &[(String, PayloadValue)] {
        &self.fields
    }

    /// JSON document for text-only submissions
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (name, value) in &self.fields {
            map.insert(name.clone(), value.to_json());
        }
        Value::Object(map)
    }

    /// Choose the wire shape: JSON without files, multipart with them.
    ///
    /// `files` holds only the image fields the user actually picked a new
    /// file for.
    pub fn into_body<F>(self, files: Vec<(String, F)>) -> RequestBody<F> {
        if files.is_empty() {
            return RequestBody::Json(self.to_json());
        }

        let mut parts = Vec::new();
        for (name, value) in self.fields {
            match value {
                PayloadValue::Text(s) => parts.push(MultipartPart::Text { name, value: s }),
                PayloadValue::Int(n) => parts.push(MultipartPart::Text {
                    name,
                    value: n.to_string(),
                }),
                PayloadValue::Bool(b) => parts.push(MultipartPart::Text {
                    name,
                    value: b.to_string(),
                }),
                PayloadValue::List(items) => {
                    for item in items {
                        parts.push(MultipartPart::Text {
                            name: name.clone(),
                            value: item,
                        });
                    }
                }
            }
        }
        for (name, file) in files {
            parts.push(MultipartPart::File { name, file });
        }
        RequestBody::Multipart(parts)
    }
}

/// Wire body of a create/update request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody<F> {
    Json(Value),
    Multipart(Vec<MultipartPart<F>>),
}

impl<F> RequestBody<F> {
    pub fn is_multipart(&self) -> bool {
        matches!(self, RequestBody::Multipart(_))
    }
}

/// One part of a multipart body
#[derive(Debug, Clone, PartialEq)]
pub enum MultipartPart<F> {
    Text { name: String, value: String },
    File { name: String, file: F },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> FormPayload {
        FormPayload::new()
            .text("title", "Engineer")
            .int("order_number", 2)
            .flag("is_active", true)
            .list("requirements", vec!["Rust".to_string(), "SQL".to_string()])
            .opt_text("deadline", "  ")
    }

    #[test]
    fn test_json_body_without_files() {
        let body = sample().into_body::<&str>(Vec::new());
        assert_eq!(
            body,
            RequestBody::Json(json!({
                "title": "Engineer",
                "order_number": 2,
                "is_active": true,
                "requirements": ["Rust", "SQL"]
            }))
        );
    }

    #[test]
    fn test_multipart_repeats_list_fields() {
        let body = sample().into_body(vec![("image".to_string(), "photo.png")]);
        let RequestBody::Multipart(parts) = body else {
            panic!("expected multipart");
        };
        let requirement_parts: Vec<&MultipartPart<&str>> = parts
            .iter()
            .filter(|p| matches!(p, MultipartPart::Text { name, .. } if name == "requirements"))
            .collect();
        assert_eq!(requirement_parts.len(), 2);
        assert!(parts.contains(&MultipartPart::Text {
            name: "is_active".to_string(),
            value: "true".to_string()
        }));
        assert_eq!(
            parts.last(),
            Some(&MultipartPart::File {
                name: "image".to_string(),
                file: "photo.png"
            })
        );
        assert!(!parts
            .iter()
            .any(|p| matches!(p, MultipartPart::Text { name, .. } if name == "deadline")));
    }

    #[test]
    fn test_setting_same_field_twice_keeps_last_value() {
        let payload = FormPayload::new().text("slug", "a").text("slug", "b");
        assert_eq!(payload.fields().len(), 1);
        assert_eq!(payload.get("slug"), Some(&PayloadValue::Text("b".to_string())));
        assert!(!payload.contains("missing"));
    }
}
