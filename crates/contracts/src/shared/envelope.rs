//! Response envelope adapter.
//!
//! Endpoints answer either with the document itself or with an envelope that
//! carries it under `data` (optionally next to `success`/`message`). Both
//! shapes are normalized here, at the client boundary, so screens only ever
//! see the decoded document.

use super::api_error::ApiError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a response body, unwrapping the `data` envelope when present.
///
/// - `success: false` is a rejection regardless of the payload;
/// - a non-null `data` key is the document;
/// - anything else is decoded as the document itself.
pub fn unwrap_envelope<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(ApiError::Rejected);
    }

    let has_data = body.get("data").is_some_and(|d| !d.is_null());
    let mut body = body;
    let document = if has_data { body["data"].take() } else { body };

    serde_json::from_value(document).map_err(ApiError::from)
}

/// Decode a raw response text. Empty bodies (e.g. 204) decode as JSON `null`.
pub fn unwrap_envelope_text<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let body = if text.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(text)?
    };
    unwrap_envelope(body)
}

/// Decode the record a write may echo back.
///
/// Writes are acknowledged in several ways: an empty body, plain text
/// ("Created"), `{"success": true}` alone, or the stored document. Only the
/// last one yields a record; `success: false` is still a rejection.
pub fn unwrap_document_text<T: DeserializeOwned>(text: &str) -> Result<Option<T>, ApiError> {
    let Ok(body) = serde_json::from_str::<Value>(text) else {
        return Ok(None);
    };
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(ApiError::Rejected);
    }
    let acknowledgement_only =
        body.get("success").is_some() && body.get("data").map_or(true, Value::is_null);
    if body.is_null() || acknowledgement_only {
        return Ok(None);
    }
    unwrap_envelope(body).map(Some)
}

/// Check a body for which no document is expected (delete, status changes).
pub fn ensure_accepted(text: &str) -> Result<(), ApiError> {
    if text.trim().is_empty() {
        return Ok(());
    }
    match serde_json::from_str::<Value>(text) {
        Ok(body) if body.get("success").and_then(Value::as_bool) == Some(false) => {
            Err(ApiError::Rejected)
        }
        // Non-JSON acknowledgements ("OK") are accepted as well.
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Doc {
        id: i64,
        name: String,
    }

    #[test]
    fn test_bare_and_wrapped_are_equivalent() {
        let bare: Doc = unwrap_envelope(json!({"id": 1, "name": "Acme"})).unwrap();
        let wrapped: Doc =
            unwrap_envelope(json!({"success": true, "data": {"id": 1, "name": "Acme"}})).unwrap();
        assert_eq!(bare, wrapped);
    }

    #[test]
    fn test_wrapped_collection() {
        let docs: Vec<Doc> = unwrap_envelope(json!({"data": [{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]})).unwrap();
        assert_eq!(docs.len(), 2);

        let docs: Vec<Doc> = unwrap_envelope(json!([{"id": 3, "name": "c"}])).unwrap();
        assert_eq!(docs[0].id, 3);
    }

    #[test]
    fn test_null_data_falls_back_to_body() {
        let res: Result<Doc, _> = unwrap_envelope(json!({"data": null, "message": "nothing"}));
        assert!(matches!(res, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_success_false_is_rejected() {
        let res: Result<Doc, _> =
            unwrap_envelope(json!({"success": false, "data": {"id": 1, "name": "x"}}));
        assert_eq!(res, Err(ApiError::Rejected));
    }

    #[test]
    fn test_text_variants() {
        let doc: Doc = unwrap_envelope_text(r#"{"data":{"id":5,"name":"e"}}"#).unwrap();
        assert_eq!(doc.id, 5);

        let unit: Option<Doc> = unwrap_envelope_text("").unwrap();
        assert!(unit.is_none());

        assert!(ensure_accepted("").is_ok());
        assert!(ensure_accepted("OK").is_ok());
        assert!(ensure_accepted(r#"{"success":true}"#).is_ok());
        assert_eq!(ensure_accepted(r#"{"success":false,"message":"no"}"#), Err(ApiError::Rejected));
    }

    #[test]
    fn test_write_acknowledgements_have_no_document() {
        assert_eq!(unwrap_document_text::<Doc>("").unwrap(), None);
        assert_eq!(unwrap_document_text::<Doc>("Created").unwrap(), None);
        assert_eq!(unwrap_document_text::<Doc>("null").unwrap(), None);
        assert_eq!(unwrap_document_text::<Doc>(r#"{"success":true,"message":"saved"}"#).unwrap(), None);
        assert_eq!(
            unwrap_document_text::<Doc>(r#"{"success":false,"message":"slug taken"}"#),
            Err(ApiError::Rejected)
        );

        let echoed = unwrap_document_text::<Doc>(r#"{"success":true,"data":{"id":9,"name":"n"}}"#).unwrap();
        assert_eq!(echoed, Some(Doc { id: 9, name: "n".to_string() }));

        let bare = unwrap_document_text::<Doc>(r#"{"id":10,"name":"b"}"#).unwrap();
        assert_eq!(bare.map(|d| d.id), Some(10));
    }
}
