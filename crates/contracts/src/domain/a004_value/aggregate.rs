use crate::domain::common::{RecordId, RecordMeta, Resource, ResourceKind};
use crate::shared::bulk_import::{BulkColumn, BulkImportable, BulkRow};
use crate::shared::form_fields::flag_or;
use crate::shared::form_model::{require, FormModel};
use crate::shared::lenient;
use crate::shared::media::ApiEndpoint;
use crate::shared::payload::FormPayload;
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================

/// Company value (integrity, innovation, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Value {
    #[serde(default)]
    pub id: Option<RecordId>,
    /// Document key of backends that expose `_id`, alone or next to `id`
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub document_id: Option<RecordId>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    /// Icon name from the public site's icon set
    #[serde(default, deserialize_with = "lenient::text")]
    pub icon: String,

    #[serde(default, deserialize_with = "lenient::int")]
    pub order_number: i32,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_active: Option<bool>,

    #[serde(flatten)]
    pub meta: RecordMeta,
}

impl Resource for Value {
    const KIND: ResourceKind = ResourceKind::Value;

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref().or(self.document_id.as_ref())
    }

    fn display_name(&self) -> &str {
        &self.title
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueForm {
    pub id: Option<RecordId>,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub order_number: i32,
    pub is_active: bool,
}

impl Default for ValueForm {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            icon: String::new(),
            order_number: 0,
            is_active: true,
        }
    }
}

impl FormModel for ValueForm {
    type Record = Value;

    fn from_record(record: &Value, _endpoint: &ApiEndpoint) -> Self {
        Self {
            id: record.id().cloned(),
            title: record.title.clone(),
            description: record.description.clone(),
            icon: record.icon.clone(),
            order_number: record.order_number,
            is_active: flag_or(record.is_active, true),
        }
    }

    fn to_payload(&self) -> FormPayload {
        FormPayload::new()
            .text("title", self.title.trim())
            .text("description", self.description.trim())
            .text("icon", self.icon.trim())
            .int("order_number", self.order_number.into())
            .flag("is_active", self.is_active)
    }

    fn record_id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.title, "Title")
    }
}

impl BulkImportable for ValueForm {
    const BULK_COLUMNS: &'static [BulkColumn] = &[
        BulkColumn::new("title", "Title"),
        BulkColumn::new("description", "Description"),
        BulkColumn::new("icon", "Icon"),
    ];

    fn from_bulk_row(row: &BulkRow) -> Self {
        Self {
            title: row.name().to_string(),
            description: row.value(1).to_string(),
            icon: row.value(2).to_string(),
            order_number: row.position as i32,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::bulk_import::parse_bulk_text;

    #[test]
    fn test_bulk_rows_keep_pasted_order() {
        let preview = parse_bulk_text(
            "Integrity, We keep our word, shield\n\nInnovation, We try new things",
            ValueForm::BULK_COLUMNS,
        );
        let forms: Vec<ValueForm> = preview.valid_rows().iter().map(ValueForm::from_bulk_row).collect();
        assert_eq!(forms.len(), 2);
        assert_eq!(forms[0].order_number, 1);
        assert_eq!(forms[1].title, "Innovation");
        assert_eq!(forms[1].icon, "");
        assert_eq!(forms[1].order_number, 2);
        assert!(forms.iter().all(|f| f.is_active && !f.is_edit()));
    }
}
