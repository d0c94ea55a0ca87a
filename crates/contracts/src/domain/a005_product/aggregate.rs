use crate::domain::common::{RecordId, RecordMeta, Resource, ResourceKind};
use crate::shared::form_fields::{
    flag_or, join_list, spec_rows_from_map, spec_rows_to_json, split_list, ImageField,
    ListDelimiter, SpecRow,
};
use crate::shared::form_model::{require, FormModel};
use crate::shared::lenient;
use crate::shared::media::ApiEndpoint;
use crate::shared::payload::FormPayload;
use crate::shared::slug::{stored_slug, sync_slug};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Record
// ============================================================================

/// Catalogue product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<RecordId>,
    /// Document key of backends that expose `_id`, alone or next to `id`
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub document_id: Option<RecordId>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub slug: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub short_description: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    /// Free-form price label ("from $99", "on request")
    #[serde(default, deserialize_with = "lenient::text")]
    pub price: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub image: String,

    #[serde(default, deserialize_with = "lenient::newline_list")]
    pub features: Vec<String>,
    #[serde(default, deserialize_with = "lenient::json_map")]
    pub specifications: Map<String, Value>,

    #[serde(default, deserialize_with = "lenient::int")]
    pub order_number: i32,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_featured: Option<bool>,

    #[serde(flatten)]
    pub meta: RecordMeta,
}

impl Resource for Product {
    const KIND: ResourceKind = ResourceKind::Product;

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref().or(self.document_id.as_ref())
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductForm {
    pub id: Option<RecordId>,
    pub name: String,
    pub slug: String,
    pub category: String,
    pub short_description: String,
    pub description: String,
    pub price: String,
    pub image: ImageField,
    pub features: String,
    /// Specification rows in editing order; never empty
    pub specifications: Vec<SpecRow>,
    pub order_number: i32,
    pub is_active: bool,
    pub is_featured: bool,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            slug: String::new(),
            category: String::new(),
            short_description: String::new(),
            description: String::new(),
            price: String::new(),
            image: ImageField::default(),
            features: String::new(),
            specifications: vec![SpecRow::default()],
            order_number: 0,
            is_active: true,
            is_featured: false,
        }
    }
}

impl ProductForm {
    pub fn set_name(&mut self, name: String) {
        sync_slug(self.is_edit(), &mut self.slug, &name);
        self.name = name;
    }

    pub fn add_spec_row(&mut self) {
        self.specifications.push(SpecRow::default());
    }

    /// Remove a row; the last remaining row is cleared instead
    pub fn remove_spec_row(&mut self, index: usize) {
        if index >= self.specifications.len() {
            return;
        }
        if self.specifications.len() == 1 {
            self.specifications[0] = SpecRow::default();
        } else {
            self.specifications.remove(index);
        }
    }

    pub fn set_spec_key(&mut self, index: usize, key: String) {
        if let Some(row) = self.specifications.get_mut(index) {
            row.key = key;
        }
    }

    pub fn set_spec_value(&mut self, index: usize, value: String) {
        if let Some(row) = self.specifications.get_mut(index) {
            row.value = value;
        }
    }
}

impl FormModel for ProductForm {
    type Record = Product;

    fn from_record(record: &Product, endpoint: &ApiEndpoint) -> Self {
        Self {
            id: record.id().cloned(),
            name: record.name.clone(),
            slug: stored_slug(&record.slug, record.display_name()),
            category: record.category.clone(),
            short_description: record.short_description.clone(),
            description: record.description.clone(),
            price: record.price.clone(),
            image: ImageField::from_existing(endpoint.resolve_media_url(&record.image)),
            features: join_list(&record.features, ListDelimiter::Newline),
            specifications: spec_rows_from_map(&record.specifications),
            order_number: record.order_number,
            is_active: flag_or(record.is_active, true),
            is_featured: flag_or(record.is_featured, false),
        }
    }

    fn to_payload(&self) -> FormPayload {
        FormPayload::new()
            .text("name", self.name.trim())
            .text("slug", self.slug.trim())
            .text("category", self.category.trim())
            .text("short_description", self.short_description.trim())
            .text("description", self.description.trim())
            .text("price", self.price.trim())
            .list("features", split_list(&self.features, ListDelimiter::Newline))
            .maybe_text("specifications", spec_rows_to_json(&self.specifications))
            .int("order_number", self.order_number.into())
            .flag("is_active", self.is_active)
            .flag("is_featured", self.is_featured)
    }

    fn record_id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn validate(&self) -> Result<(), String> {
        require(&self.name, "Name")?;
        require(&self.slug, "Slug")
    }

    fn image_fields() -> &'static [&'static str] {
        &["image"]
    }

    fn image_field(&self, name: &str) -> Option<&ImageField> {
        (name == "image").then_some(&self.image)
    }

    fn image_field_mut(&mut self, name: &str) -> Option<&mut ImageField> {
        (name == "image").then_some(&mut self.image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::payload::PayloadValue;
    use serde_json::json;

    fn endpoint() -> ApiEndpoint {
        ApiEndpoint::new("http://localhost:3000/api")
    }

    #[test]
    fn test_specifications_round_trip() {
        let record: Product = serde_json::from_value(json!({
            "id": 1,
            "name": "Sensor",
            "specifications": "{\"a\":1,\"b\":2}"
        }))
        .unwrap();

        let form = ProductForm::from_record(&record, &endpoint());
        assert_eq!(form.specifications, vec![SpecRow::new("a", "1"), SpecRow::new("b", "2")]);

        let payload = form.to_payload();
        let Some(PayloadValue::Text(encoded)) = payload.get("specifications") else {
            panic!("specifications missing from payload");
        };
        let decoded: Value = serde_json::from_str(encoded).unwrap();
        assert_eq!(decoded, json!({"a": "1", "b": "2"}));
    }

    #[test]
    fn test_broken_specifications_give_blank_row() {
        let record: Product =
            serde_json::from_value(json!({"name": "Sensor", "specifications": "{oops"})).unwrap();
        let form = ProductForm::from_record(&record, &endpoint());
        assert_eq!(form.specifications, vec![SpecRow::default()]);
        assert!(!form.to_payload().contains("specifications"));
    }

    #[test]
    fn test_spec_row_editing() {
        let mut form = ProductForm::default();
        form.set_spec_key(0, "Weight".to_string());
        form.set_spec_value(0, "2kg".to_string());
        form.add_spec_row();
        form.set_spec_key(1, "Weight".to_string());
        form.set_spec_value(1, "3kg".to_string());
        assert_eq!(
            form.to_payload().get("specifications"),
            Some(&PayloadValue::Text("{\"Weight\":\"3kg\"}".to_string()))
        );

        form.remove_spec_row(0);
        form.remove_spec_row(0);
        assert_eq!(form.specifications, vec![SpecRow::default()]);
    }

    #[test]
    fn test_numeric_price_kept_as_text() {
        let record: Product = serde_json::from_value(json!({"name": "Kit", "price": 1500})).unwrap();
        assert_eq!(ProductForm::from_record(&record, &endpoint()).price, "1500");
    }
}
