use serde::{Deserialize, Deserializer, Serialize};

use stockform_core::ProductId;

use crate::field::ProductField;

/// Product record, as sent to and received from the product API.
///
/// The same shape doubles as the form draft: every editable field is a
/// string so a half-filled form is representable, and `id` stays empty until
/// the server has assigned one.
///
/// Deserialization also accepts the older snake_case server shape
/// (`_id`, `product_code`, `qty`, `date_added`), see [`ProductWire`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ProductWire")]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    pub product_code: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
    pub date_added: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
}

/// Inbound record shape.
///
/// `id` and `_id` are separate keys here: a Mongo-style server may send
/// both (the `id` virtual next to the stored `_id`), which a serde alias
/// would reject as a duplicate field. `id` wins when both are present.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductWire {
    #[serde(default)]
    id: Option<ProductId>,
    #[serde(default, rename = "_id")]
    legacy_id: Option<ProductId>,
    #[serde(alias = "product_code")]
    product_code: String,
    name: String,
    description: String,
    #[serde(deserialize_with = "string_or_number")]
    price: String,
    #[serde(alias = "qty", deserialize_with = "string_or_number")]
    quantity: String,
    #[serde(alias = "date_added")]
    date_added: String,
    #[serde(default)]
    is_deleted: Option<bool>,
}

impl From<ProductWire> for Product {
    fn from(wire: ProductWire) -> Self {
        Self {
            id: wire.id.or(wire.legacy_id),
            product_code: wire.product_code,
            name: wire.name,
            description: wire.description,
            price: wire.price,
            quantity: wire.quantity,
            date_added: wire.date_added,
            is_deleted: wire.is_deleted,
        }
    }
}

impl Product {
    /// The canonical empty draft.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ProductField) -> &str {
        match field {
            ProductField::ProductCode => &self.product_code,
            ProductField::Name => &self.name,
            ProductField::Description => &self.description,
            ProductField::Price => &self.price,
            ProductField::Quantity => &self.quantity,
            ProductField::DateAdded => &self.date_added,
        }
    }

    /// Replace one field. Never touches any other field, including `id`.
    pub fn set(&mut self, field: ProductField, value: impl Into<String>) {
        let slot = match field {
            ProductField::ProductCode => &mut self.product_code,
            ProductField::Name => &mut self.name,
            ProductField::Description => &mut self.description,
            ProductField::Price => &mut self.price,
            ProductField::Quantity => &mut self.quantity,
            ProductField::DateAdded => &mut self.date_added,
        };
        *slot = value.into();
    }

    /// Required fields that are still empty, in form order.
    pub fn missing_required(&self) -> Vec<ProductField> {
        ProductField::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    /// One list row: `code - name - $price`.
    pub fn summary_line(&self) -> String {
        format!("{} - {} - ${}", self.product_code, self.name, self.price)
    }
}

/// Whether the form creates a new product or replaces an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

impl FormMode {
    pub fn heading(&self) -> &'static str {
        match self {
            FormMode::Create => "Add New Product",
            FormMode::Update => "Update Product",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Add",
            FormMode::Update => "Update",
        }
    }
}

// Some servers store price/qty as JSON numbers; the form keeps strings.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Num(n) => n.to_string(),
    })
}
