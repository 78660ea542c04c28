//! Product field flags.
//!
//! Values go through the same shape check a native form control applies
//! (numbers for price and quantity, ISO dates) and the same required-ness
//! check a form applies before it submits; nothing beyond that.

use clap::Args;
use stockform_products::{Product, ProductField};

#[derive(Debug, Args)]
pub(crate) struct NewProductArgs {
    /// Product code
    #[arg(long)]
    code: String,

    /// Product name
    #[arg(long)]
    name: String,

    /// Description
    #[arg(long)]
    description: String,

    /// Price, up to two decimals
    #[arg(long, value_parser = price)]
    price: String,

    /// Quantity on hand
    #[arg(long, visible_alias = "qty", value_parser = quantity)]
    quantity: String,

    /// Date added (YYYY-MM-DD)
    #[arg(long, value_parser = date)]
    date: String,
}

impl NewProductArgs {
    pub(crate) fn values(&self) -> Vec<(ProductField, &str)> {
        vec![
            (ProductField::ProductCode, self.code.as_str()),
            (ProductField::Name, self.name.as_str()),
            (ProductField::Description, self.description.as_str()),
            (ProductField::Price, self.price.as_str()),
            (ProductField::Quantity, self.quantity.as_str()),
            (ProductField::DateAdded, self.date.as_str()),
        ]
    }
}

#[derive(Debug, Args)]
pub(crate) struct ProductFieldArgs {
    /// New product code
    #[arg(long)]
    code: Option<String>,

    /// New name
    #[arg(long)]
    name: Option<String>,

    /// New description
    #[arg(long)]
    description: Option<String>,

    /// New price, up to two decimals
    #[arg(long, value_parser = price)]
    price: Option<String>,

    /// New quantity
    #[arg(long, visible_alias = "qty", value_parser = quantity)]
    quantity: Option<String>,

    /// New date added (YYYY-MM-DD)
    #[arg(long, value_parser = date)]
    date: Option<String>,
}

impl ProductFieldArgs {
    /// Only the fields that were given.
    pub(crate) fn values(&self) -> Vec<(ProductField, &str)> {
        [
            (ProductField::ProductCode, &self.code),
            (ProductField::Name, &self.name),
            (ProductField::Description, &self.description),
            (ProductField::Price, &self.price),
            (ProductField::Quantity, &self.quantity),
            (ProductField::DateAdded, &self.date),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

/// Shape check for one field value.
pub(crate) fn checked(field: ProductField, value: &str) -> Result<String, String> {
    let kind = field.input_kind();
    if kind.accepts(value) {
        Ok(value.to_string())
    } else {
        Err(format!("{} expects {}", field.label(), kind.hint()))
    }
}

/// Refuses a draft with empty fields, the way required inputs hold back a
/// form submit.
pub(crate) fn require_filled(draft: &Product) -> Result<(), String> {
    let missing = draft.missing_required();
    if missing.is_empty() {
        return Ok(());
    }
    let labels: Vec<&str> = missing.iter().map(|f| f.label()).collect();
    Err(format!("please fill in: {}", labels.join(", ")))
}

fn price(value: &str) -> Result<String, String> {
    checked(ProductField::Price, value)
}

fn quantity(value: &str) -> Result<String, String> {
    checked(ProductField::Quantity, value)
}

fn date(value: &str) -> Result<String, String> {
    checked(ProductField::DateAdded, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_passes_well_formed_values() {
        assert_eq!(checked(ProductField::Price, "9.99"), Ok("9.99".to_string()));
        assert_eq!(checked(ProductField::Name, "anything at all"), Ok("anything at all".to_string()));
    }

    #[test]
    fn checked_names_field_and_expected_shape() {
        assert_eq!(
            checked(ProductField::DateAdded, "yesterday"),
            Err("Date Added expects YYYY-MM-DD".to_string())
        );
        assert_eq!(
            checked(ProductField::Quantity, "1.5"),
            Err("Quantity expects integer".to_string())
        );
    }

    #[test]
    fn field_args_yield_only_given_values() {
        let args = ProductFieldArgs {
            code: None,
            name: Some("Renamed".to_string()),
            description: None,
            price: Some("1.00".to_string()),
            quantity: None,
            date: None,
        };
        assert_eq!(
            args.values(),
            vec![(ProductField::Name, "Renamed"), (ProductField::Price, "1.00")]
        );
    }

    #[test]
    fn require_filled_lists_empty_fields_in_form_order() {
        let mut draft = Product::empty();
        draft.set(ProductField::ProductCode, "P1");
        draft.set(ProductField::Description, "d");
        draft.set(ProductField::Quantity, "3");
        draft.set(ProductField::DateAdded, "2024-01-01");
        draft.set(ProductField::Name, "   ");

        assert_eq!(
            require_filled(&draft),
            Err("please fill in: Name, Price".to_string())
        );

        draft.set(ProductField::Name, "Widget");
        draft.set(ProductField::Price, "9.99");
        assert_eq!(require_filled(&draft), Ok(()));
    }
}
