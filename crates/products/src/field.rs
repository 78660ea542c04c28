//! Form fields and their native input constraints.

use core::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use stockform_core::DomainError;

/// One of the six editable product fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    ProductCode,
    Name,
    Description,
    Price,
    Quantity,
    DateAdded,
}

impl ProductField {
    /// All fields in the order the form renders them.
    pub const ALL: [ProductField; 6] = [
        ProductField::ProductCode,
        ProductField::Name,
        ProductField::Description,
        ProductField::Price,
        ProductField::Quantity,
        ProductField::DateAdded,
    ];

    /// Field name in the JSON body.
    pub fn wire_name(&self) -> &'static str {
        match self {
            ProductField::ProductCode => "productCode",
            ProductField::Name => "name",
            ProductField::Description => "description",
            ProductField::Price => "price",
            ProductField::Quantity => "quantity",
            ProductField::DateAdded => "dateAdded",
        }
    }

    /// Human-readable label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            ProductField::ProductCode => "Product Code",
            ProductField::Name => "Name",
            ProductField::Description => "Description",
            ProductField::Price => "Price",
            ProductField::Quantity => "Quantity",
            ProductField::DateAdded => "Date Added",
        }
    }

    pub fn input_kind(&self) -> InputKind {
        match self {
            ProductField::ProductCode | ProductField::Name | ProductField::Description => {
                InputKind::Text
            }
            ProductField::Price => InputKind::Decimal { step: "0.01" },
            ProductField::Quantity => InputKind::Integer,
            ProductField::DateAdded => InputKind::Date,
        }
    }
}

impl core::fmt::Display for ProductField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for ProductField {
    type Err = DomainError;

    /// Accepts the wire name, the snake_case name, and the short aliases
    /// used on the command line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "productCode" | "product_code" | "code" => Ok(ProductField::ProductCode),
            "name" => Ok(ProductField::Name),
            "description" | "desc" => Ok(ProductField::Description),
            "price" => Ok(ProductField::Price),
            "quantity" | "qty" => Ok(ProductField::Quantity),
            "dateAdded" | "date_added" | "date" => Ok(ProductField::DateAdded),
            other => Err(DomainError::unknown_field(other)),
        }
    }
}

/// Kind of input control backing a field.
///
/// Mirrors what a browser form control enforces on its own: a number input
/// refuses letters, a date input only yields ISO dates. Nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    /// Decimal number; `step` is the smallest increment (two decimals for prices).
    Decimal { step: &'static str },
    Integer,
    /// Calendar date, `YYYY-MM-DD`.
    Date,
}

impl InputKind {
    /// Whether the control would accept `value`.
    ///
    /// Empty input is always accepted; required-ness is checked separately.
    pub fn accepts(&self, value: &str) -> bool {
        if value.is_empty() {
            return true;
        }

        match self {
            InputKind::Text => true,
            InputKind::Decimal { step } => {
                let (Ok(value), Ok(step)) = (Decimal::from_str(value), Decimal::from_str(step))
                else {
                    return false;
                };
                // Trailing zeros do not count against the step: 9.990 is 9.99.
                value.normalize().scale() <= step.scale()
            }
            InputKind::Integer => value.parse::<i64>().is_ok(),
            InputKind::Date => NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok(),
        }
    }

    /// Short hint for terminal prompts.
    pub fn hint(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Decimal { .. } => "decimal, step 0.01",
            InputKind::Integer => "integer",
            InputKind::Date => "YYYY-MM-DD",
        }
    }
}
