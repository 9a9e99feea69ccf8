use shopfront_core::{DomainError, DomainResult, Money, ProductId};

/// A purchasable catalog record.
///
/// `units` is the stock count. It is signed so a corrupt data file with a
/// negative count can still be loaded and shown, but the catalog never takes
/// a product below zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    units: i64,
}

impl Product {
    /// Create a product with a fresh id.
    pub fn new(name: impl Into<String>, price: Money, units: i64) -> DomainResult<Self> {
        Self::with_id(ProductId::new(), name, price, units)
    }

    pub fn with_id(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        units: i64,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if price.is_negative() {
            return Err(DomainError::validation(format!(
                "price of '{name}' cannot be negative"
            )));
        }
        Ok(Self {
            id,
            name,
            price,
            units,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn units(&self) -> i64 {
        self.units
    }

    /// Field-wise equality on name, price and units, ignoring the id.
    ///
    /// Used by [`crate::MatchPolicy::ByValue`].
    pub fn same_listing(&self, other: &Product) -> bool {
        self.name == other.name && self.price == other.price && self.units == other.units
    }

    pub(crate) fn set_units(&mut self, units: i64) {
        self.units = units;
    }
}

/// Console rendering: `['Banana', 1.0, 15]`.
impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}, {}, {}]", quote(&self.name), self.price, self.units)
    }
}

/// Quote a string the way the shop prints text fields: single quotes unless
/// the text itself contains a single quote and no double quote.
pub fn quote(text: &str) -> String {
    if text.contains('\'') && !text.contains('"') {
        return format!("\"{text}\"");
    }
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}
