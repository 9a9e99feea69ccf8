//! In-memory catalog of purchasable products.

use shopfront_core::ProductId;

use crate::product::Product;

/// How cart entries are matched against catalog records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// Match on the stable [`ProductId`].
    #[default]
    ById,
    /// Legacy matching: the record an entry was taken from, or any record
    /// with the same name, price and units.
    ///
    /// A lookalike built outside the catalog stops matching as soon as the
    /// record's stock changes, so that product "vanishes" for later removals
    /// and purchases.
    ByValue,
}

/// Stock change produced by taking one unit from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockChange {
    pub product_id: ProductId,
    pub name: String,
    pub remaining: i64,
    /// The product hit zero units and left the catalog.
    pub delisted: bool,
}

/// Result of handing one unit back to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restock {
    /// A matching record existed and now holds `remaining` units.
    Incremented { remaining: i64 },
    /// No record matched; the product was listed again with one unit.
    Relisted,
}

/// Ordered, mutable product list for one session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    policy: MatchPolicy,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_products(products: Vec<Product>) -> Self {
        Self {
            products,
            policy: MatchPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Product at a zero-based position.
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id_typed() == id)
    }

    /// First product with exactly this name.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name() == name)
    }

    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Whether `product` matches a record under the current policy.
    pub fn contains(&self, product: &Product) -> bool {
        self.position(product).is_some()
    }

    /// The catalog record matching `product` under the current policy.
    pub fn matching(&self, product: &Product) -> Option<&Product> {
        self.position(product).map(|idx| &self.products[idx])
    }

    fn position(&self, product: &Product) -> Option<usize> {
        match self.policy {
            MatchPolicy::ById => self
                .products
                .iter()
                .position(|p| p.id_typed() == product.id_typed()),
            MatchPolicy::ByValue => self
                .products
                .iter()
                .position(|p| p.id_typed() == product.id_typed() || p.same_listing(product)),
        }
    }

    /// Take one unit of `product`, delisting it at zero.
    ///
    /// Returns `None` when no record matches; the caller decides what an
    /// unmatched purchase means.
    pub fn take_unit(&mut self, product: &Product) -> Option<StockChange> {
        let idx = self.position(product)?;
        let record = &mut self.products[idx];
        let remaining = record.units() - 1;
        record.set_units(remaining);

        let change = StockChange {
            product_id: record.id_typed(),
            name: record.name().to_string(),
            remaining,
            delisted: remaining <= 0,
        };
        if change.delisted {
            self.products.remove(idx);
            tracing::debug!(product = %change.name, "product sold out and delisted");
        }
        Some(change)
    }

    /// Hand one unit of `product` back.
    pub fn restore_unit(&mut self, product: &Product) -> Restock {
        match self.position(product) {
            Some(idx) => {
                let record = &mut self.products[idx];
                let remaining = record.units() + 1;
                record.set_units(remaining);
                Restock::Incremented { remaining }
            }
            None => {
                let mut relisted = product.clone();
                relisted.set_units(1);
                tracing::debug!(product = %relisted.name(), "product relisted with one unit");
                self.products.push(relisted);
                Restock::Relisted
            }
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
