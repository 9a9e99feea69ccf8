//! Shopping cart and item removal.

use core::fmt;

use shopfront_core::{Money, ProductId};
use shopfront_products::{Catalog, Product, Restock};

/// Ordered list of product snapshots. One entry per unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingCart {
    items: Vec<Product>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot of `product`. Stock is not touched until checkout.
    pub fn add_item(&mut self, product: &Product) {
        self.items.push(product.clone());
    }

    /// Remove the first entry for `id`.
    pub fn remove_item(&mut self, id: ProductId) -> Option<Product> {
        let idx = self.items.iter().position(|p| p.id_typed() == id)?;
        Some(self.items.remove(idx))
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of entry prices, or `None` when it does not fit in [`Money`].
    pub fn total(&self) -> Option<Money> {
        self.items
            .iter()
            .try_fold(Money::ZERO, |sum, item| sum.checked_add(item.price()))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Render a cart entry with the catalog's current stock when it is still
/// listed, otherwise as snapshotted.
pub fn render_item(item: &Product, catalog: &Catalog) -> String {
    catalog.matching(item).unwrap_or(item).to_string()
}

/// Result of [`remove_item_from_cart`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    NotInCart,
    Removed {
        restock: Restock,
        /// Rendered lines of what is left in the cart.
        remaining: Vec<String>,
    },
}

impl fmt::Display for RemovalOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInCart => f.write_str("You don't have this item in your cart."),
            Self::Removed { remaining, .. } if remaining.is_empty() => {
                f.write_str("No remaining products in cart.")
            }
            Self::Removed { remaining, .. } => {
                f.write_str("Remaining items in cart: ")?;
                for line in remaining {
                    write!(f, "\n{line}")?;
                }
                Ok(())
            }
        }
    }
}

/// Take one entry of `product` out of the cart and hand a unit back to the
/// catalog, relisting the product if it had sold out.
pub fn remove_item_from_cart(
    cart: &mut ShoppingCart,
    product: &Product,
    catalog: &mut Catalog,
) -> RemovalOutcome {
    let Some(removed) = cart.remove_item(product.id_typed()) else {
        return RemovalOutcome::NotInCart;
    };

    let restock = catalog.restore_unit(&removed);
    tracing::debug!(product = %removed.name(), ?restock, "item removed from cart");

    let remaining = cart.items().iter().map(|item| render_item(item, catalog)).collect();
    RemovalOutcome::Removed { restock, remaining }
}
