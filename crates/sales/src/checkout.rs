//! Checkout engine: funds check, payment and stock commit.

use core::fmt;

use chrono::{DateTime, Utc};

use shopfront_core::{Account, Money};
use shopfront_products::{Catalog, StockChange};

use crate::cart::ShoppingCart;

/// Where the money comes from.
pub enum Payment<'a> {
    /// The shopper's own wallet.
    Wallet,
    /// A stored card.
    Card(&'a mut dyn Account),
}

impl fmt::Debug for Payment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wallet => f.write_str("Wallet"),
            Self::Card(card) => f.debug_tuple("Card").field(&card.holder()).finish(),
        }
    }
}

/// A completed purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub customer: String,
    /// Name of the wallet owner or card that paid.
    pub paid_by: String,
    pub total: Money,
    /// The shopper's wallet after the purchase, whoever paid.
    pub remaining_balance: Money,
    pub changes: Vec<StockChange>,
    /// Cart entries with no catalog record left to take stock from.
    pub unmatched: usize,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    EmptyBasket,
    InsufficientFunds,
    InsufficientCardFunds,
    InvalidCardSelection,
    Completed(Receipt),
}

impl CheckoutOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    pub fn receipt(&self) -> Option<&Receipt> {
        match self {
            Self::Completed(receipt) => Some(receipt),
            _ => None,
        }
    }
}

impl fmt::Display for CheckoutOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBasket => {
                f.write_str("Your basket is empty. Please add items before checking out.")
            }
            Self::InsufficientFunds => f.write_str(
                "You don't have enough money to complete the purchase.\nPlease try again!",
            ),
            Self::InsufficientCardFunds => f.write_str(
                "That card does not have enough money to complete the purchase.\nPlease try again!",
            ),
            Self::InvalidCardSelection => f.write_str("Invalid card selection."),
            Self::Completed(receipt) => write!(
                f,
                "Thank you for your purchase, {}! Your remaining balance is {}",
                receipt.customer, receipt.remaining_balance
            ),
        }
    }
}

/// Pay for everything in `cart` and take the stock from `catalog`.
///
/// Nothing changes unless the payer can cover the whole total. On success the
/// payer is debited, one unit per cart entry leaves the catalog (sold-out
/// products are delisted) and the cart is emptied. Entries whose product is no
/// longer listed are still charged.
pub fn checkout<U>(
    user: &mut U,
    cart: &mut ShoppingCart,
    catalog: &mut Catalog,
    payment: Payment<'_>,
) -> CheckoutOutcome
where
    U: Account + ?Sized,
{
    if cart.is_empty() {
        return CheckoutOutcome::EmptyBasket;
    }

    let Some(total) = cart.total() else {
        tracing::warn!(items = cart.len(), "cart total overflows; no account can cover it");
        return match payment {
            Payment::Wallet => CheckoutOutcome::InsufficientFunds,
            Payment::Card(_) => CheckoutOutcome::InsufficientCardFunds,
        };
    };
    let paid_by = match payment {
        Payment::Wallet => {
            if !user.can_afford(total) {
                tracing::debug!(customer = user.holder(), %total, balance = %user.balance(), "wallet cannot cover cart");
                return CheckoutOutcome::InsufficientFunds;
            }
            user.debit(total);
            user.holder().to_string()
        }
        Payment::Card(card) => {
            if !card.can_afford(total) {
                tracing::debug!(card = card.holder(), %total, balance = %card.balance(), "card cannot cover cart");
                return CheckoutOutcome::InsufficientCardFunds;
            }
            card.debit(total);
            card.holder().to_string()
        }
    };

    let mut changes = Vec::with_capacity(cart.len());
    let mut unmatched = 0;
    for item in cart.items() {
        match catalog.take_unit(item) {
            Some(change) => changes.push(change),
            None => unmatched += 1,
        }
    }
    if unmatched > 0 {
        tracing::warn!(unmatched, "cart held more units than the catalog had; charged without stock");
    }
    cart.clear();

    let receipt = Receipt {
        customer: user.holder().to_string(),
        paid_by,
        total,
        remaining_balance: user.balance(),
        changes,
        unmatched,
        completed_at: Utc::now(),
    };
    tracing::info!(
        customer = %receipt.customer,
        paid_by = %receipt.paid_by,
        total = %receipt.total,
        items = receipt.changes.len() + receipt.unmatched,
        "checkout completed"
    );
    CheckoutOutcome::Completed(receipt)
}
