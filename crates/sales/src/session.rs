//! Leaving the shop.

use shopfront_core::Console;

use crate::cart::ShoppingCart;
use crate::confirm::Confirmation;

pub const LOGOUT_PROMPT: &str = "Do you still want to logout? (y/n)";

/// Confirm a logout. A non-empty cart is shown and must be abandoned
/// explicitly; it is cleared when the shopper confirms.
pub fn logout(cart: &mut ShoppingCart, console: &mut impl Console) -> bool {
    if cart.is_empty() {
        return true;
    }

    console.say("Your cart is not empty.You have following items");
    for item in cart.items() {
        console.say(&item.to_string());
    }

    match Confirmation::from_token(&console.ask(LOGOUT_PROMPT)) {
        Confirmation::Proceed => {
            tracing::debug!(items = cart.len(), "cart abandoned at logout");
            cart.clear();
            true
        }
        Confirmation::Decline => false,
    }
}
