//! Show the cart and confirm before paying.

use shopfront_core::{Account, Console};
use shopfront_products::Catalog;

use crate::cart::{render_item, ShoppingCart};
use crate::payment::checkout_with_console;

pub const CHECKOUT_PROMPT: &str = "Do you want to checkout? (y/n)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Proceed,
    Decline,
}

impl Confirmation {
    /// `y` or `Y` proceeds. Anything else declines.
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "y" | "Y" => Self::Proceed,
            _ => Self::Decline,
        }
    }
}

/// Print the cart, ask for confirmation and check out.
///
/// Returns `true` only when a purchase went through.
pub fn check_cart<U, C>(
    user: &mut U,
    cart: &mut ShoppingCart,
    catalog: &mut Catalog,
    cards: &mut [C],
    console: &mut impl Console,
) -> bool
where
    U: Account + ?Sized,
    C: Account,
{
    for item in cart.items() {
        console.say(&render_item(item, catalog));
    }

    match Confirmation::from_token(&console.ask(CHECKOUT_PROMPT)) {
        Confirmation::Decline => false,
        Confirmation::Proceed => {
            console.say("\n");
            checkout_with_console(user, cart, catalog, cards, console).is_completed()
        }
    }
}
