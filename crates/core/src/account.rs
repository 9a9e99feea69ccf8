//! Anything that can pay: a user's wallet or a payment card.

use crate::money::Money;

/// A named balance that purchases are debited from.
pub trait Account {
    /// Display name: the user's name for a wallet, the card name for a card.
    fn holder(&self) -> &str;

    fn balance(&self) -> Money;

    /// Subtract `amount` from the balance. Callers check funds first.
    fn debit(&mut self, amount: Money);

    fn can_afford(&self, amount: Money) -> bool {
        self.balance() >= amount
    }
}

impl<A: Account + ?Sized> Account for &mut A {
    fn holder(&self) -> &str {
        (**self).holder()
    }

    fn balance(&self) -> Money {
        (**self).balance()
    }

    fn debit(&mut self, amount: Money) {
        (**self).debit(amount)
    }
}
