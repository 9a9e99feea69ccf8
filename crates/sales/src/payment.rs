//! Interactive payment selection in front of the checkout engine.

use shopfront_core::{Account, Console};
use shopfront_products::Catalog;

use crate::cart::ShoppingCart;
use crate::checkout::{checkout, CheckoutOutcome, Payment};

pub const PAYMENT_PROMPT: &str = "Do you want to pay with your wallet or a card? (w/c)";
pub const CARD_PROMPT: &str = "Choose a card by its number:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentChoice {
    Wallet,
    Card,
}

impl PaymentChoice {
    /// `c` picks a card; anything else pays from the wallet.
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "c" => Self::Card,
            _ => Self::Wallet,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSelection {
    /// Zero-based position in the card list.
    Card(usize),
    Invalid,
}

impl CardSelection {
    /// Parse a 1-based card number against `card_count` cards.
    pub fn parse(token: &str, card_count: usize) -> Self {
        match token.trim().parse::<usize>() {
            Ok(n) if (1..=card_count).contains(&n) => Self::Card(n - 1),
            _ => Self::Invalid,
        }
    }
}

/// Ask how to pay, run the checkout and print its outcome.
///
/// Shoppers without cards pay from the wallet without being asked. An empty
/// cart is reported before any question.
pub fn checkout_with_console<U, C>(
    user: &mut U,
    cart: &mut ShoppingCart,
    catalog: &mut Catalog,
    cards: &mut [C],
    console: &mut impl Console,
) -> CheckoutOutcome
where
    U: Account + ?Sized,
    C: Account,
{
    let outcome = if cart.is_empty() {
        CheckoutOutcome::EmptyBasket
    } else if cards.is_empty() {
        checkout(user, cart, catalog, Payment::Wallet)
    } else {
        match PaymentChoice::from_token(&console.ask(PAYMENT_PROMPT)) {
            PaymentChoice::Wallet => checkout(user, cart, catalog, Payment::Wallet),
            PaymentChoice::Card => {
                for (i, card) in cards.iter().enumerate() {
                    console.say(&format!("{}. {}", i + 1, card.holder()));
                }
                console.say("\n");

                match CardSelection::parse(&console.ask(CARD_PROMPT), cards.len()) {
                    CardSelection::Card(idx) => {
                        checkout(user, cart, catalog, Payment::Card(&mut cards[idx]))
                    }
                    CardSelection::Invalid => {
                        tracing::debug!(cards = cards.len(), "invalid card selection");
                        CheckoutOutcome::InvalidCardSelection
                    }
                }
            }
        }
    };

    console.say(&outcome.to_string());
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_auth::{PaymentCard, User};
    use shopfront_core::{Money, ScriptedConsole};
    use shopfront_products::Product;

    fn catalog() -> Catalog {
        Catalog::from_products(vec![
            Product::new("Banana", Money::from_major(1), 15).unwrap(),
            Product::new("Salmon", Money::from_major(10), 2).unwrap(),
        ])
    }

    fn cards() -> Vec<PaymentCard> {
        vec![
            PaymentCard::named("Debit", Money::from_major(1000)),
            PaymentCard::named("Credit", Money::from_major(100)),
            PaymentCard::named("Debit", Money::ZERO),
        ]
    }

    fn balances(cards: &[PaymentCard]) -> Vec<Money> {
        cards.iter().map(|c| c.balance).collect()
    }

    fn banana_cart(catalog: &Catalog) -> ShoppingCart {
        let mut cart = ShoppingCart::new();
        cart.add_item(catalog.find_by_name("Banana").unwrap());
        cart
    }

    #[test]
    fn payment_choice_tokens() {
        assert_eq!(PaymentChoice::from_token("c"), PaymentChoice::Card);
        assert_eq!(PaymentChoice::from_token(" c "), PaymentChoice::Card);
        assert_eq!(PaymentChoice::from_token("w"), PaymentChoice::Wallet);
        assert_eq!(PaymentChoice::from_token(""), PaymentChoice::Wallet);
        assert_eq!(PaymentChoice::from_token("card"), PaymentChoice::Wallet);
    }

    #[test]
    fn card_selection_is_one_based() {
        assert_eq!(CardSelection::parse("1", 3), CardSelection::Card(0));
        assert_eq!(CardSelection::parse("3", 3), CardSelection::Card(2));
        assert_eq!(CardSelection::parse("0", 3), CardSelection::Invalid);
        assert_eq!(CardSelection::parse("4", 3), CardSelection::Invalid);
        assert_eq!(CardSelection::parse("one", 3), CardSelection::Invalid);
        assert_eq!(CardSelection::parse("-1", 3), CardSelection::Invalid);
        assert_eq!(CardSelection::parse("1", 0), CardSelection::Invalid);
    }

    #[test]
    fn first_card_pays() {
        let mut catalog = catalog();
        let mut user = User::new("Ramanathan", Money::from_major(100));
        let mut cart = banana_cart(&catalog);
        let mut cards = cards();
        let mut console = ScriptedConsole::new(["c", "1"]);

        let outcome = checkout_with_console(&mut user, &mut cart, &mut catalog, &mut cards, &mut console);

        assert!(outcome.is_completed());
        assert_eq!(
            console.output(),
            "1. Debit\n2. Credit\n3. Debit\n\n\nThank you for your purchase, Ramanathan! Your remaining balance is 100.0\n"
        );
        assert_eq!(user.wallet, Money::from_major(100));
        assert_eq!(
            balances(&cards),
            [Money::from_major(999), Money::from_major(100), Money::ZERO]
        );
        assert_eq!(catalog.find_by_name("Banana").unwrap().units(), 14);
        assert!(cart.is_empty());
    }

    #[test]
    fn empty_card_is_refused() {
        let mut catalog = catalog();
        let mut user = User::new("Ramanathan", Money::from_major(100));
        let mut cart = banana_cart(&catalog);
        let mut cards = cards();
        let mut console = ScriptedConsole::new(["c", "3"]);

        let outcome = checkout_with_console(&mut user, &mut cart, &mut catalog, &mut cards, &mut console);

        assert_eq!(outcome, CheckoutOutcome::InsufficientCardFunds);
        assert!(console.output().ends_with(
            "That card does not have enough money to complete the purchase.\nPlease try again!\n"
        ));
        assert_eq!(balances(&cards), balances(&self::cards()));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn wallet_choice_leaves_cards_alone() {
        let mut catalog = catalog();
        let mut user = User::new("Ramanathan", Money::from_major(100));
        let mut cart = banana_cart(&catalog);
        let mut cards = cards();
        let mut console = ScriptedConsole::new(["w"]);

        let outcome = checkout_with_console(&mut user, &mut cart, &mut catalog, &mut cards, &mut console);

        assert_eq!(
            console.output(),
            "Thank you for your purchase, Ramanathan! Your remaining balance is 99.0\n"
        );
        assert!(outcome.is_completed());
        assert_eq!(balances(&cards), balances(&self::cards()));
    }

    #[test]
    fn out_of_range_card_changes_nothing() {
        let mut catalog = catalog();
        let mut user = User::new("Ramanathan", Money::from_major(100));
        let mut cart = banana_cart(&catalog);
        let mut cards = cards();
        let mut console = ScriptedConsole::new(["c", "7"]);

        let outcome = checkout_with_console(&mut user, &mut cart, &mut catalog, &mut cards, &mut console);

        assert_eq!(outcome, CheckoutOutcome::InvalidCardSelection);
        assert!(console.output().ends_with("Invalid card selection.\n"));
        assert_eq!(user.wallet, Money::from_major(100));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn no_cards_means_no_questions() {
        let mut catalog = catalog();
        let mut user = User::new("TestUser", Money::from_major(10));
        let mut cart = banana_cart(&catalog);
        let mut cards: Vec<PaymentCard> = Vec::new();
        let mut console = ScriptedConsole::default();

        let outcome = checkout_with_console(&mut user, &mut cart, &mut catalog, &mut cards, &mut console);

        assert!(outcome.is_completed());
        assert!(console.prompts().is_empty());
        assert_eq!(user.wallet, Money::from_major(9));
    }

    #[test]
    fn empty_cart_is_reported_before_asking() {
        let mut catalog = catalog();
        let mut user = User::new("TestUser", Money::from_major(10));
        let mut cart = ShoppingCart::new();
        let mut cards = cards();
        let mut console = ScriptedConsole::new(["c", "1"]);

        let outcome = checkout_with_console(&mut user, &mut cart, &mut catalog, &mut cards, &mut console);

        assert_eq!(outcome, CheckoutOutcome::EmptyBasket);
        assert!(console.prompts().is_empty());
        assert_eq!(
            console.output(),
            "Your basket is empty. Please add items before checking out.\n"
        );
    }
}
