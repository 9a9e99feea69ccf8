//! The interactive shop session: login, browse, then the shopping menu.

use std::path::Path;

use thiserror::Error;

use shopfront_auth::{
    edit_user, login, AuthError, LoginInfo, PaymentCard, StoreError, User, UserStore,
};
use shopfront_core::Console;
use shopfront_products::{
    display_csv_as_table, display_filtered_table, load_catalog, Catalog, CatalogError, TableError,
};
use shopfront_sales::{check_cart, logout, remove_item_from_cart, ShoppingCart};

pub const SEARCH_PROMPT: &str = "Search for products in inventory (type all for whole inventory):";
pub const READY_PROMPT: &str = "Ready to shop? (y/n)";
pub const MENU_PROMPT: &str =
    "Enter a product number to add it to your cart, c to check your cart, r <n> to remove item n, e to edit your profile or l to logout:";
pub const INVALID_INPUT: &str = "Invalid input. Please try again.";

#[derive(Debug, Error)]
pub enum ShopError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ShopResult<T> = Result<T, ShopError>;

/// One line of input at the shopping menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// Add the product at this 1-based catalog position.
    Add(usize),
    CheckCart,
    /// Remove the cart entry at this 1-based position.
    Remove(usize),
    EditProfile,
    Logout,
    Invalid,
}

impl MenuCommand {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input {
            "c" => return Self::CheckCart,
            "e" => return Self::EditProfile,
            "l" => return Self::Logout,
            _ => {}
        }
        if let Some(rest) = input.strip_prefix('r') {
            return match rest.trim().parse::<usize>() {
                Ok(n) if n > 0 => Self::Remove(n),
                _ => Self::Invalid,
            };
        }
        match input.parse::<usize>() {
            Ok(n) if n > 0 => Self::Add(n),
            _ => Self::Invalid,
        }
    }
}

/// Log in, let the shopper browse the catalog file, then open the menu.
///
/// A failed login ends the session after the login prompt has said why.
pub fn search_and_buy_product(
    console: &mut impl Console,
    store: &impl UserStore,
    products_csv: &Path,
) -> ShopResult<()> {
    let Some(info) = login(console, store)? else {
        tracing::info!("login failed; leaving the shop");
        return Ok(());
    };

    loop {
        let search = console.ask(SEARCH_PROMPT);
        if search.trim().eq_ignore_ascii_case("all") {
            display_csv_as_table(products_csv, console)?;
        } else {
            display_filtered_table(products_csv, &search, console)?;
        }

        if console.ask(READY_PROMPT).trim().eq_ignore_ascii_case("y") {
            break;
        }
        if console.is_closed() {
            tracing::warn!("input closed while browsing; leaving the shop");
            return Ok(());
        }
    }

    checkout_and_payment(console, store, products_csv, &info)
}

/// The shopping menu for a logged-in shopper.
///
/// Purchases are written back to the store: the wallet and the card balances.
pub fn checkout_and_payment(
    console: &mut impl Console,
    store: &impl UserStore,
    products_csv: &Path,
    info: &LoginInfo,
) -> ShopResult<()> {
    let mut catalog = load_catalog(products_csv)?;
    let mut user = User::from(info.clone());
    let mut cards = stored_cards(store, &info.username)?;
    let mut cart = ShoppingCart::new();

    loop {
        list_products(&catalog, console);

        let input = console.ask(MENU_PROMPT);
        if console.is_closed() {
            tracing::warn!(username = %user.name, items = cart.len(), "input closed; session ended");
            return Ok(());
        }

        match MenuCommand::parse(&input) {
            MenuCommand::Add(n) => match catalog.get(n - 1) {
                Some(product) => {
                    cart.add_item(product);
                    console.say(&format!("{} added to your cart.", product.name()));
                }
                None => console.say(INVALID_INPUT),
            },
            MenuCommand::CheckCart => {
                if check_cart(&mut user, &mut cart, &mut catalog, &mut cards, console) {
                    save_balances(store, &user, &cards)?;
                }
            }
            MenuCommand::Remove(n) => match cart.get(n - 1).cloned() {
                Some(item) => {
                    let outcome = remove_item_from_cart(&mut cart, &item, &mut catalog);
                    console.say(&outcome.to_string());
                }
                None => console.say(INVALID_INPUT),
            },
            MenuCommand::EditProfile => {
                let current = LoginInfo {
                    username: user.name.clone(),
                    wallet: user.wallet,
                };
                cards = edit_user(console, store, &current)?.cards;
            }
            MenuCommand::Logout => {
                if logout(&mut cart, console) {
                    console.say("You have been logged out.");
                    tracing::info!(username = %user.name, "logged out");
                    return Ok(());
                }
            }
            MenuCommand::Invalid => console.say(INVALID_INPUT),
        }
    }
}

fn list_products(catalog: &Catalog, console: &mut impl Console) {
    for (i, product) in catalog.iter().enumerate() {
        console.say(&format!("{}. {}", i + 1, product));
    }
}

fn stored_cards(store: &impl UserStore, username: &str) -> ShopResult<Vec<PaymentCard>> {
    let record = store
        .find(username)?
        .ok_or_else(|| StoreError::UnknownUser(username.to_string()))?;
    Ok(record.cards)
}

fn save_balances(store: &impl UserStore, user: &User, cards: &[PaymentCard]) -> ShopResult<()> {
    let mut record = store
        .find(&user.name)?
        .ok_or_else(|| StoreError::UnknownUser(user.name.clone()))?;
    record.wallet = user.wallet;
    record.cards = cards.to_vec();
    store.replace(record)?;
    tracing::debug!(username = %user.name, wallet = %user.wallet, "balances saved");
    Ok(())
}
