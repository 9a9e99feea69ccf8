//! Users, payment cards and the stored user record.

use serde::{Deserialize, Serialize};

use shopfront_core::{Account, Money};

// ─────────────────────────────────────────────────────────────────────────────
// Session user
// ─────────────────────────────────────────────────────────────────────────────

/// The logged-in shopper as checkout sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub wallet: Money,
}

impl User {
    pub fn new(name: impl Into<String>, wallet: Money) -> Self {
        Self {
            name: name.into(),
            wallet,
        }
    }
}

impl Account for User {
    fn holder(&self) -> &str {
        &self.name
    }

    fn balance(&self) -> Money {
        self.wallet
    }

    fn debit(&mut self, amount: Money) {
        self.wallet -= amount;
    }
}

impl From<LoginInfo> for User {
    fn from(info: LoginInfo) -> Self {
        Self::new(info.username, info.wallet)
    }
}

/// What a successful login hands back: `{"username": ..., "wallet": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginInfo {
    pub username: String,
    pub wallet: Money,
}

// ─────────────────────────────────────────────────────────────────────────────
// Payment card
// ─────────────────────────────────────────────────────────────────────────────

/// A stored payment card. Only `name` and `balance` matter to checkout.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaymentCard {
    #[serde(default)]
    pub number: String,
    #[serde(default, rename = "expirationdate")]
    pub expiration_date: String,
    pub name: String,
    #[serde(default)]
    pub ccv: String,
    #[serde(default)]
    pub balance: Money,
}

impl PaymentCard {
    /// A card known only by name and balance.
    pub fn named(name: impl Into<String>, balance: Money) -> Self {
        Self {
            name: name.into(),
            balance,
            ..Default::default()
        }
    }
}

impl Account for PaymentCard {
    fn holder(&self) -> &str {
        &self.name
    }

    fn balance(&self) -> Money {
        self.balance
    }

    fn debit(&mut self, amount: Money) {
        self.balance -= amount;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Stored record
// ─────────────────────────────────────────────────────────────────────────────

/// One entry of the user store (`users.json`).
///
/// Passwords are kept in plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub wallet: Money,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub cards: Vec<PaymentCard>,
}

impl UserRecord {
    /// A fresh account: empty profile, empty wallet, no cards.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            wallet: Money::ZERO,
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            cards: Vec::new(),
        }
    }

    pub fn with_wallet(mut self, wallet: Money) -> Self {
        self.wallet = wallet;
        self
    }

    pub fn with_cards(mut self, cards: Vec<PaymentCard>) -> Self {
        self.cards = cards;
        self
    }

    pub fn login_info(&self) -> LoginInfo {
        LoginInfo {
            username: self.username.clone(),
            wallet: self.wallet,
        }
    }
}
