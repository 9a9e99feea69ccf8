//! Profile editing.

use shopfront_core::{Console, Money};

use crate::login::AuthResult;
use crate::store::{StoreError, UserStore};
use crate::user::{LoginInfo, PaymentCard, UserRecord};

/// Ask for contact details and cards, then replace the stored record.
///
/// The entered cards replace any stored ones and start with a zero balance.
/// Password and wallet are carried over from the store.
pub fn edit_user(
    console: &mut impl Console,
    store: &impl UserStore,
    login: &LoginInfo,
) -> AuthResult<UserRecord> {
    console.say("Editing user information:");

    let address = console.ask("Adress: ");
    let phone = console.ask("Phone: ");
    let email = console.ask("Email: ");

    let mut cards = Vec::new();
    while console.ask("Do you want to add a card? (y/n)") == "y" {
        cards.push(PaymentCard {
            number: console.ask("Card number: "),
            expiration_date: console.ask("Card expiration date: "),
            name: console.ask("Card name: "),
            ccv: console.ask("Card CCV: "),
            balance: Money::ZERO,
        });
    }

    let stored = store
        .find(&login.username)?
        .ok_or_else(|| StoreError::UnknownUser(login.username.clone()))?;

    let record = UserRecord {
        username: stored.username,
        password: stored.password,
        wallet: stored.wallet,
        address,
        phone,
        email,
        cards,
    };
    store.replace(record.clone())?;
    tracing::info!(username = %record.username, cards = record.cards.len(), "profile updated");

    console.say("Editing user finished!");
    Ok(record)
}
