//! `shopfront-auth`: shoppers, their cards, and the user store.
//!
//! Credentials are plain text and checked by equality. This crate only knows
//! about storage through the [`UserStore`] trait.

pub mod login;
pub mod password;
pub mod profile;
pub mod store;
pub mod user;

pub use login::{authenticate, login, register, AuthError, AuthResult};
pub use password::{check_password, valid_password, PasswordIssue};
pub use profile::edit_user;
pub use store::{InMemoryUserStore, JsonFileUserStore, StoreError, UserStore};
pub use user::{LoginInfo, PaymentCard, User, UserRecord};
