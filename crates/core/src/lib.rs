//! `shopfront-core`: domain building blocks shared by the shop crates.
//!
//! This crate contains **pure domain** primitives plus the [`Console`] seam that
//! the interactive flows talk through.

pub mod account;
pub mod console;
pub mod error;
pub mod id;
pub mod money;

pub use account::Account;
pub use console::{Console, ScriptedConsole, StdConsole};
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use money::Money;
