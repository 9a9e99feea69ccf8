//! Sales: the shopping cart, the checkout engine and the console flows around
//! them.
//!
//! The engine in [`checkout`] is pure in-memory logic. The console flows
//! ([`payment`], [`confirm`], [`session`]) only turn answers into decisions
//! and print outcomes.

pub mod cart;
pub mod checkout;
pub mod confirm;
pub mod payment;
pub mod session;

pub use cart::{remove_item_from_cart, render_item, RemovalOutcome, ShoppingCart};
pub use checkout::{checkout, CheckoutOutcome, Payment, Receipt};
pub use confirm::{check_cart, Confirmation};
pub use payment::{checkout_with_console, CardSelection, PaymentChoice};
pub use session::logout;
