//! Console front end for the shop.

pub mod config;
pub mod shop;

pub use config::CliConfig;
pub use shop::{checkout_and_payment, search_and_buy_product, MenuCommand, ShopError, ShopResult};
