//! Products: catalog records, the CSV catalog loader and table display.
//!
//! Pure in-memory logic apart from the loader and table readers, which take a
//! file path and nothing else.

pub mod catalog;
pub mod loader;
pub mod product;
pub mod table;

#[cfg(test)]
mod test_support;

pub use catalog::{Catalog, MatchPolicy, Restock, StockChange};
pub use loader::{load_catalog, load_products, read_products, CatalogError};
pub use product::{quote, Product};
pub use table::{display_csv_as_table, display_filtered_table, format_row, TableError};
