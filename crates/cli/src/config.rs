//! Runtime configuration read from the environment.

use std::path::PathBuf;

pub const PRODUCTS_CSV_ENV: &str = "SHOPFRONT_PRODUCTS_CSV";
pub const USERS_JSON_ENV: &str = "SHOPFRONT_USERS_JSON";

pub const DEFAULT_PRODUCTS_CSV: &str = "products.csv";
pub const DEFAULT_USERS_JSON: &str = "users.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub products_csv: PathBuf,
    pub users_json: PathBuf,
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, default: &str| -> PathBuf {
            match lookup(key).filter(|v| !v.trim().is_empty()) {
                Some(v) => PathBuf::from(v),
                None => {
                    tracing::warn!("{key} not set; using {default}");
                    PathBuf::from(default)
                }
            }
        };

        Self {
            products_csv: read(PRODUCTS_CSV_ENV, DEFAULT_PRODUCTS_CSV),
            users_json: read(USERS_JSON_ENV, DEFAULT_USERS_JSON),
        }
    }
}
