//! Catalog loader: `Product,Price,Units` CSV files into products.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use csv::StringRecord;
use thiserror::Error;

use shopfront_core::{DomainError, Money};

use crate::catalog::Catalog;
use crate::product::Product;

pub const NAME_COLUMN: &str = "Product";
pub const PRICE_COLUMN: &str = "Price";
pub const UNITS_COLUMN: &str = "Units";

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The source is not a usable path.
    #[error("catalog source must be a non-empty path")]
    InvalidSource,

    #[error("catalog file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed catalog CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A field could not be parsed. Fatal for the whole load.
    #[error("line {line}: invalid {column} value '{value}'")]
    InvalidValue {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Load a catalog file into a [`Catalog`] with the default match policy.
pub fn load_catalog(source: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let products = load_products(source)?;
    Ok(Catalog::from_products(products))
}

/// Load a catalog file into products, in file order.
pub fn load_products(source: impl AsRef<Path>) -> Result<Vec<Product>, CatalogError> {
    let path = source.as_ref();
    if path.as_os_str().is_empty() {
        return Err(CatalogError::InvalidSource);
    }

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CatalogError::NotFound {
            path: path.to_path_buf(),
        },
        _ => CatalogError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let products = read_products(file)?;
    tracing::info!(path = %path.display(), count = products.len(), "catalog loaded");
    Ok(products)
}

/// Column positions resolved from the header row.
struct Columns {
    name: usize,
    price: usize,
    units: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Option<Self> {
        let find = |column: &str| headers.iter().position(|h| h == column);
        Some(Self {
            name: find(NAME_COLUMN)?,
            price: find(PRICE_COLUMN)?,
            units: find(UNITS_COLUMN)?,
        })
    }
}

/// Parse catalog CSV from any reader.
///
/// - header missing a required column: empty result (logged)
/// - row with more or fewer fields than the header: row skipped (logged)
/// - empty name: row skipped
/// - unparseable price or units: [`CatalogError::InvalidValue`]
pub fn read_products<R: Read>(reader: R) -> Result<Vec<Product>, CatalogError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }

    let Some(columns) = Columns::locate(&headers) else {
        tracing::warn!(
            headers = ?headers.iter().collect::<Vec<_>>(),
            "catalog header lacks Product/Price/Units; nothing loaded"
        );
        return Ok(Vec::new());
    };

    let mut products = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        if record.len() != headers.len() {
            tracing::warn!(
                line,
                fields = record.len(),
                expected = headers.len(),
                "catalog row does not match the header width; skipped"
            );
            continue;
        }
        let (Some(name), Some(price), Some(units)) = (
            record.get(columns.name),
            record.get(columns.price),
            record.get(columns.units),
        ) else {
            continue;
        };

        if name.is_empty() {
            tracing::debug!(line, "catalog row without a product name; skipped");
            continue;
        }

        let price = parse_price(price).ok_or_else(|| CatalogError::InvalidValue {
            line,
            column: PRICE_COLUMN,
            value: price.to_string(),
        })?;
        let units: i64 = units.parse().map_err(|_| CatalogError::InvalidValue {
            line,
            column: UNITS_COLUMN,
            value: units.to_string(),
        })?;

        products.push(Product::new(name, price, units)?);
    }

    Ok(products)
}

fn parse_price(raw: &str) -> Option<Money> {
    Money::parse(raw).ok().filter(|price| !price.is_negative())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TempFile;

    #[test]
    fn loads_a_valid_file_in_order() {
        let file = TempFile::with_contents(
            "Product,Price,Units\nApple,1,10\nBanana,0.75,8\nOrange,1.25,12\n",
        );
        let products = load_products(file.path()).unwrap();

        assert_eq!(products.len(), 3);
        assert_eq!(products[0].name(), "Apple");
        assert_eq!(products[0].price(), Money::from_major(1));
        assert_eq!(products[0].units(), 10);
        assert_eq!(products[1].price(), Money::from_cents(75));
        assert_eq!(products[2].name(), "Orange");
    }

    #[test]
    fn load_catalog_wraps_products() {
        let file = TempFile::with_contents("Product,Price,Units\nBanana,1.0,15\nSalmon,10.0,2\n");
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find_by_name("Salmon").unwrap().units(), 2);
    }

    #[test]
    fn empty_path_is_an_invalid_source() {
        assert!(matches!(load_products(""), Err(CatalogError::InvalidSource)));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_products("non_existent_file.csv").unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { path } if path.ends_with("non_existent_file.csv")));
    }

    #[test]
    fn fractional_units_fail_the_whole_load() {
        let file = TempFile::with_contents(
            "Product,Price,Units\nApple,1.0,10\nBanana,0.75,8\nOrange,1.25,12.5\n",
        );
        let err = load_products(file.path()).unwrap_err();
        match err {
            CatalogError::InvalidValue { line, column, value } => {
                assert_eq!(line, 4);
                assert_eq!(column, UNITS_COLUMN);
                assert_eq!(value, "12.5");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_price_fails_the_whole_load() {
        let file = TempFile::with_contents("Product,Price,Units\nApple,cheap,10\n");
        let err = load_products(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue { column: PRICE_COLUMN, .. }));
    }

    #[test]
    fn negative_price_fails_the_whole_load() {
        let file = TempFile::with_contents("Product,Price,Units\nApple,-1,10\n");
        assert!(matches!(
            load_products(file.path()),
            Err(CatalogError::InvalidValue { column: PRICE_COLUMN, .. })
        ));
    }

    #[test]
    fn rows_without_a_name_are_skipped() {
        let file = TempFile::with_contents("Product,Price,Units\n,1.0,10\n");
        assert!(load_products(file.path()).unwrap().is_empty());
    }

    #[test]
    fn header_missing_a_column_yields_nothing() {
        let file = TempFile::with_contents("Product,Units\nApple,10\n");
        assert!(load_products(file.path()).unwrap().is_empty());
    }

    #[test]
    fn header_only_file_yields_nothing() {
        let file = TempFile::with_contents("Product,Price,Units\n");
        assert!(load_products(file.path()).unwrap().is_empty());
    }

    #[test]
    fn completely_empty_file_yields_nothing() {
        let file = TempFile::with_contents("");
        assert!(load_products(file.path()).unwrap().is_empty());
    }

    #[test]
    fn extra_columns_are_ignored() {
        let file = TempFile::with_contents(
            "Product,Price,Units,ExtraColumn\nApple,1.0,10,Extra data\nBanana,0.75,8,Extra data\n",
        );
        let products = load_products(file.path()).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].name(), "Banana");
    }

    #[test]
    fn short_rows_are_skipped() {
        let file = TempFile::with_contents("Product,Price,Units\nApple,1.0\nBanana,0.75,8\n");
        let products = load_products(file.path()).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name(), "Banana");
    }

    #[test]
    fn wide_rows_are_skipped() {
        let products = read_products("Product,Price,Units\nApple,1.0,10,junk\n".as_bytes()).unwrap();
        assert!(products.is_empty());

        let products =
            read_products("Product,Price,Units\nApple,1.0,10,junk\nBanana,0.75,8\n".as_bytes()).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name(), "Banana");
    }

    #[test]
    fn sub_cent_price_fails_the_whole_load() {
        let err = read_products("Product,Price,Units\nPin,0.001,10\n".as_bytes()).unwrap_err();
        match err {
            CatalogError::InvalidValue { line, column, value } => {
                assert_eq!(line, 2);
                assert_eq!(column, PRICE_COLUMN);
                assert_eq!(value, "0.001");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn columns_are_found_by_header_name() {
        let products = read_products("Units,Product,Price\n3,Kiwi,0.5\n".as_bytes()).unwrap();
        assert_eq!(products[0].name(), "Kiwi");
        assert_eq!(products[0].units(), 3);
        assert_eq!(products[0].price(), Money::from_cents(50));
    }
}
