//! Raw CSV table display and name search.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use thiserror::Error;

use shopfront_core::Console;

use crate::product::quote;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("table path cannot be empty")]
    EmptyPath,

    #[error("table {} is empty", path.display())]
    Empty { path: PathBuf },

    #[error("failed to open table {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed table CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Render one row as `['a', 'b', 'c']`.
pub fn format_row<'a>(fields: impl IntoIterator<Item = &'a str>) -> String {
    let quoted: Vec<String> = fields.into_iter().map(quote).collect();
    format!("[{}]", quoted.join(", "))
}

/// Print every row of the file, header included.
pub fn display_csv_as_table(path: impl AsRef<Path>, console: &mut impl Console) -> Result<(), TableError> {
    let rows = read_rows(path.as_ref())?;
    for row in &rows {
        console.say(&format_row(row.iter()));
    }
    Ok(())
}

/// Print the header, then every row whose name (first field) equals `search`
/// ignoring ASCII case. An empty search matches nothing.
pub fn display_filtered_table(
    path: impl AsRef<Path>,
    search: &str,
    console: &mut impl Console,
) -> Result<(), TableError> {
    let rows = read_rows(path.as_ref())?;
    let mut rows = rows.iter();
    if let Some(header) = rows.next() {
        console.say(&format_row(header.iter()));
    }

    let search = search.trim();
    if search.is_empty() {
        return Ok(());
    }
    for row in rows.filter(|row| row.get(0).is_some_and(|name| name.eq_ignore_ascii_case(search))) {
        console.say(&format_row(row.iter()));
    }
    Ok(())
}

fn read_rows(path: &Path) -> Result<Vec<StringRecord>, TableError> {
    if path.as_os_str().is_empty() {
        return Err(TableError::EmptyPath);
    }
    let file = File::open(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);
    let rows = rdr.records().collect::<Result<Vec<_>, _>>()?;
    if rows.is_empty() {
        return Err(TableError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(rows)
}
