//! CSV loader for batch income estimation.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Extra
//! columns are ignored.
//!
//! | Column     | Required | Notes                                                  |
//! |------------|----------|--------------------------------------------------------|
//! | `income`   | yes      | Gross annual income; `₹` and `,` separators allowed    |
//! | `salaried` | no       | `true/false`, `yes/no`, `y/n`, `1/0`; empty means no   |
//!
//! ### Example
//!
//! ```csv
//! income,salaried
//! 1500000,no
//! "₹20,00,000",yes
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::utils::{InputError, parse_income, parse_salaried};

#[derive(Debug, Deserialize)]
struct CsvRow {
    income: String,
    #[serde(default)]
    salaried: Option<String>,
}

/// One income to estimate. `row` is 1-based, header excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeRecord {
    pub row: usize,
    pub income: Decimal,
    pub is_salaried: bool,
}

/// Errors that can occur while loading batch input.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV is structurally invalid or the `income` column is missing.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("row {row}: {source}")]
    InvalidIncome {
        row: usize,
        #[source]
        source: InputError,
    },

    #[error("row {row}: unrecognised salaried value '{value}'")]
    InvalidSalaried { value: String, row: usize },
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<IncomeRecord, CsvLoadError> {
    let income = parse_income(&row.income).map_err(|source| CsvLoadError::InvalidIncome {
        row: row_number,
        source,
    })?;

    let salaried = row.salaried.unwrap_or_default();
    let is_salaried =
        parse_salaried(&salaried).ok_or_else(|| CsvLoadError::InvalidSalaried {
            value: salaried.clone(),
            row: row_number,
        })?;

    Ok(IncomeRecord {
        row: row_number,
        income,
        is_salaried,
    })
}

/// Parse CSV text into income records, in file order.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] if the CSV is structurally invalid.
/// * [`CsvLoadError::InvalidIncome`] / [`CsvLoadError::InvalidSalaried`] for
///   the first bad cell, with its row number.
pub fn load_from_str(input: &str) -> Result<Vec<IncomeRecord>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| convert_row(result?, idx + 1))
        .collect()
}

/// Read a file from disk and delegate to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<IncomeRecord>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    const MIXED_CSV: &str = "\
income,salaried
1500000,no
\"₹20,00,000\",yes
 800000 ,
";

    #[test]
    fn load_from_str_reads_rows_in_order() {
        let records = load_from_str(MIXED_CSV).unwrap();

        assert_eq!(
            records,
            vec![
                IncomeRecord {
                    row: 1,
                    income: dec!(1500000),
                    is_salaried: false,
                },
                IncomeRecord {
                    row: 2,
                    income: dec!(2000000),
                    is_salaried: true,
                },
                IncomeRecord {
                    row: 3,
                    income: dec!(800000),
                    is_salaried: false,
                },
            ]
        );
    }

    #[test]
    fn salaried_column_is_optional() {
        let records = load_from_str("income\n3000000\n").unwrap();

        assert_eq!(records.len(), 1);
        assert!(!records[0].is_salaried);
    }

    #[test]
    fn column_order_does_not_matter() {
        let records = load_from_str("salaried,income\ny,1275000\n").unwrap();

        assert_eq!(records[0].income, dec!(1275000));
        assert!(records[0].is_salaried);
    }

    #[test]
    fn empty_file_with_header_yields_no_records() {
        assert!(load_from_str("income,salaried\n").unwrap().is_empty());
    }

    #[test]
    fn missing_income_column_is_parse_error() {
        let err = load_from_str("salary\n100\n").unwrap_err();

        assert!(matches!(err, CsvLoadError::Parse(_)));
    }

    #[test]
    fn invalid_income_reports_row() {
        let err = load_from_str("income\n100\nlots\n").unwrap_err();

        assert!(matches!(err, CsvLoadError::InvalidIncome { row: 2, .. }));
        assert!(err.to_string().starts_with("row 2:"));
    }

    #[test]
    fn invalid_salaried_reports_row() {
        let err = load_from_str("income,salaried\n100,sometimes\n").unwrap_err();

        match err {
            CsvLoadError::InvalidSalaried { value, row } => {
                assert_eq!(value, "sometimes");
                assert_eq!(row, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_from_file_missing_path_is_io_error() {
        let err = load_from_file(Path::new("/this/path/does/not/exist.csv")).unwrap_err();

        assert!(matches!(err, CsvLoadError::Io { .. }));
    }
}
