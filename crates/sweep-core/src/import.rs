// File: crates/sweep-core/src/import.rs
// Summary: CSV ingestion for the imported mode: header lookup by name, per-row validation, skip-and-count.

use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::ColumnNames;
use crate::data::RawRecord;
use crate::detect;
use crate::error::{SweepError, SweepResult};

/// Parsed rows plus the number of rows that were rejected.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImportReport {
    pub rows: Vec<RawRecord>,
    pub skipped: usize,
}

pub fn parse_csv_str(text: &str, columns: &ColumnNames) -> SweepResult<ImportReport> {
    parse_csv_reader(text.as_bytes(), columns)
}

/// Read a file, rejecting anything that does not look like text, then parse it.
pub fn load_csv(path: &Path, columns: &ColumnNames) -> SweepResult<ImportReport> {
    detect::ensure_text_file(path)?;
    let file = std::fs::File::open(path)?;
    parse_csv_reader(std::io::BufReader::new(file), columns)
}

pub fn parse_csv_reader<R: Read>(reader: R, columns: &ColumnNames) -> SweepResult<ImportReport> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect::<Vec<_>>();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(SweepError::EmptyInput);
    }
    debug!(?headers, "csv headers");

    let idx = |name: &str| -> SweepResult<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .or_else(|| headers.iter().position(|h| h.eq_ignore_ascii_case(name)))
            .ok_or_else(|| SweepError::MissingColumn { name: name.to_string() })
    };
    let i_year = idx(&columns.year)?;
    let i_month = idx(&columns.month)?;
    let i_product = idx(&columns.product)?;
    let i_sales = idx(&columns.sales)?;

    let mut report = ImportReport::default();
    for (line, rec) in rdr.records().enumerate() {
        let rec = match rec {
            Ok(rec) => rec,
            Err(e) => {
                warn!(row = line + 1, error = %e, "unreadable csv row skipped");
                report.skipped += 1;
                continue;
            }
        };
        let field = |i: usize| rec.get(i).map(str::trim);
        let parsed = (|| {
            let year = parse_year(field(i_year)?)?;
            let month = field(i_month).filter(|s| !s.is_empty())?;
            let product = field(i_product)?;
            let sales = parse_sales(field(i_sales)?)?;
            Some(RawRecord { year, month: month.to_string(), product: product.to_string(), sales })
        })();
        match parsed {
            Some(row) => report.rows.push(row),
            None => {
                warn!(row = line + 1, "malformed csv row skipped");
                report.skipped += 1;
            }
        }
    }
    debug!(rows = report.rows.len(), skipped = report.skipped, "csv parsed");
    Ok(report)
}

fn parse_year(s: &str) -> Option<i32> {
    if let Ok(y) = s.parse::<i32>() {
        return Some(y);
    }
    let f = s.parse::<f64>().ok()?;
    if f.is_finite() && f.abs() < i32::MAX as f64 { Some(f.trunc() as i32) } else { None }
}

/// Finite, non-negative sales figure.
fn parse_sales(s: &str) -> Option<f64> {
    let v = s.parse::<f64>().ok()?;
    (v.is_finite() && v >= 0.0).then_some(v)
}
