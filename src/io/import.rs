//! CSV ingestion into typed reconciliation entries
//!
//! Reads header-keyed delimited text, coerces column values (string dates to
//! `NaiveDate`, string amounts to `BigDecimal`) and assigns a synthetic unique
//! id to every row. Malformed rows abort ingestion with a validation error
//! naming the offending line; the engine itself never sees raw text.

use std::io::Read;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::types::*;

/// Read bank statement entries from CSV.
///
/// Required columns: `date`, `description`, `amount`, `reference_number`.
pub fn read_bank_entries<R: Read>(reader: R) -> ReconResult<Vec<BankEntry>> {
    map_rows(reader, |row| {
        Ok(BankEntry::new(
            Uuid::new_v4().to_string(),
            row.date("date")?,
            row.field("description")?.to_string(),
            row.amount("amount")?,
            row.field("reference_number")?.to_string(),
        ))
    })
}

/// Read internal financial records from CSV.
///
/// Required columns: `date`, `vendor`, `amount`, `invoice_id`, `reference_number`.
pub fn read_record_entries<R: Read>(reader: R) -> ReconResult<Vec<RecordEntry>> {
    map_rows(reader, |row| {
        Ok(RecordEntry::new(
            Uuid::new_v4().to_string(),
            row.date("date")?,
            row.field("vendor")?.to_string(),
            row.amount("amount")?,
            row.field("invoice_id")?.to_string(),
            row.field("reference_number")?.to_string(),
        ))
    })
}

/// Parse a monetary amount, tolerating currency symbols, thousands separators,
/// and accounting-style parentheses for negatives.
pub fn parse_amount(raw: &str) -> Option<BigDecimal> {
    let cleaned = raw.replace(['$', ','], "");
    let cleaned = cleaned.trim();

    if let Some(inner) = cleaned.strip_prefix('(').and_then(|v| v.strip_suffix(')')) {
        return inner.trim().parse::<BigDecimal>().ok().map(|amount| -amount);
    }

    cleaned.parse().ok()
}

/// Parse a calendar date, accepting ISO `YYYY-MM-DD` and US `M/D/YYYY`
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
        .ok()
}

fn map_rows<R, T, F>(reader: R, mut build: F) -> ReconResult<Vec<T>>
where
    R: Read,
    F: FnMut(&Row<'_>) -> ReconResult<T>,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|e| ReconError::Validation(format!("Unreadable CSV header: {e}")))?
        .clone();

    let mut entries = Vec::new();
    for (index, row) in csv_reader.records().enumerate() {
        // Header occupies line 1; data starts on line 2
        let line = index + 2;
        let row = row.map_err(|e| ReconError::Validation(format!("Row {line}: {e}")))?;
        entries.push(build(&Row {
            headers: &headers,
            values: &row,
            line,
        })?);
    }

    Ok(entries)
}

/// One data row paired with the header, for named column access
struct Row<'a> {
    headers: &'a csv::StringRecord,
    values: &'a csv::StringRecord,
    line: usize,
}

impl Row<'_> {
    fn field(&self, name: &str) -> ReconResult<&str> {
        self.headers
            .iter()
            .position(|header| header == name)
            .and_then(|index| self.values.get(index))
            .ok_or_else(|| {
                ReconError::Validation(format!("Row {}: missing required column '{name}'", self.line))
            })
    }

    fn date(&self, name: &str) -> ReconResult<NaiveDate> {
        let raw = self.field(name)?;
        parse_date(raw).ok_or_else(|| {
            ReconError::Validation(format!("Row {}: unparseable date '{raw}'", self.line))
        })
    }

    fn amount(&self, name: &str) -> ReconResult<BigDecimal> {
        let raw = self.field(name)?;
        parse_amount(raw).ok_or_else(|| {
            ReconError::Validation(format!("Row {}: non-numeric amount '{raw}'", self.line))
        })
    }
}
