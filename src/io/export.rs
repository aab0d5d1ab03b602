//! CSV export of unmatched and mismatched entries
//!
//! Serializes everything that needs human follow-up after a run: bank
//! transactions with no record, records with no bank transaction, and both
//! sides of every amount mismatch. Free-text fields are quoted by the CSV
//! writer, so embedded separators survive a round trip.

use std::io::Write;

use serde::Serialize;

use crate::types::*;

/// Source tag for unmatched bank transactions
const SOURCE_BANK: &str = "Bank Statement";
/// Source tag for unmatched financial records
const SOURCE_RECORD: &str = "Financial Records";
/// Source tags for the two sides of an amount mismatch
const SOURCE_MISMATCH_BANK: &str = "Mismatch (Bank)";
const SOURCE_MISMATCH_RECORD: &str = "Mismatch (Record)";

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    source: &'a str,
    date: String,
    description_or_vendor: &'a str,
    amount: String,
    reference_or_invoice_id: &'a str,
}

impl<'a> ExportRow<'a> {
    fn from_bank(source: &'a str, entry: &'a BankEntry) -> Self {
        Self {
            source,
            date: entry.date.to_string(),
            description_or_vendor: &entry.description,
            amount: entry.amount.to_string(),
            reference_or_invoice_id: &entry.reference_number,
        }
    }

    fn from_record(source: &'a str, entry: &'a RecordEntry) -> Self {
        Self {
            source,
            date: entry.date.to_string(),
            description_or_vendor: &entry.vendor,
            amount: entry.amount.to_string(),
            reference_or_invoice_id: &entry.invoice_id,
        }
    }
}

/// Write every entry needing follow-up to `writer` as CSV.
///
/// Returns the number of data rows written. An entirely reconciled result
/// produces a header-only document and a count of zero.
pub fn write_unmatched_csv<W: Write>(
    result: &ReconciliationResult,
    writer: W,
) -> ReconResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut rows = 0;

    for entry in &result.unmatched_bank {
        csv_writer.serialize(ExportRow::from_bank(SOURCE_BANK, entry))?;
        rows += 1;
    }
    for entry in &result.unmatched_record {
        csv_writer.serialize(ExportRow::from_record(SOURCE_RECORD, entry))?;
        rows += 1;
    }
    for pair in &result.mismatched {
        csv_writer.serialize(ExportRow::from_bank(SOURCE_MISMATCH_BANK, &pair.bank))?;
        csv_writer.serialize(ExportRow::from_record(SOURCE_MISMATCH_RECORD, &pair.record))?;
        rows += 2;
    }

    csv_writer.flush()?;
    Ok(rows)
}

/// Convenience wrapper returning the CSV document as a string
pub fn unmatched_csv_string(result: &ReconciliationResult) -> ReconResult<String> {
    let mut buffer = Vec::new();
    write_unmatched_csv(result, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| ReconError::Validation(format!("Exported CSV was not UTF-8: {e}")))
}
