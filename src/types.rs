//! Core types and data structures for the reconciliation system

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single transaction as it appears on a bank statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankEntry {
    /// Unique identifier, assigned by the caller at ingestion
    pub id: String,
    /// Date the transaction posted
    pub date: NaiveDate,
    /// Free-text description from the statement
    pub description: String,
    /// Transaction amount
    pub amount: BigDecimal,
    /// Identifier expected to match the internal record exactly, when present
    pub reference_number: String,
}

impl BankEntry {
    /// Create a new bank entry
    pub fn new(
        id: String,
        date: NaiveDate,
        description: String,
        amount: BigDecimal,
        reference_number: String,
    ) -> Self {
        Self {
            id,
            date,
            description,
            amount,
            reference_number,
        }
    }
}

/// A single row from the internal financial records (ledger, invoicing system, etc.)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordEntry {
    /// Unique identifier, assigned by the caller at ingestion
    pub id: String,
    /// Date the record was booked
    pub date: NaiveDate,
    /// Vendor or counterparty name
    pub vendor: String,
    /// Recorded amount
    pub amount: BigDecimal,
    /// Invoice identifier from the internal system
    pub invoice_id: String,
    /// Identifier expected to match the bank transaction exactly, when present
    pub reference_number: String,
}

impl RecordEntry {
    /// Create a new financial record entry
    pub fn new(
        id: String,
        date: NaiveDate,
        vendor: String,
        amount: BigDecimal,
        invoice_id: String,
        reference_number: String,
    ) -> Self {
        Self {
            id,
            date,
            vendor,
            amount,
            invoice_id,
            reference_number,
        }
    }
}

/// Caller-configured slack allowed before two entries are deemed non-corresponding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToleranceConfig {
    /// Maximum absolute amount difference still classified as a match (inclusive)
    pub amount_tolerance: BigDecimal,
    /// Maximum date distance, in whole days, considered for fuzzy matching.
    /// Must be positive: the fuzzy date score divides by it.
    pub date_tolerance_days: i64,
    /// Minimum description similarity for fuzzy matching, as a percentage in [0, 100]
    pub fuzzy_match_threshold: f64,
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            amount_tolerance: BigDecimal::from(50),
            date_tolerance_days: 1,
            fuzzy_match_threshold: 90.0,
        }
    }
}

impl ToleranceConfig {
    /// Validate the configuration bounds
    pub fn validate(&self) -> ReconResult<()> {
        crate::utils::validate_tolerances(self)
    }
}

/// A bank transaction and a financial record identified as the same payment,
/// with amounts within tolerance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedPair {
    pub bank: BankEntry,
    pub record: RecordEntry,
}

/// A bank transaction and a financial record identified as the same payment,
/// but with amounts further apart than the configured tolerance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MismatchedPair {
    pub bank: BankEntry,
    pub record: RecordEntry,
    /// Signed difference, bank amount minus record amount
    pub amount_difference: BigDecimal,
}

/// Complete outcome of a reconciliation run.
///
/// Every input bank entry lands in exactly one of `matched`, `mismatched`, or
/// `unmatched_bank`; every input record entry in exactly one of `matched`,
/// `mismatched`, or `unmatched_record`. No entry is paired more than once.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReconciliationResult {
    /// Pairs whose amounts agree within tolerance
    pub matched: Vec<MatchedPair>,
    /// Pairs identified as the same payment but with diverging amounts
    pub mismatched: Vec<MismatchedPair>,
    /// Bank transactions with no corresponding financial record
    pub unmatched_bank: Vec<BankEntry>,
    /// Financial records with no corresponding bank transaction
    pub unmatched_record: Vec<RecordEntry>,
}

impl ReconciliationResult {
    /// Per-bucket counts for reporting
    pub fn summary(&self) -> ReconciliationSummary {
        ReconciliationSummary {
            matched: self.matched.len(),
            mismatched: self.mismatched.len(),
            unmatched_bank: self.unmatched_bank.len(),
            unmatched_record: self.unmatched_record.len(),
        }
    }

    /// True when every entry on both sides was matched within tolerance
    pub fn is_fully_reconciled(&self) -> bool {
        self.mismatched.is_empty()
            && self.unmatched_bank.is_empty()
            && self.unmatched_record.is_empty()
    }
}

/// Bucket counts from a reconciliation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationSummary {
    pub matched: usize,
    pub mismatched: usize,
    pub unmatched_bank: usize,
    pub unmatched_record: usize,
}

/// Errors that can occur in the reconciliation system
#[derive(Debug, thiserror::Error)]
pub enum ReconError {
    /// Malformed input row or tolerance configuration; aborts the run
    #[error("Validation error: {0}")]
    Validation(String),
    /// The suggestion advisor was unreachable or returned unusable output.
    /// Absorbed at the advisor boundary, never surfaced from reconciliation.
    #[error("Advisor error: {0}")]
    Advisor(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for reconciliation operations
pub type ReconResult<T> = Result<T, ReconError>;
