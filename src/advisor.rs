//! Suggestion advisor boundary for unmatched entries
//!
//! An external text-generation collaborator is asked to explain why an entry
//! stayed unmatched and what to do about it. The collaborator is injected
//! through the [`SuggestionAdvisor`] trait; construction, credentials, and
//! transport live entirely outside this crate. Its output is advisory only and
//! never feeds back into the reconciliation result. Any failure at this
//! boundary degrades to a fixed fallback suggestion instead of an error.

use std::fmt::Write;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::types::*;

/// Multiplier applied to the amount and date tolerances when scanning for
/// prompt candidates. The loose scan exists purely to give the advisor
/// context; it has no bearing on the authoritative result.
const LOOSE_TOLERANCE_FACTOR: i64 = 5;
/// At most this many candidates are included in a prompt
const MAX_PROMPT_CANDIDATES: usize = 5;

/// External text-generation collaborator.
///
/// Implementations wrap whatever backend produces the explanation (an LLM API,
/// a rule engine, a canned responder in tests). The single capability takes a
/// fully built prompt and returns the raw response text.
#[async_trait]
pub trait SuggestionAdvisor: Send + Sync {
    async fn advise(&self, prompt: &str) -> ReconResult<String>;
}

/// Human-readable explanation for one unmatched entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// What the advisor concluded about the entry
    pub analysis: String,
    /// Recommended corrective action
    pub suggestion: String,
}

impl Suggestion {
    /// Fixed pair returned whenever the advisor fails or replies with
    /// something unparseable
    pub fn fallback() -> Self {
        Self {
            analysis: "Could not automatically analyze the transaction.".to_string(),
            suggestion: "The advisor response was not in the expected format. \
                         Please manually review the transaction and potential matches."
                .to_string(),
        }
    }
}

/// Builds prompts, calls the injected advisor, and absorbs its failures
pub struct SuggestionService<A: SuggestionAdvisor> {
    advisor: A,
    tolerances: ToleranceConfig,
}

impl<A: SuggestionAdvisor> SuggestionService<A> {
    pub fn new(advisor: A, tolerances: ToleranceConfig) -> Self {
        Self {
            advisor,
            tolerances,
        }
    }

    /// Explain an unmatched bank transaction against the full record collection
    pub async fn suggest_for_bank(
        &self,
        entry: &BankEntry,
        records: &[RecordEntry],
    ) -> Suggestion {
        let candidates = self.loose_record_candidates(entry, records);
        let details = format!(
            "- Date: {}\n- Description: {}\n- Amount: {}\n- Reference: {}",
            entry.date, entry.description, entry.amount, entry.reference_number
        );
        let candidate_lines: Vec<String> = candidates
            .iter()
            .map(|record| {
                format!(
                    "- Date: {}, Vendor: {}, Amount: {}, Invoice ID: {}",
                    record.date, record.vendor, record.amount, record.invoice_id
                )
            })
            .collect();
        let prompt = build_prompt("Bank Statement", "Internal Records", &details, &candidate_lines);
        self.run(&prompt).await
    }

    /// Explain an unmatched financial record against the full bank collection
    pub async fn suggest_for_record(
        &self,
        entry: &RecordEntry,
        bank_entries: &[BankEntry],
    ) -> Suggestion {
        let candidates = self.loose_bank_candidates(entry, bank_entries);
        let details = format!(
            "- Date: {}\n- Vendor: {}\n- Amount: {}\n- Invoice ID: {}",
            entry.date, entry.vendor, entry.amount, entry.invoice_id
        );
        let candidate_lines: Vec<String> = candidates
            .iter()
            .map(|bank| {
                format!(
                    "- Date: {}, Description: {}, Amount: {}, Reference: {}",
                    bank.date, bank.description, bank.amount, bank.reference_number
                )
            })
            .collect();
        let prompt = build_prompt("Internal Records", "Bank Statement", &details, &candidate_lines);
        self.run(&prompt).await
    }

    async fn run(&self, prompt: &str) -> Suggestion {
        match self.advisor.advise(prompt).await {
            Ok(raw) => parse_suggestion(&raw).unwrap_or_else(Suggestion::fallback),
            Err(_) => Suggestion::fallback(),
        }
    }

    fn loose_record_candidates<'a>(
        &self,
        entry: &BankEntry,
        records: &'a [RecordEntry],
    ) -> Vec<&'a RecordEntry> {
        let amount_cap = &self.tolerances.amount_tolerance * BigDecimal::from(LOOSE_TOLERANCE_FACTOR);
        let date_cap = self.tolerances.date_tolerance_days * LOOSE_TOLERANCE_FACTOR;

        records
            .iter()
            .filter(|record| {
                (entry.date - record.date).num_days().abs() <= date_cap
                    && (&entry.amount - &record.amount).abs() <= amount_cap
            })
            .take(MAX_PROMPT_CANDIDATES)
            .collect()
    }

    fn loose_bank_candidates<'a>(
        &self,
        entry: &RecordEntry,
        bank_entries: &'a [BankEntry],
    ) -> Vec<&'a BankEntry> {
        let amount_cap = &self.tolerances.amount_tolerance * BigDecimal::from(LOOSE_TOLERANCE_FACTOR);
        let date_cap = self.tolerances.date_tolerance_days * LOOSE_TOLERANCE_FACTOR;

        bank_entries
            .iter()
            .filter(|bank| {
                (entry.date - bank.date).num_days().abs() <= date_cap
                    && (&entry.amount - &bank.amount).abs() <= amount_cap
            })
            .take(MAX_PROMPT_CANDIDATES)
            .collect()
    }
}

fn build_prompt(
    unmatched_source: &str,
    candidate_source: &str,
    unmatched_details: &str,
    candidate_lines: &[String],
) -> String {
    let candidates = if candidate_lines.is_empty() {
        "No potential matches found in the other list based on a loose search.".to_string()
    } else {
        candidate_lines.join("\n")
    };

    let mut prompt = String::new();
    let _ = write!(
        prompt,
        "You are an expert financial reconciliation analyst.\n\
         Analyze the following unmatched transaction and compare it against a list \
         of potential matches from the other financial document.\n\n\
         **Unmatched Transaction (from {unmatched_source}):**\n{unmatched_details}\n\n\
         **Potential Matching Transactions (from {candidate_source}):**\n{candidates}\n\n\
         Based on this data, please provide a concise analysis and suggest a \
         corrective action.\n\
         Your entire response MUST be a single, valid JSON object with two keys: \
         \"analysis\" and \"suggestion\".\n\
         Do not include any other text, explanations, or markdown fences."
    );
    prompt
}

/// Parse the advisor's raw reply into a [`Suggestion`], tolerating markdown
/// code fences some backends wrap around JSON despite instructions
fn parse_suggestion(raw: &str) -> Option<Suggestion> {
    serde_json::from_str(strip_code_fences(raw)).ok()
}

fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    match rest.split_once('\n') {
        // Opening fence carries an optional language tag on its own line
        Some((tag, body)) if tag.trim().chars().all(|c| c.is_ascii_alphanumeric()) => body.trim(),
        _ => rest.trim(),
    }
}
