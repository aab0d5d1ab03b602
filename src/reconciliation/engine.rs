//! Two-pass reconciliation engine
//!
//! Pass 1 pairs entries whose reference numbers agree exactly. Pass 2 pairs the
//! leftovers by fuzzy description similarity and date proximity. Either pass
//! classifies a pair as matched or amount-mismatched by the same inclusive
//! amount tolerance, and every pairing consumes both entries: the result is a
//! bipartite matching, never a multi-map.

use crate::reconciliation::similarity::similarity;
use crate::types::*;
use crate::utils::validate_tolerances;

/// Weight of description similarity in the fuzzy candidate score
const DESCRIPTION_WEIGHT: f64 = 0.7;
/// Weight of date proximity in the fuzzy candidate score
const DATE_WEIGHT: f64 = 0.3;

/// Reconciliation engine carrying a validated tolerance configuration.
///
/// Matching is greedy and order-dependent: within a pass, bank entries are
/// processed in input order, and when several record entries qualify equally
/// (duplicate reference numbers in pass 1, tied scores in pass 2) the first
/// unconsumed one in input order wins. Callers with legitimately duplicated
/// reference numbers should be aware that which duplicate pairs up is decided
/// by input order alone.
pub struct ReconciliationEngine {
    tolerances: ToleranceConfig,
}

impl ReconciliationEngine {
    /// Create an engine from a tolerance configuration.
    ///
    /// Fails with [`ReconError::Validation`] when the configuration is out of
    /// bounds; an invalid configuration never reaches the matching passes.
    pub fn new(tolerances: ToleranceConfig) -> ReconResult<Self> {
        validate_tolerances(&tolerances)?;
        Ok(Self { tolerances })
    }

    /// The configuration this engine was built with
    pub fn tolerances(&self) -> &ToleranceConfig {
        &self.tolerances
    }

    /// Run both matching passes and partition the inputs.
    ///
    /// Total over valid inputs: leftovers on either side are the expected
    /// terminal state, not a failure. The inputs are never mutated; consumed
    /// entries are tracked through per-side flag vectors.
    pub fn reconcile(
        &self,
        bank_entries: &[BankEntry],
        record_entries: &[RecordEntry],
    ) -> ReconciliationResult {
        let mut bank_consumed = vec![false; bank_entries.len()];
        let mut record_consumed = vec![false; record_entries.len()];
        let mut result = ReconciliationResult::default();

        // Pass 1: exact reference number correspondence. A reference hit
        // always consumes both entries, whether or not the amounts agree.
        for (bank_idx, bank_entry) in bank_entries.iter().enumerate() {
            let hit = record_entries
                .iter()
                .enumerate()
                .find(|(record_idx, record)| {
                    !record_consumed[*record_idx]
                        && record.reference_number == bank_entry.reference_number
                });

            if let Some((record_idx, record)) = hit {
                bank_consumed[bank_idx] = true;
                record_consumed[record_idx] = true;
                self.classify(bank_entry, record, &mut result);
            }
        }

        // Pass 2: fuzzy correspondence for the leftovers
        for (bank_idx, bank_entry) in bank_entries.iter().enumerate() {
            if bank_consumed[bank_idx] {
                continue;
            }

            let mut best: Option<(usize, f64)> = None;
            for (record_idx, record) in record_entries.iter().enumerate() {
                if record_consumed[record_idx] {
                    continue;
                }
                if let Some(score) = self.fuzzy_score(bank_entry, record) {
                    // Strictly-greater keeps the first of tied candidates
                    match best {
                        Some((_, best_score)) if score <= best_score => {}
                        _ => best = Some((record_idx, score)),
                    }
                }
            }

            if let Some((record_idx, _)) = best {
                bank_consumed[bank_idx] = true;
                record_consumed[record_idx] = true;
                self.classify(bank_entry, &record_entries[record_idx], &mut result);
            }
        }

        result.unmatched_bank = bank_entries
            .iter()
            .enumerate()
            .filter(|(idx, _)| !bank_consumed[*idx])
            .map(|(_, entry)| entry.clone())
            .collect();
        result.unmatched_record = record_entries
            .iter()
            .enumerate()
            .filter(|(idx, _)| !record_consumed[*idx])
            .map(|(_, entry)| entry.clone())
            .collect();

        result
    }

    /// Weighted fuzzy score for a candidate pair, or `None` when the pair is
    /// outside the date window or below the similarity threshold.
    fn fuzzy_score(&self, bank_entry: &BankEntry, record: &RecordEntry) -> Option<f64> {
        let date_diff_days = (bank_entry.date - record.date).num_days().abs();
        if date_diff_days > self.tolerances.date_tolerance_days {
            return None;
        }

        let desc_sim = similarity(&bank_entry.description, &record.vendor);
        if desc_sim < self.tolerances.fuzzy_match_threshold / 100.0 {
            return None;
        }

        let date_score = (self.tolerances.date_tolerance_days - date_diff_days) as f64
            / self.tolerances.date_tolerance_days as f64;
        Some(DESCRIPTION_WEIGHT * desc_sim + DATE_WEIGHT * date_score)
    }

    /// Classify a consumed pair by the inclusive amount tolerance
    fn classify(
        &self,
        bank_entry: &BankEntry,
        record: &RecordEntry,
        result: &mut ReconciliationResult,
    ) {
        let amount_difference = &bank_entry.amount - &record.amount;
        if amount_difference.abs() <= self.tolerances.amount_tolerance {
            result.matched.push(MatchedPair {
                bank: bank_entry.clone(),
                record: record.clone(),
            });
        } else {
            result.mismatched.push(MismatchedPair {
                bank: bank_entry.clone(),
                record: record.clone(),
                amount_difference,
            });
        }
    }
}

/// Reconcile two entry collections in one call.
///
/// Convenience wrapper that validates the tolerances and runs
/// [`ReconciliationEngine::reconcile`].
pub fn reconcile(
    bank_entries: &[BankEntry],
    record_entries: &[RecordEntry],
    tolerances: &ToleranceConfig,
) -> ReconResult<ReconciliationResult> {
    let engine = ReconciliationEngine::new(tolerances.clone())?;
    Ok(engine.reconcile(bank_entries, record_entries))
}
