//! Validation utilities

use bigdecimal::BigDecimal;

use crate::types::*;

/// Validate a tolerance configuration before reconciliation runs
pub fn validate_tolerances(tolerances: &ToleranceConfig) -> ReconResult<()> {
    if tolerances.amount_tolerance < BigDecimal::from(0) {
        return Err(ReconError::Validation(
            "Amount tolerance cannot be negative".to_string(),
        ));
    }

    if tolerances.date_tolerance_days <= 0 {
        return Err(ReconError::Validation(
            "Date tolerance must be at least one day".to_string(),
        ));
    }

    if !(0.0..=100.0).contains(&tolerances.fuzzy_match_threshold) {
        return Err(ReconError::Validation(
            "Fuzzy match threshold must be between 0 and 100".to_string(),
        ));
    }

    Ok(())
}
