//! Integration tests for recon-core

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use recon_core::io::{read_bank_entries, read_record_entries, unmatched_csv_string};
use recon_core::{
    ReconError, ReconResult, ReconciliationEngine, Suggestion, SuggestionAdvisor,
    SuggestionService, ToleranceConfig,
};

const BANK_CSV: &str = "\
date,description,amount,reference_number
2024-01-01,Acme Corp,100.00,R1
2024-01-02,Globex Payment,\"$1,250.00\",R2
2024-01-03,Initech Services,400.00,
2024-01-04,Unexplained wire,9000.00,W9
";

const RECORD_CSV: &str = "\
date,vendor,amount,invoice_id,reference_number
2024-01-01,Acme Corp,100.00,INV-1,R1
2024-01-02,Globex,1400.00,INV-2,R2
2024-01-04,Initech Services Ltd,400.00,INV-3,
2024-02-20,Hooli,75.00,INV-4,H1
";

fn workflow_tolerances() -> ToleranceConfig {
    ToleranceConfig {
        amount_tolerance: BigDecimal::from(50),
        date_tolerance_days: 2,
        fuzzy_match_threshold: 70.0,
    }
}

#[test]
fn test_csv_to_reconciliation_workflow() {
    let bank = read_bank_entries(BANK_CSV.as_bytes()).unwrap();
    let records = read_record_entries(RECORD_CSV.as_bytes()).unwrap();
    assert_eq!(bank.len(), 4);
    assert_eq!(records.len(), 4);

    let engine = ReconciliationEngine::new(workflow_tolerances()).unwrap();
    let result = engine.reconcile(&bank, &records);
    let summary = result.summary();

    // R1 agrees on reference and amount.
    // R2 agrees on reference but the amounts are 150 apart.
    // The two Initech rows share an empty reference, so pass 1 pairs them;
    // amounts agree, so they land in matched.
    // The wire and the Hooli invoice correspond to nothing.
    assert_eq!(summary.matched, 2);
    assert_eq!(summary.mismatched, 1);
    assert_eq!(summary.unmatched_bank, 1);
    assert_eq!(summary.unmatched_record, 1);

    assert_eq!(result.mismatched[0].amount_difference, "-150.00".parse::<BigDecimal>().unwrap());
    assert_eq!(result.unmatched_bank[0].description, "Unexplained wire");
    assert_eq!(result.unmatched_record[0].vendor, "Hooli");

    // Partition completeness on both sides
    assert_eq!(summary.matched + summary.mismatched + summary.unmatched_bank, bank.len());
    assert_eq!(
        summary.matched + summary.mismatched + summary.unmatched_record,
        records.len()
    );

    // Export carries one row per unmatched entry and two per mismatch
    let csv_text = unmatched_csv_string(&result).unwrap();
    assert_eq!(csv_text.lines().count(), 1 + 4);
    assert!(csv_text.contains("Bank Statement,2024-01-04,Unexplained wire,9000.00,W9"));
    assert!(csv_text.contains("Financial Records,2024-02-20,Hooli,75.00,INV-4"));
    assert!(csv_text.contains("Mismatch (Bank)"));
    assert!(csv_text.contains("Mismatch (Record)"));
}

#[test]
fn test_malformed_csv_aborts_before_reconciliation() {
    let bad_bank = "\
date,description,amount,reference_number
2024-13-45,Acme Corp,100.00,R1
";
    let err = read_bank_entries(bad_bank.as_bytes()).unwrap_err();
    assert!(matches!(err, ReconError::Validation(_)));
}

struct ScriptedAdvisor;

#[async_trait]
impl SuggestionAdvisor for ScriptedAdvisor {
    async fn advise(&self, prompt: &str) -> ReconResult<String> {
        // The advisor sees candidate context for the unmatched wire
        assert!(prompt.contains("Unexplained wire"));
        Ok(r#"{"analysis": "No record within loose tolerances.", "suggestion": "Check for a missing invoice."}"#.to_string())
    }
}

#[tokio::test]
async fn test_advisor_workflow_over_unmatched_entries() {
    let bank = read_bank_entries(BANK_CSV.as_bytes()).unwrap();
    let records = read_record_entries(RECORD_CSV.as_bytes()).unwrap();
    let engine = ReconciliationEngine::new(workflow_tolerances()).unwrap();
    let result = engine.reconcile(&bank, &records);

    let service = SuggestionService::new(ScriptedAdvisor, workflow_tolerances());
    let suggestion = service
        .suggest_for_bank(&result.unmatched_bank[0], &records)
        .await;

    assert_eq!(suggestion.analysis, "No record within loose tolerances.");
    assert_eq!(suggestion.suggestion, "Check for a missing invoice.");
}

struct UnreachableAdvisor;

#[async_trait]
impl SuggestionAdvisor for UnreachableAdvisor {
    async fn advise(&self, _prompt: &str) -> ReconResult<String> {
        Err(ReconError::Advisor("connection refused".to_string()))
    }
}

#[tokio::test]
async fn test_advisor_outage_never_surfaces() {
    let bank = read_bank_entries(BANK_CSV.as_bytes()).unwrap();
    let records = read_record_entries(RECORD_CSV.as_bytes()).unwrap();
    let engine = ReconciliationEngine::new(workflow_tolerances()).unwrap();
    let result = engine.reconcile(&bank, &records);

    let service = SuggestionService::new(UnreachableAdvisor, workflow_tolerances());
    let suggestion = service
        .suggest_for_record(&result.unmatched_record[0], &bank)
        .await;

    assert_eq!(suggestion, Suggestion::fallback());
}
