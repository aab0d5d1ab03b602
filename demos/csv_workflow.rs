//! End-to-end CSV workflow: ingest both sides, reconcile, export the leftovers
//!
//! Run with: cargo run --example csv_workflow

use recon_core::io::{read_bank_entries, read_record_entries, unmatched_csv_string};
use recon_core::{ReconResult, ReconciliationEngine, ToleranceConfig};

const BANK_CSV: &str = "\
date,description,amount,reference_number
2024-01-01,Acme Corp,100.00,R1
2024-01-02,Globex Payment,\"$1,250.00\",R2
2024-01-04,Unexplained wire,9000.00,W9
";

const RECORD_CSV: &str = "\
date,vendor,amount,invoice_id,reference_number
2024-01-01,Acme Corp,100.00,INV-1,R1
2024-01-02,Globex,1400.00,INV-2,R2
2024-02-20,Hooli,75.00,INV-4,H1
";

fn main() -> ReconResult<()> {
    let bank = read_bank_entries(BANK_CSV.as_bytes())?;
    let records = read_record_entries(RECORD_CSV.as_bytes())?;

    let engine = ReconciliationEngine::new(ToleranceConfig::default())?;
    let result = engine.reconcile(&bank, &records);

    let summary = result.summary();
    println!(
        "{} matched, {} mismatched, {} + {} unmatched",
        summary.matched, summary.mismatched, summary.unmatched_bank, summary.unmatched_record
    );

    println!("\nFollow-up export:\n{}", unmatched_csv_string(&result)?);
    Ok(())
}
