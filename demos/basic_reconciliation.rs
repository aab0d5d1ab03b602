//! Basic reconciliation example
//!
//! Run with: cargo run --example basic_reconciliation

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use recon_core::{reconcile, BankEntry, RecordEntry, ToleranceConfig};

fn main() {
    let bank = vec![
        BankEntry::new(
            "b1".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "Acme Corp".to_string(),
            BigDecimal::from(100),
            "R1".to_string(),
        ),
        BankEntry::new(
            "b2".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            "Globex Payment".to_string(),
            BigDecimal::from(1250),
            "R2".to_string(),
        ),
        BankEntry::new(
            "b3".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            "Unknown wire".to_string(),
            BigDecimal::from(9000),
            "W9".to_string(),
        ),
    ];

    let records = vec![
        RecordEntry::new(
            "r1".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "Acme Corp".to_string(),
            BigDecimal::from(100),
            "INV-1".to_string(),
            "R1".to_string(),
        ),
        RecordEntry::new(
            "r2".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            "Globex".to_string(),
            BigDecimal::from(1400),
            "INV-2".to_string(),
            "R2".to_string(),
        ),
    ];

    let result = reconcile(&bank, &records, &ToleranceConfig::default()).unwrap();
    let summary = result.summary();

    println!("Matched:          {}", summary.matched);
    println!("Amount mismatch:  {}", summary.mismatched);
    println!("Unmatched (bank): {}", summary.unmatched_bank);
    println!("Unmatched (rec):  {}", summary.unmatched_record);

    for pair in &result.matched {
        println!(
            "  matched: {} <-> {} ({})",
            pair.bank.description, pair.record.vendor, pair.bank.amount
        );
    }
    for pair in &result.mismatched {
        println!(
            "  mismatch: {} <-> {} (difference {})",
            pair.bank.description, pair.record.vendor, pair.amount_difference
        );
    }
    for entry in &result.unmatched_bank {
        println!("  unmatched bank: {} ({})", entry.description, entry.amount);
    }
}
