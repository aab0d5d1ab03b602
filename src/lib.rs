//! # Recon Core
//!
//! A bank reconciliation library that pairs bank statement transactions with
//! internal financial records, classifying every entry as matched, amount
//! mismatched, or unmatched on one side.
//!
//! ## Features
//!
//! - **Two-pass matching**: exact reference-number correspondence first, then
//!   fuzzy linkage of the leftovers by description similarity and date proximity
//! - **Tolerance-driven classification**: configurable amount, date, and
//!   text-similarity tolerances with validation up front
//! - **Complete partitions**: every input entry lands in exactly one result
//!   bucket; no entry is ever paired twice
//! - **CSV boundary**: header-keyed ingestion with type coercion and
//!   follow-up export of everything left unreconciled
//! - **Pluggable suggestion advisor**: trait-based boundary for external
//!   text-generation backends, with graceful fallback on any failure
//!
//! ## Quick Start
//!
//! ```rust
//! use recon_core::{reconcile, BankEntry, RecordEntry, ToleranceConfig};
//! use bigdecimal::BigDecimal;
//! use chrono::NaiveDate;
//!
//! let bank = vec![BankEntry::new(
//!     "b1".to_string(),
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     "Acme Corp".to_string(),
//!     BigDecimal::from(100),
//!     "R1".to_string(),
//! )];
//! let records = vec![RecordEntry::new(
//!     "r1".to_string(),
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     "Acme Corp".to_string(),
//!     BigDecimal::from(100),
//!     "I1".to_string(),
//!     "R1".to_string(),
//! )];
//!
//! let result = reconcile(&bank, &records, &ToleranceConfig::default()).unwrap();
//! assert_eq!(result.matched.len(), 1);
//! assert!(result.is_fully_reconciled());
//! ```

pub mod advisor;
pub mod io;
pub mod reconciliation;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use advisor::*;
pub use reconciliation::*;
pub use types::*;
