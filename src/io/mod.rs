//! CSV ingestion and export at the engine boundary

pub mod export;
pub mod import;

pub use export::*;
pub use import::*;
