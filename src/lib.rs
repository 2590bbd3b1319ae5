//! Stock Ledger Library
//!
//! Tracks brands, products, warehouses and stock quantities in a single
//! SQLite file and reports on them.

pub mod config;
pub mod demo_data;
pub mod ledger;
pub mod sqlite_persistence;

// Re-export commonly used types for convenience
pub use ledger::{LedgerError, SqliteStockLedger, StockLedger};
