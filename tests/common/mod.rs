//! Common test infrastructure
//!
//! Integration tests should only import from this module, not from internal
//! submodules.

mod constants;
mod fixtures;

pub use constants::*;
pub use fixtures::{seed_reference_stock, TestLedger};
