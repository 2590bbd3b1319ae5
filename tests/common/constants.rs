//! Shared constants for end-to-end tests
//!
//! When the reference stock changes, update only this file and
//! `fixtures::seed_reference_stock`.

// ============================================================================
// Warehouses
// ============================================================================

pub const MOSCOW: &str = "Moscow";
pub const KRASNODAR: &str = "Krasnodar";

// ============================================================================
// Brands
// ============================================================================

pub const TOYOTA: &str = "Toyota";
pub const TESLA: &str = "Tesla";
pub const LADA: &str = "Lada";

pub const JAPAN: &str = "Japan";
pub const USA: &str = "USA";
pub const RUSSIA: &str = "Russia";

// ============================================================================
// Products
// ============================================================================

pub const ENGINE: &str = "Engine";
pub const OIL: &str = "Oil";
