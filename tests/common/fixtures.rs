//! Test fixture creation for ledger databases

use super::constants::*;
use std::path::PathBuf;
use stock_ledger::{SqliteStockLedger, StockLedger};
use tempfile::TempDir;

/// A freshly initialized ledger in its own temporary directory.
pub struct TestLedger {
    pub ledger: SqliteStockLedger,
    pub db_path: PathBuf,
    _temp_dir: TempDir, // Keep temp dir alive
}

impl TestLedger {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("abap.db");
        let ledger = SqliteStockLedger::new(&db_path);
        ledger.init_db(true).unwrap();
        Self {
            ledger,
            db_path,
            _temp_dir: temp_dir,
        }
    }

    /// Another handle on the same database file.
    pub fn reopen(&self) -> SqliteStockLedger {
        SqliteStockLedger::new(&self.db_path)
    }
}

/// Seeds the reference stock:
///
/// | brand  | country | product | warehouse | quantity |
/// |--------|---------|---------|-----------|----------|
/// | Toyota | Japan   | Engine  | Moscow    | 100      |
/// | Toyota | Japan   | Engine  | Krasnodar | null     |
/// | Toyota | Japan   | Oil     | Moscow    | 200      |
/// | Tesla  | USA     | Engine  | Moscow    | null     |
/// | Tesla  | USA     | Oil     | Krasnodar | 300      |
/// | Lada   | Russia  | Engine  | Krasnodar | null     |
pub fn seed_reference_stock(ledger: &dyn StockLedger) {
    let rows: &[(&str, &str, &str, &str, i64)] = &[
        (TOYOTA, JAPAN, ENGINE, MOSCOW, 100),
        (TOYOTA, JAPAN, ENGINE, KRASNODAR, 0),
        (TOYOTA, JAPAN, OIL, MOSCOW, 200),
        (TESLA, USA, ENGINE, MOSCOW, 0),
        (TESLA, USA, OIL, KRASNODAR, 100),
        (TESLA, USA, OIL, KRASNODAR, 200),
        (LADA, RUSSIA, ENGINE, KRASNODAR, 0),
    ];
    for (brand, country, product, warehouse, quantity) in rows {
        ledger
            .add_record(brand, country, product, warehouse, *quantity)
            .unwrap();
    }
}
