//! SQLite-backed stock ledger.
//!
//! No connection is kept between calls: each public operation opens the
//! database file, runs inside a single transaction and drops the connection
//! before returning.

use super::error::{LedgerError, LedgerResult};
use super::models::*;
use super::schema::{current_schema, TABLE_BRAND, TABLE_GOODS, TABLE_PRODUCT, TABLE_WAREHOUSE};
use super::StockLedger;
use rusqlite::{params, Connection, OptionalExtension, Transaction, TransactionBehavior};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct SqliteStockLedger {
    db_path: PathBuf,
    busy_timeout: Duration,
}

impl SqliteStockLedger {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Self {
        Self::with_busy_timeout(db_path, DEFAULT_BUSY_TIMEOUT)
    }

    pub fn with_busy_timeout<P: AsRef<Path>>(db_path: P, busy_timeout: Duration) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
            busy_timeout,
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn sqlite_error(&self, err: rusqlite::Error) -> LedgerError {
        LedgerError::from_sqlite(&self.db_path, err)
    }

    fn open(&self) -> LedgerResult<Connection> {
        let conn = Connection::open(&self.db_path).map_err(|source| {
            LedgerError::StoreUnavailable {
                path: self.db_path.clone(),
                source,
            }
        })?;
        conn.busy_timeout(self.busy_timeout)
            .map_err(|e| self.sqlite_error(e))?;
        conn.pragma_update(None, "foreign_keys", true)
            .map_err(|e| self.sqlite_error(e))?;
        Ok(conn)
    }

    /// Runs `work` inside a fresh connection and transaction, committing on
    /// success. The connection is closed on every path; an uncommitted
    /// transaction rolls back when dropped.
    ///
    /// The write lock is taken up front so concurrent writers queue on the
    /// busy timeout instead of failing on lock upgrade.
    fn with_transaction<T>(
        &self,
        work: impl FnOnce(&Transaction<'_>) -> rusqlite::Result<T>,
    ) -> LedgerResult<T> {
        let mut conn = self.open()?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| self.sqlite_error(e))?;
        let result = work(&tx).map_err(|e| self.sqlite_error(e))?;
        tx.commit().map_err(|e| self.sqlite_error(e))?;
        Ok(result)
    }

    fn check_schema_version(&self) -> LedgerResult<()> {
        let conn = self.open()?;
        current_schema()
            .check_version(&conn)
            .map_err(|e| LedgerError::SchemaMismatch(format!("{:#}", e)))
    }

    fn count_rows(tx: &Transaction<'_>, table: &str) -> rusqlite::Result<usize> {
        let count: i64 =
            tx.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })?;
        Ok(count as usize)
    }

    fn row_to_listing(row: &rusqlite::Row) -> rusqlite::Result<StockListingRow> {
        Ok(StockListingRow {
            brand: row.get(0)?,
            product: row.get(1)?,
            quantity: row.get(2)?,
            warehouse: row.get(3)?,
        })
    }

    fn row_to_balance(row: &rusqlite::Row) -> rusqlite::Result<WarehouseBalance> {
        Ok(WarehouseBalance {
            warehouse: row.get(0)?,
            quantity: row.get(1)?,
        })
    }

    fn row_to_brand_product(row: &rusqlite::Row) -> rusqlite::Result<BrandProduct> {
        Ok(BrandProduct {
            brand: row.get(0)?,
            product: row.get(1)?,
        })
    }
}

impl StockLedger for SqliteStockLedger {
    fn init_db(&self, force: bool) -> LedgerResult<()> {
        let schema = current_schema();
        if !force {
            self.check_schema_version()?;
        }
        self.with_transaction(|tx| {
            if force {
                info!("Dropping stock ledger tables at {:?}", self.db_path);
                schema.drop_all(tx)?;
            }
            schema.create_if_missing(tx)
        })?;
        info!(
            "Stock ledger schema version {} ready at {:?}",
            schema.version, self.db_path
        );
        self.validate_schema()
    }

    fn validate_schema(&self) -> LedgerResult<()> {
        self.check_schema_version()?;
        let conn = self.open()?;
        current_schema()
            .validate(&conn)
            .map_err(|e| LedgerError::SchemaMismatch(format!("{:#}", e)))
    }

    fn add_warehouse(&self, name: &str) -> LedgerResult<WarehouseId> {
        let id = self.with_transaction(|tx| {
            tx.query_row(
                "INSERT INTO warehause (name) VALUES (?1)
                 ON CONFLICT(name) DO UPDATE SET name = excluded.name
                 RETURNING id",
                params![name],
                |row| row.get(0),
            )
        })?;
        debug!("Warehouse {:?} -> {}", name, id);
        Ok(WarehouseId(id))
    }

    fn add_brand(&self, name: &str, country: &str) -> LedgerResult<BrandId> {
        let id = self.with_transaction(|tx| {
            tx.query_row(
                "INSERT INTO brand (name, country) VALUES (?1, ?2)
                 ON CONFLICT(name, country) DO UPDATE SET name = excluded.name
                 RETURNING id",
                params![name, country],
                |row| row.get(0),
            )
        })?;
        debug!("Brand {:?} ({:?}) -> {}", name, country, id);
        Ok(BrandId(id))
    }

    fn add_product(&self, name: &str, brand_id: BrandId) -> LedgerResult<ProductId> {
        let id = self.with_transaction(|tx| {
            tx.query_row(
                "INSERT INTO product (name, brandId) VALUES (?1, ?2)
                 ON CONFLICT(name, brandId) DO UPDATE SET name = excluded.name
                 RETURNING id",
                params![name, brand_id.0],
                |row| row.get(0),
            )
        })?;
        debug!("Product {:?} of brand {} -> {}", name, brand_id, id);
        Ok(ProductId(id))
    }

    fn add_goods(
        &self,
        warehouse_id: WarehouseId,
        product_id: ProductId,
        quantity: i64,
    ) -> LedgerResult<Option<i64>> {
        // A stored NULL counts as zero, a zero result is stored as NULL
        let stored = self.with_transaction(|tx| {
            tx.query_row(
                "INSERT INTO goods (warehauseId, productId, quantity)
                 VALUES (?1, ?2, NULLIF(?3, 0))
                 ON CONFLICT(warehauseId, productId)
                 DO UPDATE SET quantity = NULLIF(COALESCE(goods.quantity, 0) + ?3, 0)
                 RETURNING quantity",
                params![warehouse_id.0, product_id.0, quantity],
                |row| row.get::<_, Option<i64>>(0),
            )
        })?;
        debug!(
            "Goods warehouse {} product {} {:+} -> {:?}",
            warehouse_id, product_id, quantity, stored
        );
        Ok(stored)
    }

    fn full_listing(&self) -> LedgerResult<Vec<StockListingRow>> {
        self.with_transaction(|tx| {
            let mut stmt = tx.prepare(
                "SELECT brand.name, product.name, goods.quantity, warehause.name
                 FROM goods
                 JOIN product ON goods.productId = product.id
                 JOIN brand ON product.brandId = brand.id
                 JOIN warehause ON goods.warehauseId = warehause.id
                 ORDER BY brand.name, goods.quantity DESC",
            )?;
            let rows = stmt
                .query_map([], Self::row_to_listing)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        })
    }

    fn country_balance(&self, country: &str) -> LedgerResult<Vec<WarehouseBalance>> {
        self.with_transaction(|tx| {
            let mut stmt = tx.prepare(
                "SELECT warehause.name, SUM(goods.quantity)
                 FROM goods
                 JOIN product ON goods.productId = product.id
                 JOIN brand ON product.brandId = brand.id
                 JOIN warehause ON goods.warehauseId = warehause.id
                 WHERE goods.quantity IS NOT NULL AND brand.country = ?1
                 GROUP BY warehause.name
                 ORDER BY warehause.name",
            )?;
            let rows = stmt
                .query_map(params![country], Self::row_to_balance)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        })
    }

    fn unknown_quantity_products(&self) -> LedgerResult<Vec<BrandProduct>> {
        // Set difference on names: a pair stocked anywhere drops out, even if
        // some of its rows are NULL.
        self.with_transaction(|tx| {
            let mut stmt = tx.prepare(
                "SELECT brand.name, product.name
                 FROM goods
                 JOIN product ON goods.productId = product.id
                 JOIN brand ON product.brandId = brand.id
                 JOIN warehause ON goods.warehauseId = warehause.id
                 WHERE goods.quantity IS NULL
                 EXCEPT
                 SELECT brand.name, product.name
                 FROM goods
                 JOIN product ON goods.productId = product.id
                 JOIN brand ON product.brandId = brand.id
                 JOIN warehause ON goods.warehauseId = warehause.id
                 WHERE goods.quantity IS NOT NULL
                 ORDER BY 1, 2",
            )?;
            let rows = stmt
                .query_map([], Self::row_to_brand_product)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        })
    }

    fn goods_quantity(
        &self,
        warehouse_id: WarehouseId,
        product_id: ProductId,
    ) -> LedgerResult<Option<i64>> {
        let stored = self.with_transaction(|tx| {
            tx.query_row(
                "SELECT quantity FROM goods WHERE warehauseId = ?1 AND productId = ?2",
                params![warehouse_id.0, product_id.0],
                |row| row.get::<_, Option<i64>>(0),
            )
            .optional()
        })?;
        stored.ok_or_else(|| LedgerError::NotFound {
            entity: TABLE_GOODS,
            key: format!("warehouse {}, product {}", warehouse_id, product_id),
        })
    }

    fn counts(&self) -> LedgerResult<TableCounts> {
        self.with_transaction(|tx| {
            Ok(TableCounts {
                warehouses: Self::count_rows(tx, TABLE_WAREHOUSE)?,
                brands: Self::count_rows(tx, TABLE_BRAND)?,
                products: Self::count_rows(tx, TABLE_PRODUCT)?,
                goods: Self::count_rows(tx, TABLE_GOODS)?,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct TestLedger {
        ledger: SqliteStockLedger,
        _temp_dir: TempDir, // Keep temp dir alive
    }

    fn create_test_ledger() -> TestLedger {
        let temp_dir = TempDir::new().unwrap();
        let ledger = SqliteStockLedger::new(temp_dir.path().join("stock.db"));
        ledger.init_db(false).unwrap();
        TestLedger {
            ledger,
            _temp_dir: temp_dir,
        }
    }

    fn stock_pair(ledger: &SqliteStockLedger) -> (WarehouseId, ProductId) {
        let warehouse = ledger.add_warehouse("Moscow").unwrap();
        let brand = ledger.add_brand("Toyota", "Japan").unwrap();
        let product = ledger.add_product("Engine", brand).unwrap();
        (warehouse, product)
    }

    #[test]
    fn test_init_db_is_idempotent() {
        let test = create_test_ledger();
        let ledger = &test.ledger;

        ledger.add_warehouse("Moscow").unwrap();
        ledger.init_db(false).unwrap();

        assert_eq!(ledger.counts().unwrap().warehouses, 1);
    }

    #[test]
    fn test_init_db_force_wipes_data() {
        let test = create_test_ledger();
        let ledger = &test.ledger;

        ledger
            .add_record("Toyota", "Japan", "Engine", "Moscow", 100)
            .unwrap();
        ledger.init_db(true).unwrap();

        assert_eq!(ledger.counts().unwrap(), TableCounts::default());
    }

    #[test]
    fn test_add_warehouse_get_or_create() {
        let test = create_test_ledger();
        let ledger = &test.ledger;

        let first = ledger.add_warehouse("Moscow").unwrap();
        let second = ledger.add_warehouse("Moscow").unwrap();
        let other = ledger.add_warehouse("Krasnodar").unwrap();

        assert_eq!(first, second);
        assert_ne!(first, other);
        assert_eq!(ledger.counts().unwrap().warehouses, 2);
    }

    #[test]
    fn test_add_brand_key_is_name_and_country() {
        let test = create_test_ledger();
        let ledger = &test.ledger;

        let japan = ledger.add_brand("Toyota", "Japan").unwrap();
        let again = ledger.add_brand("Toyota", "Japan").unwrap();
        let usa = ledger.add_brand("Toyota", "USA").unwrap();

        assert_eq!(japan, again);
        assert_ne!(japan, usa);
        assert_eq!(ledger.counts().unwrap().brands, 2);
    }

    #[test]
    fn test_add_product_key_is_name_and_brand() {
        let test = create_test_ledger();
        let ledger = &test.ledger;

        let toyota = ledger.add_brand("Toyota", "Japan").unwrap();
        let bmw = ledger.add_brand("BMW", "Germany").unwrap();

        let engine = ledger.add_product("Engine", toyota).unwrap();
        assert_eq!(engine, ledger.add_product("Engine", toyota).unwrap());
        assert_ne!(engine, ledger.add_product("Engine", bmw).unwrap());
        assert_eq!(ledger.counts().unwrap().products, 2);
    }

    #[test]
    fn test_empty_names_are_accepted() {
        let test = create_test_ledger();
        let ledger = &test.ledger;

        let brand = ledger.add_brand("", "").unwrap();
        assert_eq!(brand, ledger.add_brand("", "").unwrap());
        ledger.add_warehouse("").unwrap();
        ledger.add_product("", brand).unwrap();
    }

    #[test]
    fn test_add_product_with_unknown_brand_is_constraint_violation() {
        let test = create_test_ledger();

        let result = test.ledger.add_product("Engine", BrandId(42));
        assert!(matches!(result, Err(LedgerError::ConstraintViolation(_))));
        assert_eq!(test.ledger.counts().unwrap().products, 0);
    }

    #[test]
    fn test_add_goods_zero_on_fresh_pair_stores_null() {
        let test = create_test_ledger();
        let ledger = &test.ledger;
        let (warehouse, product) = stock_pair(ledger);

        assert_eq!(ledger.add_goods(warehouse, product, 0).unwrap(), None);
        assert_eq!(ledger.goods_quantity(warehouse, product).unwrap(), None);
        assert_eq!(ledger.counts().unwrap().goods, 1);
    }

    #[test]
    fn test_add_goods_accumulates_into_one_row() {
        let test = create_test_ledger();
        let ledger = &test.ledger;

        let cases: &[(i64, i64)] = &[(100, 200), (100, 0), (0, 0), (0, 100), (100, -100)];
        for (q1, q2) in cases {
            ledger.init_db(true).unwrap();
            let (warehouse, product) = stock_pair(ledger);
            ledger.add_goods(warehouse, product, *q1).unwrap();
            let stored = ledger.add_goods(warehouse, product, *q2).unwrap();

            assert_eq!(stored, normalize_quantity(q1 + q2), "{} + {}", q1, q2);
            assert_eq!(
                ledger.goods_quantity(warehouse, product).unwrap(),
                normalize_quantity(q1 + q2)
            );
            assert_eq!(ledger.counts().unwrap().goods, 1);
        }
    }

    #[test]
    fn test_add_goods_allows_negative_stock() {
        let test = create_test_ledger();
        let ledger = &test.ledger;
        let (warehouse, product) = stock_pair(ledger);

        ledger.add_goods(warehouse, product, 100).unwrap();
        assert_eq!(
            ledger.add_goods(warehouse, product, -300).unwrap(),
            Some(-200)
        );
    }

    #[test]
    fn test_goods_quantity_missing_row_is_not_found() {
        let test = create_test_ledger();
        let ledger = &test.ledger;
        let (warehouse, product) = stock_pair(ledger);

        let result = ledger.goods_quantity(warehouse, product);
        assert!(matches!(
            result,
            Err(LedgerError::NotFound {
                entity: "goods",
                ..
            })
        ));
    }

    #[test]
    fn test_add_record_scenario_toyota_engine() {
        let test = create_test_ledger();
        let ledger = &test.ledger;

        let first = ledger
            .add_record("Toyota", "Japan", "Engine", "Moscow", 100)
            .unwrap();
        let second = ledger
            .add_record("Toyota", "Japan", "Engine", "Moscow", 0)
            .unwrap();

        assert_eq!(first.warehouse, second.warehouse);
        assert_eq!(first.brand, second.brand);
        assert_eq!(first.product, second.product);
        assert_eq!(second.quantity, Some(100));
        assert_eq!(
            ledger.counts().unwrap(),
            TableCounts {
                warehouses: 1,
                brands: 1,
                products: 1,
                goods: 1,
            }
        );
    }

    #[test]
    fn test_add_record_failure_keeps_earlier_steps() {
        let test = create_test_ledger();
        let ledger = &test.ledger;

        // Break the last step only: goods can no longer be written.
        let conn = Connection::open(ledger.db_path()).unwrap();
        conn.execute(
            "CREATE TRIGGER reject_goods BEFORE INSERT ON goods
             BEGIN SELECT RAISE(ABORT, 'goods are read-only'); END",
            [],
        )
        .unwrap();
        drop(conn);

        let result = ledger.add_record("Toyota", "Japan", "Engine", "Moscow", 100);
        assert!(result.is_err());
        assert_eq!(
            ledger.counts().unwrap(),
            TableCounts {
                warehouses: 1,
                brands: 1,
                products: 1,
                goods: 0,
            }
        );
    }

    #[test]
    fn test_full_listing_orders_by_brand_then_quantity_desc() {
        let test = create_test_ledger();
        let ledger = &test.ledger;

        ledger
            .add_record("Toyota", "Japan", "Engine", "Moscow", 100)
            .unwrap();
        ledger
            .add_record("Toyota", "Japan", "Oil", "Moscow", 200)
            .unwrap();
        ledger
            .add_record("Apple", "USA", "Phone", "Krasnodar", 0)
            .unwrap();

        let listing = ledger.full_listing().unwrap();
        let summary: Vec<(&str, &str, Option<i64>, &str)> = listing
            .iter()
            .map(|r| {
                (
                    r.brand.as_str(),
                    r.product.as_str(),
                    r.quantity,
                    r.warehouse.as_str(),
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Apple", "Phone", None, "Krasnodar"),
                ("Toyota", "Oil", Some(200), "Moscow"),
                ("Toyota", "Engine", Some(100), "Moscow"),
            ]
        );
    }

    #[test]
    fn test_country_balance_sums_per_warehouse_and_skips_nulls() {
        let test = create_test_ledger();
        let ledger = &test.ledger;

        ledger
            .add_record("Apple", "USA", "Phone", "Moscow", 100)
            .unwrap();
        ledger
            .add_record("Tesla", "USA", "Engine", "Moscow", 200)
            .unwrap();
        ledger
            .add_record("Tesla", "USA", "Engine", "Krasnodar", 0)
            .unwrap();
        ledger
            .add_record("BMW", "Germany", "Engine", "Moscow", 200)
            .unwrap();

        let balance = ledger.country_balance("USA").unwrap();
        assert_eq!(
            balance,
            vec![WarehouseBalance {
                warehouse: "Moscow".to_string(),
                quantity: 300,
            }]
        );
        assert!(ledger.country_balance("Japan").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_quantity_is_set_difference() {
        let test = create_test_ledger();
        let ledger = &test.ledger;

        // Null everywhere
        ledger
            .add_record("Lada", "Russia", "Engine", "Moscow", 0)
            .unwrap();
        ledger
            .add_record("Lada", "Russia", "Engine", "Krasnodar", 0)
            .unwrap();
        // Null in one warehouse, stocked in another
        ledger
            .add_record("Apple", "USA", "Phone", "Moscow", 0)
            .unwrap();
        ledger
            .add_record("Apple", "USA", "Phone", "Krasnodar", 100)
            .unwrap();
        // Stocked then emptied
        ledger
            .add_record("BMW", "Germany", "Oil", "Moscow", 100)
            .unwrap();
        ledger
            .add_record("BMW", "Germany", "Oil", "Moscow", -100)
            .unwrap();

        let unknown = ledger.unknown_quantity_products().unwrap();
        assert_eq!(
            unknown,
            vec![
                BrandProduct {
                    brand: "BMW".to_string(),
                    product: "Oil".to_string(),
                },
                BrandProduct {
                    brand: "Lada".to_string(),
                    product: "Engine".to_string(),
                },
            ]
        );
    }

    /// Tables as the earlier tool created them: `INT` references, no natural
    /// key indices, `goods` declared before `product`.
    fn create_unindexed_tables(conn: &Connection) {
        conn.execute_batch(
            "CREATE TABLE warehause (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
             CREATE TABLE goods (
                 id INTEGER PRIMARY KEY,
                 warehauseId INT,
                 productId INT,
                 quantity INT,
                 FOREIGN KEY (warehauseId) REFERENCES warehause(id),
                 FOREIGN KEY (productId) REFERENCES product(id)
             );
             CREATE TABLE product (
                 id INTEGER PRIMARY KEY,
                 name TEXT NOT NULL,
                 brandId INT,
                 FOREIGN KEY (brandId) REFERENCES brand(id)
             );
             CREATE TABLE brand (
                 id INTEGER PRIMARY KEY,
                 name TEXT NOT NULL,
                 country TEXT NOT NULL
             );",
        )
        .unwrap();
    }

    #[test]
    fn test_init_db_adds_natural_keys_to_existing_tables() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("unindexed.db");
        let conn = Connection::open(&db_path).unwrap();
        create_unindexed_tables(&conn);
        conn.execute_batch(
            "INSERT INTO warehause (name) VALUES ('Moscow');
             INSERT INTO brand (name, country) VALUES ('Toyota', 'Japan');
             INSERT INTO product (name, brandId) VALUES ('Engine', 1);
             INSERT INTO goods (warehauseId, productId, quantity) VALUES (1, 1, 100);",
        )
        .unwrap();
        drop(conn);

        let ledger = SqliteStockLedger::new(&db_path);
        ledger.init_db(false).unwrap();
        ledger.validate_schema().unwrap();

        let ids = ledger
            .add_record("Toyota", "Japan", "Engine", "Moscow", 50)
            .unwrap();
        assert_eq!(ids.warehouse, WarehouseId(1));
        assert_eq!(ids.quantity, Some(150));
        assert_eq!(
            ledger.counts().unwrap(),
            TableCounts {
                warehouses: 1,
                brands: 1,
                products: 1,
                goods: 1,
            }
        );
    }

    #[test]
    fn test_init_db_rejects_duplicate_natural_keys_in_existing_rows() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("duplicates.db");
        let conn = Connection::open(&db_path).unwrap();
        create_unindexed_tables(&conn);
        conn.execute(
            "INSERT INTO warehause (name) VALUES ('Moscow'), ('Moscow')",
            [],
        )
        .unwrap();
        drop(conn);

        let ledger = SqliteStockLedger::new(&db_path);
        let result = ledger.init_db(false);
        assert!(matches!(
            result,
            Err(LedgerError::ConstraintViolation(_))
        ));

        // A forced reset rebuilds the layout
        ledger.init_db(true).unwrap();
        ledger.validate_schema().unwrap();
    }

    #[test]
    fn test_init_db_rejects_other_schema_versions() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("other.db");
        let conn = Connection::open(&db_path).unwrap();
        conn.pragma_update(None, "user_version", 42).unwrap();
        drop(conn);

        let ledger = SqliteStockLedger::new(&db_path);
        assert!(matches!(
            ledger.init_db(false),
            Err(LedgerError::SchemaMismatch(_))
        ));

        ledger.init_db(true).unwrap();
        ledger.validate_schema().unwrap();
    }

    #[test]
    fn test_validate_schema_rejects_changed_columns() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("changed.db");
        let conn = Connection::open(&db_path).unwrap();
        conn.execute(
            "CREATE TABLE warehause (id INTEGER PRIMARY KEY, name TEXT NOT NULL, city TEXT)",
            [],
        )
        .unwrap();
        drop(conn);

        let ledger = SqliteStockLedger::new(&db_path);
        let result = ledger.init_db(false);
        assert!(matches!(result, Err(LedgerError::SchemaMismatch(_))));

        ledger.init_db(true).unwrap();
        ledger.validate_schema().unwrap();
    }

    #[test]
    fn test_unopenable_path_is_store_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = SqliteStockLedger::new(temp_dir.path().join("missing/dir/stock.db"));

        let result = ledger.init_db(false);
        assert!(matches!(
            result,
            Err(LedgerError::StoreUnavailable { .. })
        ));
    }
}
