mod error;
mod models;
mod schema;
mod sqlite_stock_ledger;

pub use error::{LedgerError, LedgerResult};
pub use models::*;
pub use schema::{
    current_schema, LEDGER_VERSIONED_SCHEMAS, TABLE_BRAND, TABLE_GOODS, TABLE_PRODUCT,
    TABLE_WAREHOUSE,
};
pub use sqlite_stock_ledger::SqliteStockLedger;

use tracing::debug;

/// Records brands, products, warehouses and stock, and reports on them.
///
/// Every method is its own unit of work: nothing is shared between calls, so
/// a failure in one call never leaves a half-applied statement behind.
pub trait StockLedger: Send + Sync {
    /// Creates the schema if missing. With `force`, drops every table first.
    fn init_db(&self, force: bool) -> LedgerResult<()>;

    /// Checks that the tables on disk match the expected layout.
    fn validate_schema(&self) -> LedgerResult<()>;

    // Get-or-create by natural key
    fn add_warehouse(&self, name: &str) -> LedgerResult<WarehouseId>;
    fn add_brand(&self, name: &str, country: &str) -> LedgerResult<BrandId>;
    fn add_product(&self, name: &str, brand_id: BrandId) -> LedgerResult<ProductId>;

    /// Adds `quantity` to the stock of a warehouse/product pair, creating the
    /// row if needed. Returns the stored quantity, `None` when it sums to zero.
    fn add_goods(
        &self,
        warehouse_id: WarehouseId,
        product_id: ProductId,
        quantity: i64,
    ) -> LedgerResult<Option<i64>>;

    /// Get-or-creates the warehouse, brand and product, then merges the
    /// quantity into their stock row.
    ///
    /// Each step commits on its own. If a later step fails, the entities
    /// created by earlier steps stay in place.
    fn add_record(
        &self,
        brand: &str,
        country: &str,
        name: &str,
        warehouse_name: &str,
        quantity: i64,
    ) -> LedgerResult<RecordIds> {
        let warehouse = self.add_warehouse(warehouse_name)?;
        let brand = self.add_brand(brand, country)?;
        let product = self.add_product(name, brand)?;
        let quantity = self.add_goods(warehouse, product, quantity)?;
        debug!(
            "Recorded warehouse {} brand {} product {} -> quantity {:?}",
            warehouse, brand, product, quantity
        );
        Ok(RecordIds {
            warehouse,
            brand,
            product,
            quantity,
        })
    }

    // Reports
    fn full_listing(&self) -> LedgerResult<Vec<StockListingRow>>;
    fn country_balance(&self, country: &str) -> LedgerResult<Vec<WarehouseBalance>>;
    /// Brand/product pairs whose every stock row has a NULL quantity.
    fn unknown_quantity_products(&self) -> LedgerResult<Vec<BrandProduct>>;

    /// Stored quantity of one stock row. `NotFound` if the pair has no row.
    fn goods_quantity(
        &self,
        warehouse_id: WarehouseId,
        product_id: ProductId,
    ) -> LedgerResult<Option<i64>>;

    fn counts(&self) -> LedgerResult<TableCounts>;
}
