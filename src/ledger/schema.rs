//! SQLite schema definitions for the stock ledger database.
//!
//! The table and column spellings (`warehause`, `warehauseId`, ...) match the
//! databases this tool has always produced, so existing files stay readable.

use crate::sqlite_column;
use crate::sqlite_persistence::{
    Column, ForeignKey, ForeignKeyOnChange, SqlType, Table, VersionedSchema,
};

pub const TABLE_WAREHOUSE: &str = "warehause";
pub const TABLE_BRAND: &str = "brand";
pub const TABLE_PRODUCT: &str = "product";
pub const TABLE_GOODS: &str = "goods";

// =============================================================================
// Version 1 - Warehouses, brands, products and stock
// =============================================================================

const WAREHOUSE_TABLE_V1: Table = Table {
    name: TABLE_WAREHOUSE,
    columns: &[
        sqlite_column!("id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("name", &SqlType::Text, non_null = true),
    ],
    unique_constraints: &[&["name"]],
};

const BRAND_TABLE_V1: Table = Table {
    name: TABLE_BRAND,
    columns: &[
        sqlite_column!("id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("name", &SqlType::Text, non_null = true),
        sqlite_column!("country", &SqlType::Text, non_null = true),
    ],
    unique_constraints: &[&["name", "country"]],
};

const PRODUCT_TABLE_V1: Table = Table {
    name: TABLE_PRODUCT,
    columns: &[
        sqlite_column!("id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("name", &SqlType::Text, non_null = true),
        sqlite_column!(
            "brandId",
            &SqlType::Integer,
            foreign_key = Some(&ForeignKey {
                foreign_table: TABLE_BRAND,
                foreign_column: "id",
                on_delete: ForeignKeyOnChange::NoAction,
            })
        ),
    ],
    unique_constraints: &[&["name", "brandId"]],
};

/// Stock rows. A NULL quantity means zero or unknown stock.
const GOODS_TABLE_V1: Table = Table {
    name: TABLE_GOODS,
    columns: &[
        sqlite_column!("id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!(
            "warehauseId",
            &SqlType::Integer,
            foreign_key = Some(&ForeignKey {
                foreign_table: TABLE_WAREHOUSE,
                foreign_column: "id",
                on_delete: ForeignKeyOnChange::NoAction,
            })
        ),
        sqlite_column!(
            "productId",
            &SqlType::Integer,
            foreign_key = Some(&ForeignKey {
                foreign_table: TABLE_PRODUCT,
                foreign_column: "id",
                on_delete: ForeignKeyOnChange::NoAction,
            })
        ),
        sqlite_column!("quantity", &SqlType::Integer),
    ],
    unique_constraints: &[&["warehauseId", "productId"]],
};

/// Parents first: creation walks this list forward, a forced reset walks it
/// backwards so `goods` is dropped before the tables it references.
pub const LEDGER_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 1,
    tables: &[
        WAREHOUSE_TABLE_V1,
        BRAND_TABLE_V1,
        PRODUCT_TABLE_V1,
        GOODS_TABLE_V1,
    ],
}];

pub fn current_schema() -> &'static VersionedSchema {
    &LEDGER_VERSIONED_SCHEMAS[LEDGER_VERSIONED_SCHEMAS.len() - 1]
}
