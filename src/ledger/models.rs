use serde::Serialize;
use std::fmt;

macro_rules! row_id {
    ($name:ident) => {
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

row_id!(WarehouseId);
row_id!(BrandId);
row_id!(ProductId);

/// Maps a quantity onto its stored form: zero is stored as NULL.
pub fn normalize_quantity(quantity: i64) -> Option<i64> {
    if quantity == 0 {
        None
    } else {
        Some(quantity)
    }
}

/// Identifiers touched by a single `add_record` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordIds {
    pub warehouse: WarehouseId,
    pub brand: BrandId,
    pub product: ProductId,
    /// Stored quantity after the merge.
    pub quantity: Option<i64>,
}

/// One row of the full stock listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockListingRow {
    pub brand: String,
    pub product: String,
    pub quantity: Option<i64>,
    pub warehouse: String,
}

impl fmt::Display for StockListingRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | ", self.brand, self.product)?;
        match self.quantity {
            Some(quantity) => write!(f, "{}", quantity)?,
            None => f.write_str("None")?,
        }
        write!(f, " | {}", self.warehouse)
    }
}

/// Summed non-null stock of one warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarehouseBalance {
    pub warehouse: String,
    pub quantity: i64,
}

impl fmt::Display for WarehouseBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.warehouse, self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct BrandProduct {
    pub brand: String,
    pub product: String,
}

impl fmt::Display for BrandProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.brand, self.product)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    pub warehouses: usize,
    pub brands: usize,
    pub products: usize,
    pub goods: usize,
}
