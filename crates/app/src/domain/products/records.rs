//! Product Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::models::records::{ModelId, ModelRecord},
    ids::TypedId,
};

/// Product Id
pub type ProductId = TypedId<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub model_id: ModelId,
    pub name: String,

    pub price: Decimal,
    pub stock_quantity: u64,
    pub rating: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,

    /// Owning model with its category and brand attached.
    pub model: Option<Box<ModelRecord>>,

    /// Sales history, only loaded for single-product lookups.
    pub sales: Option<Vec<SaleRecord>>,

    /// Purchase history, only loaded for single-product lookups.
    pub purchases: Option<Vec<PurchaseRecord>>,
}

/// Sale Id
pub type SaleId = TypedId<SaleRecord>;

/// Sale Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleRecord {
    pub id: SaleId,

    /// Cleared when the product is deleted.
    pub product_id: Option<ProductId>,
    pub timestamp: Timestamp,
    pub quantity: u64,
    pub unit_price: Decimal,
    pub total_amount: Decimal,
}

/// Purchase Id
pub type PurchaseId = TypedId<PurchaseRecord>;

/// Purchase Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseRecord {
    pub id: PurchaseId,

    /// Cleared when the product is deleted.
    pub product_id: Option<ProductId>,
    pub timestamp: Timestamp,
    pub quantity: u64,
    pub unit_cost: Decimal,
    pub total_cost: Decimal,
}
