//! Product Responses

use std::string::ToString;

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use inventory_app::domain::products::records::{ProductRecord, PurchaseRecord, SaleRecord};

use crate::models::responses::ModelSummary;

/// Product with its ancestors, and history on single lookups
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    pub id: String,
    pub model_id: String,
    pub name: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,
    pub stock_quantity: u64,
    pub rating: Option<f64>,
    pub created_at: String,
    pub updated_at: String,

    /// Owning model with its category and brand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelSummary>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales: Option<Vec<SaleResponse>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchases: Option<Vec<PurchaseResponse>>,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.id.into_string(),
            model_id: product.model_id.into_string(),
            name: product.name,
            price: product.price,
            stock_quantity: product.stock_quantity,
            rating: product.rating,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
            model: product.model.map(|model| (*model).into()),
            sales: product
                .sales
                .map(|sales| sales.into_iter().map(Into::into).collect()),
            purchases: product
                .purchases
                .map(|purchases| purchases.into_iter().map(Into::into).collect()),
        }
    }
}

/// Sale Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SaleResponse {
    pub id: String,

    /// `null` once the product has been deleted
    pub product_id: Option<String>,
    pub timestamp: String,
    pub quantity: u64,
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub total_amount: Decimal,
}

impl From<SaleRecord> for SaleResponse {
    fn from(sale: SaleRecord) -> Self {
        SaleResponse {
            id: sale.id.into_string(),
            product_id: sale.product_id.as_ref().map(ToString::to_string),
            timestamp: sale.timestamp.to_string(),
            quantity: sale.quantity,
            unit_price: sale.unit_price,
            total_amount: sale.total_amount,
        }
    }
}

/// Purchase Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PurchaseResponse {
    pub id: String,

    /// `null` once the product has been deleted
    pub product_id: Option<String>,
    pub timestamp: String,
    pub quantity: u64,
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub unit_cost: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub total_cost: Decimal,
}

impl From<PurchaseRecord> for PurchaseResponse {
    fn from(purchase: PurchaseRecord) -> Self {
        PurchaseResponse {
            id: purchase.id.into_string(),
            product_id: purchase.product_id.as_ref().map(ToString::to_string),
            timestamp: purchase.timestamp.to_string(),
            quantity: purchase.quantity,
            unit_cost: purchase.unit_cost,
            total_cost: purchase.total_cost,
        }
    }
}
