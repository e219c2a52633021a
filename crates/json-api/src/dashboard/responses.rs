//! Dashboard Responses

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use inventory_app::domain::dashboard::records::{
    DashboardSummary, ExpenseByCategoryRecord, ExpenseSummaryRecord, PurchaseSummaryRecord,
    SalesSummaryRecord,
};

use crate::products::responses::ProductResponse;

/// Dashboard summary
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DashboardResponse {
    /// Top products by stock on hand
    pub popular_products: Vec<ProductResponse>,

    /// Latest sales summaries, most recent first
    pub sales_summary: Vec<SalesSummaryResponse>,
    pub purchase_summary: Vec<PurchaseSummaryResponse>,
    pub expense_summary: Vec<ExpenseSummaryResponse>,
    pub expense_by_category_summary: Vec<ExpenseByCategoryResponse>,
}

impl From<DashboardSummary> for DashboardResponse {
    fn from(summary: DashboardSummary) -> Self {
        DashboardResponse {
            popular_products: convert(summary.popular_products),
            sales_summary: convert(summary.sales_summary),
            purchase_summary: convert(summary.purchase_summary),
            expense_summary: convert(summary.expense_summary),
            expense_by_category_summary: convert(summary.expense_by_category_summary),
        }
    }
}

fn convert<T, U: From<T>>(rows: Vec<T>) -> Vec<U> {
    rows.into_iter().map(Into::into).collect()
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SalesSummaryResponse {
    pub id: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub total_value: Decimal,
    pub change_percentage: Option<f64>,
    pub date: String,
}

impl From<SalesSummaryRecord> for SalesSummaryResponse {
    fn from(row: SalesSummaryRecord) -> Self {
        SalesSummaryResponse {
            id: row.id.into_string(),
            total_value: row.total_value,
            change_percentage: row.change_percentage,
            date: row.date.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PurchaseSummaryResponse {
    pub id: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub total_purchased: Decimal,
    pub change_percentage: Option<f64>,
    pub date: String,
}

impl From<PurchaseSummaryRecord> for PurchaseSummaryResponse {
    fn from(row: PurchaseSummaryRecord) -> Self {
        PurchaseSummaryResponse {
            id: row.id.into_string(),
            total_purchased: row.total_purchased,
            change_percentage: row.change_percentage,
            date: row.date.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExpenseSummaryResponse {
    pub id: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub total_expenses: Decimal,
    pub date: String,
}

impl From<ExpenseSummaryRecord> for ExpenseSummaryResponse {
    fn from(row: ExpenseSummaryRecord) -> Self {
        ExpenseSummaryResponse {
            id: row.id.into_string(),
            total_expenses: row.total_expenses,
            date: row.date.to_string(),
        }
    }
}

/// One expense line under an expense summary
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExpenseByCategoryResponse {
    pub id: String,
    pub expense_summary_id: String,

    /// Free-form expense label, unrelated to catalog categories
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub amount: Decimal,
    pub date: String,
}

impl From<ExpenseByCategoryRecord> for ExpenseByCategoryResponse {
    fn from(row: ExpenseByCategoryRecord) -> Self {
        ExpenseByCategoryResponse {
            id: row.id.into_string(),
            expense_summary_id: row.expense_summary_id.into_string(),
            category: row.category,
            amount: row.amount,
            date: row.date.to_string(),
        }
    }
}
