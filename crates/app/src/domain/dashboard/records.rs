//! Dashboard Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{domain::products::records::ProductRecord, ids::TypedId};

pub type SalesSummaryId = TypedId<SalesSummaryRecord>;

#[derive(Debug, Clone, PartialEq)]
pub struct SalesSummaryRecord {
    pub id: SalesSummaryId,
    pub total_value: Decimal,
    pub change_percentage: Option<f64>,
    pub date: Timestamp,
}

pub type PurchaseSummaryId = TypedId<PurchaseSummaryRecord>;

#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseSummaryRecord {
    pub id: PurchaseSummaryId,
    pub total_purchased: Decimal,
    pub change_percentage: Option<f64>,
    pub date: Timestamp,
}

pub type ExpenseSummaryId = TypedId<ExpenseSummaryRecord>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseSummaryRecord {
    pub id: ExpenseSummaryId,
    pub total_expenses: Decimal,
    pub date: Timestamp,
}

pub type ExpenseByCategoryId = TypedId<ExpenseByCategoryRecord>;

/// One expense line, grouped under an expense summary by a free-form
/// category label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseByCategoryRecord {
    pub id: ExpenseByCategoryId,
    pub expense_summary_id: ExpenseSummaryId,
    pub category: String,
    pub amount: Decimal,
    pub date: Timestamp,
}

/// Dashboard Summary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSummary {
    /// Products with the most stock on hand, highest first.
    pub popular_products: Vec<ProductRecord>,

    pub sales_summary: Vec<SalesSummaryRecord>,
    pub purchase_summary: Vec<PurchaseSummaryRecord>,
    pub expense_summary: Vec<ExpenseSummaryRecord>,
    pub expense_by_category_summary: Vec<ExpenseByCategoryRecord>,
}
