//! Dashboard Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    columns::try_get_timestamp,
    dashboard::records::{
        ExpenseByCategoryId, ExpenseByCategoryRecord, ExpenseSummaryId, ExpenseSummaryRecord,
        PurchaseSummaryId, PurchaseSummaryRecord, SalesSummaryId, SalesSummaryRecord,
    },
    products::records::ProductRecord,
};

const POPULAR_PRODUCTS_SQL: &str = include_str!("sql/popular_products.sql");
const LATEST_SALES_SUMMARIES_SQL: &str = include_str!("sql/latest_sales_summaries.sql");
const LATEST_PURCHASE_SUMMARIES_SQL: &str = include_str!("sql/latest_purchase_summaries.sql");
const LATEST_EXPENSE_SUMMARIES_SQL: &str = include_str!("sql/latest_expense_summaries.sql");
const LATEST_EXPENSES_BY_CATEGORY_SQL: &str = include_str!("sql/latest_expenses_by_category.sql");
const LIST_EXPENSES_BY_CATEGORY_SQL: &str = include_str!("sql/list_expenses_by_category.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgDashboardRepository;

impl PgDashboardRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn popular_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        limit: i64,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(POPULAR_PRODUCTS_SQL)
            .bind(limit)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn latest_sales_summaries(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        limit: i64,
    ) -> Result<Vec<SalesSummaryRecord>, sqlx::Error> {
        query_as::<Postgres, SalesSummaryRecord>(LATEST_SALES_SUMMARIES_SQL)
            .bind(limit)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn latest_purchase_summaries(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        limit: i64,
    ) -> Result<Vec<PurchaseSummaryRecord>, sqlx::Error> {
        query_as::<Postgres, PurchaseSummaryRecord>(LATEST_PURCHASE_SUMMARIES_SQL)
            .bind(limit)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn latest_expense_summaries(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        limit: i64,
    ) -> Result<Vec<ExpenseSummaryRecord>, sqlx::Error> {
        query_as::<Postgres, ExpenseSummaryRecord>(LATEST_EXPENSE_SUMMARIES_SQL)
            .bind(limit)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn latest_expenses_by_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        limit: i64,
    ) -> Result<Vec<ExpenseByCategoryRecord>, sqlx::Error> {
        query_as::<Postgres, ExpenseByCategoryRecord>(LATEST_EXPENSES_BY_CATEGORY_SQL)
            .bind(limit)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_expenses_by_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ExpenseByCategoryRecord>, sqlx::Error> {
        query_as::<Postgres, ExpenseByCategoryRecord>(LIST_EXPENSES_BY_CATEGORY_SQL)
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for SalesSummaryRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: SalesSummaryId::from_string(row.try_get("id")?),
            total_value: row.try_get("total_value")?,
            change_percentage: row.try_get("change_percentage")?,
            date: try_get_timestamp(row, "date")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for PurchaseSummaryRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: PurchaseSummaryId::from_string(row.try_get("id")?),
            total_purchased: row.try_get("total_purchased")?,
            change_percentage: row.try_get("change_percentage")?,
            date: try_get_timestamp(row, "date")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ExpenseSummaryRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ExpenseSummaryId::from_string(row.try_get("id")?),
            total_expenses: row.try_get("total_expenses")?,
            date: try_get_timestamp(row, "date")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ExpenseByCategoryRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ExpenseByCategoryId::from_string(row.try_get("id")?),
            expense_summary_id: ExpenseSummaryId::from_string(row.try_get("expense_summary_id")?),
            category: row.try_get("category")?,
            amount: row.try_get("amount")?,
            date: try_get_timestamp(row, "date")?,
        })
    }
}
