//! Dashboard service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::dashboard::{
        errors::DashboardServiceError,
        records::{DashboardSummary, ExpenseByCategoryRecord},
        repository::PgDashboardRepository,
    },
};

/// How many products the popularity ranking returns.
pub const POPULAR_PRODUCTS_LIMIT: i64 = 15;

/// How many of the most recent rows each summary returns.
pub const SUMMARY_LIMIT: i64 = 5;

#[derive(Debug, Clone)]
pub struct PgDashboardService {
    db: Db,
    repository: PgDashboardRepository,
}

impl PgDashboardService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgDashboardRepository::new(),
        }
    }
}

#[async_trait]
impl DashboardService for PgDashboardService {
    async fn get_dashboard_summary(&self) -> Result<DashboardSummary, DashboardServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let popular_products = self
            .repository
            .popular_products(&mut tx, POPULAR_PRODUCTS_LIMIT)
            .await?;

        let sales_summary = self
            .repository
            .latest_sales_summaries(&mut tx, SUMMARY_LIMIT)
            .await?;

        let purchase_summary = self
            .repository
            .latest_purchase_summaries(&mut tx, SUMMARY_LIMIT)
            .await?;

        let expense_summary = self
            .repository
            .latest_expense_summaries(&mut tx, SUMMARY_LIMIT)
            .await?;

        let expense_by_category_summary = self
            .repository
            .latest_expenses_by_category(&mut tx, SUMMARY_LIMIT)
            .await?;

        tx.commit().await?;

        Ok(DashboardSummary {
            popular_products,
            sales_summary,
            purchase_summary,
            expense_summary,
            expense_by_category_summary,
        })
    }

    async fn list_expenses_by_category(
        &self,
    ) -> Result<Vec<ExpenseByCategoryRecord>, DashboardServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let expenses = self.repository.list_expenses_by_category(&mut tx).await?;

        tx.commit().await?;

        Ok(expenses)
    }
}

#[automock]
#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Builds the dashboard summary from one consistent snapshot.
    async fn get_dashboard_summary(&self) -> Result<DashboardSummary, DashboardServiceError>;

    /// Every expense line, most recent first.
    async fn list_expenses_by_category(
        &self,
    ) -> Result<Vec<ExpenseByCategoryRecord>, DashboardServiceError>;
}

#[cfg(test)]
mod tests {
    use sqlx::query;
    use testresult::TestResult;

    use crate::test::{
        TestContext,
        helpers::{create_brand, create_category, create_model, create_product_with_stock},
    };

    use super::*;

    async fn record_sales_summaries(ctx: &TestContext, count: i64) -> TestResult {
        query(
            "INSERT INTO sales_summary (id, total_value, change_percentage, \"date\") \
             SELECT 'ss' || n, n * 100, 1.5, now() - make_interval(days => n::int) \
             FROM generate_series(1, $1) AS n",
        )
        .bind(count)
        .execute(ctx.db.pool())
        .await?;

        Ok(())
    }

    async fn record_expenses(ctx: &TestContext) -> TestResult {
        query(
            "INSERT INTO expense_summary (id, total_expenses, \"date\") \
             VALUES ('es1', 300, '2026-01-01T00:00:00Z')",
        )
        .execute(ctx.db.pool())
        .await?;

        query(
            "INSERT INTO expense_by_category (id, expense_summary_id, category, amount, \"date\") \
             VALUES ('e1', 'es1', 'Office', 100, '2026-01-01T00:00:00Z'), \
                    ('e2', 'es1', 'Travel', 200, '2026-02-01T00:00:00Z')",
        )
        .execute(ctx.db.pool())
        .await?;

        Ok(())
    }

    #[tokio::test]
    async fn empty_store_yields_empty_summary() -> TestResult {
        let ctx = TestContext::new().await;

        let summary = ctx.dashboard.get_dashboard_summary().await?;

        assert_eq!(summary, DashboardSummary::default());

        Ok(())
    }

    #[tokio::test]
    async fn popular_products_rank_by_stock_and_cap_at_fifteen() -> TestResult {
        let ctx = TestContext::new().await;

        create_brand(&ctx, "b1").await?;
        create_category(&ctx, "c1", "b1").await?;
        create_model(&ctx, "m1", "c1").await?;

        for n in 0..20_u64 {
            create_product_with_stock(&ctx, &format!("p{n:02}"), "m1", n).await?;
        }

        let summary = ctx.dashboard.get_dashboard_summary().await?;
        let stock: Vec<u64> = summary
            .popular_products
            .iter()
            .map(|p| p.stock_quantity)
            .collect();

        assert_eq!(stock.len(), 15);
        assert_eq!(stock.first(), Some(&19));
        assert!(stock.windows(2).all(|w| w[0] >= w[1]), "descending stock");

        Ok(())
    }

    #[tokio::test]
    async fn summaries_return_latest_five_most_recent_first() -> TestResult {
        let ctx = TestContext::new().await;

        record_sales_summaries(&ctx, 8).await?;

        let summary = ctx.dashboard.get_dashboard_summary().await?;
        let ids: Vec<&str> = summary.sales_summary.iter().map(|s| s.id.as_str()).collect();

        assert_eq!(ids, vec!["ss1", "ss2", "ss3", "ss4", "ss5"]);

        Ok(())
    }

    #[tokio::test]
    async fn expenses_are_listed_most_recent_first() -> TestResult {
        let ctx = TestContext::new().await;

        record_expenses(&ctx).await?;

        let expenses = ctx.dashboard.list_expenses_by_category().await?;
        let categories: Vec<&str> = expenses.iter().map(|e| e.category.as_str()).collect();

        assert_eq!(categories, vec!["Travel", "Office"]);

        Ok(())
    }
}
