//! Integrity Repository

use sqlx::{Postgres, Transaction, query_scalar};

use super::{CatalogRef, IntegrityError};

const SHARE_BRAND_SQL: &str = include_str!("sql/share_brand.sql");
const SHARE_CATEGORY_SQL: &str = include_str!("sql/share_category.sql");
const SHARE_MODEL_SQL: &str = include_str!("sql/share_model.sql");
const LOCK_BRAND_SQL: &str = include_str!("sql/lock_brand.sql");
const LOCK_CATEGORY_SQL: &str = include_str!("sql/lock_category.sql");
const LOCK_MODEL_SQL: &str = include_str!("sql/lock_model.sql");
const COUNT_BRAND_CATEGORIES_SQL: &str = include_str!("sql/count_brand_categories.sql");
const COUNT_CATEGORY_MODELS_SQL: &str = include_str!("sql/count_category_models.sql");
const COUNT_MODEL_PRODUCTS_SQL: &str = include_str!("sql/count_model_products.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgReferentialIntegrity;

impl PgReferentialIntegrity {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Fails with [`IntegrityError::ParentNotFound`] unless the parent row
    /// exists. The row stays key-share locked until the transaction ends.
    pub(crate) async fn validate_parent_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        parent: CatalogRef<'_>,
    ) -> Result<(), IntegrityError> {
        let sql = match parent {
            CatalogRef::Brand(_) => SHARE_BRAND_SQL,
            CatalogRef::Category(_) => SHARE_CATEGORY_SQL,
            CatalogRef::Model(_) => SHARE_MODEL_SQL,
        };

        let found: Option<String> = query_scalar(sql)
            .bind(parent.id())
            .fetch_optional(&mut **tx)
            .await?;

        if found.is_none() {
            return Err(IntegrityError::ParentNotFound(parent.level()));
        }

        Ok(())
    }

    /// Fails with [`IntegrityError::HasDependents`] when any direct child
    /// references `owner`. The owner row is locked for update first so no
    /// child can be attached between the count and the delete.
    pub(crate) async fn assert_no_dependents(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: CatalogRef<'_>,
    ) -> Result<(), IntegrityError> {
        let (lock_sql, count_sql) = match owner {
            CatalogRef::Brand(_) => (LOCK_BRAND_SQL, COUNT_BRAND_CATEGORIES_SQL),
            CatalogRef::Category(_) => (LOCK_CATEGORY_SQL, COUNT_CATEGORY_MODELS_SQL),
            CatalogRef::Model(_) => (LOCK_MODEL_SQL, COUNT_MODEL_PRODUCTS_SQL),
        };

        let _locked: Option<String> = query_scalar(lock_sql)
            .bind(owner.id())
            .fetch_optional(&mut **tx)
            .await?;

        let dependents: i64 = query_scalar(count_sql)
            .bind(owner.id())
            .fetch_one(&mut **tx)
            .await?;

        if dependents > 0 {
            return Err(IntegrityError::HasDependents {
                owner: owner.level(),
                dependents: owner.dependents(),
            });
        }

        Ok(())
    }
}
