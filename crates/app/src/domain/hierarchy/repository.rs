//! Hierarchy Repository

use sqlx::{Postgres, Transaction, query_as};

use crate::domain::{
    brands::records::BrandRecord,
    categories::records::CategoryRecord,
    models::records::ModelRecord,
    products::records::{ProductId, ProductRecord, PurchaseRecord, SaleRecord},
};

const LIST_CATEGORIES_FOR_BRANDS_SQL: &str = include_str!("sql/list_categories_for_brands.sql");
const LIST_MODELS_FOR_CATEGORIES_SQL: &str = include_str!("sql/list_models_for_categories.sql");
const LIST_PRODUCTS_FOR_MODELS_SQL: &str = include_str!("sql/list_products_for_models.sql");
const GET_BRANDS_BY_IDS_SQL: &str = include_str!("sql/get_brands_by_ids.sql");
const GET_CATEGORIES_BY_IDS_SQL: &str = include_str!("sql/get_categories_by_ids.sql");
const GET_MODELS_BY_IDS_SQL: &str = include_str!("sql/get_models_by_ids.sql");
const LIST_SALES_FOR_PRODUCT_SQL: &str = include_str!("sql/list_sales_for_product.sql");
const LIST_PURCHASES_FOR_PRODUCT_SQL: &str = include_str!("sql/list_purchases_for_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgHierarchyRepository;

impl PgHierarchyRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_categories_for_brands(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        brands: Vec<String>,
    ) -> Result<Vec<CategoryRecord>, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(LIST_CATEGORIES_FOR_BRANDS_SQL)
            .bind(brands)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_models_for_categories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        categories: Vec<String>,
    ) -> Result<Vec<ModelRecord>, sqlx::Error> {
        query_as::<Postgres, ModelRecord>(LIST_MODELS_FOR_CATEGORIES_SQL)
            .bind(categories)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_products_for_models(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        models: Vec<String>,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_FOR_MODELS_SQL)
            .bind(models)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_brands_by_ids(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        brands: Vec<String>,
    ) -> Result<Vec<BrandRecord>, sqlx::Error> {
        query_as::<Postgres, BrandRecord>(GET_BRANDS_BY_IDS_SQL)
            .bind(brands)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_categories_by_ids(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        categories: Vec<String>,
    ) -> Result<Vec<CategoryRecord>, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(GET_CATEGORIES_BY_IDS_SQL)
            .bind(categories)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_models_by_ids(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        models: Vec<String>,
    ) -> Result<Vec<ModelRecord>, sqlx::Error> {
        query_as::<Postgres, ModelRecord>(GET_MODELS_BY_IDS_SQL)
            .bind(models)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_sales_for_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &ProductId,
    ) -> Result<Vec<SaleRecord>, sqlx::Error> {
        query_as::<Postgres, SaleRecord>(LIST_SALES_FOR_PRODUCT_SQL)
            .bind(product.as_str())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_purchases_for_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &ProductId,
    ) -> Result<Vec<PurchaseRecord>, sqlx::Error> {
        query_as::<Postgres, PurchaseRecord>(LIST_PURCHASES_FOR_PRODUCT_SQL)
            .bind(product.as_str())
            .fetch_all(&mut **tx)
            .await
    }
}
