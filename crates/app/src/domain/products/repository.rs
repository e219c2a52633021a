//! Products Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    columns::{to_bigint, to_optional_bigint, try_get_timestamp, try_get_unsigned},
    models::records::ModelId,
    products::{
        data::{NewProduct, ProductFilter, ProductUpdate},
        records::{ProductId, ProductRecord, PurchaseId, PurchaseRecord, SaleId, SaleRecord},
    },
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &ProductFilter,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .bind(filter.search.as_deref())
            .bind(filter.model_id.as_ref().map(ModelId::as_str))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &ProductId,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.id.as_str())
            .bind(product.model_id.as_str())
            .bind(&product.name)
            .bind(product.price)
            .bind(to_bigint("stock_quantity", product.stock_quantity)?)
            .bind(product.rating)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &ProductId,
        update: &ProductUpdate,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.as_str())
            .bind(update.model_id.as_ref().map(ModelId::as_str))
            .bind(update.name.as_deref())
            .bind(update.price)
            .bind(to_optional_bigint("stock_quantity", update.stock_quantity)?)
            .bind(update.rating)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &ProductId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.as_str())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_string(row.try_get("id")?),
            model_id: ModelId::from_string(row.try_get("model_id")?),
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            stock_quantity: try_get_unsigned(row, "stock_quantity")?,
            rating: row.try_get("rating")?,
            created_at: try_get_timestamp(row, "created_at")?,
            updated_at: try_get_timestamp(row, "updated_at")?,
            model: None,
            sales: None,
            purchases: None,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for SaleRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: SaleId::from_string(row.try_get("id")?),
            product_id: row
                .try_get::<Option<String>, _>("product_id")?
                .map(ProductId::from_string),
            timestamp: try_get_timestamp(row, "timestamp")?,
            quantity: try_get_unsigned(row, "quantity")?,
            unit_price: row.try_get("unit_price")?,
            total_amount: row.try_get("total_amount")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for PurchaseRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: PurchaseId::from_string(row.try_get("id")?),
            product_id: row
                .try_get::<Option<String>, _>("product_id")?
                .map(ProductId::from_string),
            timestamp: try_get_timestamp(row, "timestamp")?,
            quantity: try_get_unsigned(row, "quantity")?,
            unit_cost: row.try_get("unit_cost")?,
            total_cost: row.try_get("total_cost")?,
        })
    }
}
