//! Brands Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    brands::{
        data::{BrandUpdate, NewBrand},
        records::{BrandId, BrandRecord},
    },
    columns::try_get_timestamp,
};

const LIST_BRANDS_SQL: &str = include_str!("sql/list_brands.sql");
const GET_BRAND_SQL: &str = include_str!("sql/get_brand.sql");
const CREATE_BRAND_SQL: &str = include_str!("sql/create_brand.sql");
const UPDATE_BRAND_SQL: &str = include_str!("sql/update_brand.sql");
const DELETE_BRAND_SQL: &str = include_str!("sql/delete_brand.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBrandsRepository;

impl PgBrandsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_brands(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        search: Option<&str>,
    ) -> Result<Vec<BrandRecord>, sqlx::Error> {
        query_as::<Postgres, BrandRecord>(LIST_BRANDS_SQL)
            .bind(search)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_brand(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        brand: &BrandId,
    ) -> Result<BrandRecord, sqlx::Error> {
        query_as::<Postgres, BrandRecord>(GET_BRAND_SQL)
            .bind(brand.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_brand(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        brand: &NewBrand,
    ) -> Result<BrandRecord, sqlx::Error> {
        query_as::<Postgres, BrandRecord>(CREATE_BRAND_SQL)
            .bind(brand.id.as_str())
            .bind(&brand.name)
            .bind(brand.description.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_brand(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        brand: &BrandId,
        update: &BrandUpdate,
    ) -> Result<BrandRecord, sqlx::Error> {
        query_as::<Postgres, BrandRecord>(UPDATE_BRAND_SQL)
            .bind(brand.as_str())
            .bind(update.name.as_deref())
            .bind(update.description.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_brand(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        brand: &BrandId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_BRAND_SQL)
            .bind(brand.as_str())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for BrandRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: BrandId::from_string(row.try_get("id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            created_at: try_get_timestamp(row, "created_at")?,
            updated_at: try_get_timestamp(row, "updated_at")?,
            categories: None,
        })
    }
}
