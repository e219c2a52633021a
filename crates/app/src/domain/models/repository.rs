//! Models Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    categories::records::CategoryId,
    models::{
        data::{ModelFilter, ModelUpdate, NewModel},
        records::{ModelId, ModelRecord},
    },
    columns::try_get_timestamp,
};

const LIST_MODELS_SQL: &str = include_str!("sql/list_models.sql");
const GET_MODEL_SQL: &str = include_str!("sql/get_model.sql");
const CREATE_MODEL_SQL: &str = include_str!("sql/create_model.sql");
const UPDATE_MODEL_SQL: &str = include_str!("sql/update_model.sql");
const DELETE_MODEL_SQL: &str = include_str!("sql/delete_model.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgModelsRepository;

impl PgModelsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_models(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &ModelFilter,
    ) -> Result<Vec<ModelRecord>, sqlx::Error> {
        query_as::<Postgres, ModelRecord>(LIST_MODELS_SQL)
            .bind(filter.search.as_deref())
            .bind(filter.category_id.as_ref().map(CategoryId::as_str))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_model(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        model: &ModelId,
    ) -> Result<ModelRecord, sqlx::Error> {
        query_as::<Postgres, ModelRecord>(GET_MODEL_SQL)
            .bind(model.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_model(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        model: &NewModel,
    ) -> Result<ModelRecord, sqlx::Error> {
        query_as::<Postgres, ModelRecord>(CREATE_MODEL_SQL)
            .bind(model.id.as_str())
            .bind(model.category_id.as_str())
            .bind(&model.name)
            .bind(model.description.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_model(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        model: &ModelId,
        update: &ModelUpdate,
    ) -> Result<ModelRecord, sqlx::Error> {
        query_as::<Postgres, ModelRecord>(UPDATE_MODEL_SQL)
            .bind(model.as_str())
            .bind(update.category_id.as_ref().map(CategoryId::as_str))
            .bind(update.name.as_deref())
            .bind(update.description.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_model(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        model: &ModelId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_MODEL_SQL)
            .bind(model.as_str())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ModelRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ModelId::from_string(row.try_get("id")?),
            category_id: CategoryId::from_string(row.try_get("category_id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            created_at: try_get_timestamp(row, "created_at")?,
            updated_at: try_get_timestamp(row, "updated_at")?,
            category: None,
            products: None,
        })
    }
}
