//! Models service.

use std::slice;

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        hierarchy::{Depth, HierarchyLoader},
        integrity::{CatalogRef, PgReferentialIntegrity},
        models::{
            data::{ModelFilter, ModelUpdate, NewModel},
            errors::ModelsServiceError,
            records::{ModelId, ModelRecord},
            repository::PgModelsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgModelsService {
    db: Db,
    repository: PgModelsRepository,
    integrity: PgReferentialIntegrity,
    hierarchy: HierarchyLoader,
}

impl PgModelsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgModelsRepository::new(),
            integrity: PgReferentialIntegrity::new(),
            hierarchy: HierarchyLoader::new(),
        }
    }
}

#[async_trait]
impl ModelsService for PgModelsService {
    async fn list_models(
        &self,
        filter: ModelFilter,
        depth: Depth,
    ) -> Result<Vec<ModelRecord>, ModelsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut models = self.repository.list_models(&mut tx, &filter).await?;

        self.hierarchy
            .attach_model_ancestors(&mut tx, &mut models)
            .await?;

        self.hierarchy
            .attach_model_descendants(&mut tx, &mut models, depth)
            .await?;

        tx.commit().await?;

        Ok(models)
    }

    async fn get_model(
        &self,
        model: ModelId,
        depth: Depth,
    ) -> Result<ModelRecord, ModelsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut model = self.repository.get_model(&mut tx, &model).await?;

        self.hierarchy
            .attach_model_ancestors(&mut tx, slice::from_mut(&mut model))
            .await?;

        self.hierarchy
            .attach_model_descendants(&mut tx, slice::from_mut(&mut model), depth)
            .await?;

        tx.commit().await?;

        Ok(model)
    }

    async fn create_model(
        &self,
        model: NewModel,
    ) -> Result<ModelRecord, ModelsServiceError> {
        model.validate()?;

        let mut tx = self.db.begin_transaction().await?;

        self.integrity
            .validate_parent_exists(&mut tx, CatalogRef::Category(&model.category_id))
            .await?;

        let mut created = self.repository.create_model(&mut tx, &model).await?;

        self.hierarchy
            .attach_model_ancestors(&mut tx, slice::from_mut(&mut created))
            .await?;

        tx.commit().await?;

        debug!(model = %created.id, category = %created.category_id, "created model");

        Ok(created)
    }

    async fn update_model(
        &self,
        model: ModelId,
        update: ModelUpdate,
    ) -> Result<ModelRecord, ModelsServiceError> {
        update.validate()?;

        let mut tx = self.db.begin_transaction().await?;

        if let Some(category) = &update.category_id {
            self.integrity
                .validate_parent_exists(&mut tx, CatalogRef::Category(category))
                .await?;
        }

        let mut updated = self
            .repository
            .update_model(&mut tx, &model, &update)
            .await?;

        self.hierarchy
            .attach_model_ancestors(&mut tx, slice::from_mut(&mut updated))
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_model(&self, model: ModelId) -> Result<(), ModelsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        self.integrity
            .assert_no_dependents(&mut tx, CatalogRef::Model(&model))
            .await?;

        let rows_affected = self.repository.delete_model(&mut tx, &model).await?;

        if rows_affected == 0 {
            return Err(ModelsServiceError::NotFound);
        }

        tx.commit().await?;

        debug!(%model, "deleted model");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ModelsService: Send + Sync {
    /// Lists models matching `filter` with their category and up to `depth`
    /// levels of descendants attached.
    async fn list_models(
        &self,
        filter: ModelFilter,
        depth: Depth,
    ) -> Result<Vec<ModelRecord>, ModelsServiceError>;

    async fn get_model(
        &self,
        model: ModelId,
        depth: Depth,
    ) -> Result<ModelRecord, ModelsServiceError>;

    /// Creates a model under an existing category.
    async fn create_model(
        &self,
        model: NewModel,
    ) -> Result<ModelRecord, ModelsServiceError>;

    async fn update_model(
        &self,
        model: ModelId,
        update: ModelUpdate,
    ) -> Result<ModelRecord, ModelsServiceError>;

    /// Deletes a model that owns no products.
    async fn delete_model(&self, model: ModelId) -> Result<(), ModelsServiceError>;
}
