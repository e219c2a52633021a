//! Categories service.

use std::slice;

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        categories::{
            data::{CategoryFilter, CategoryUpdate, NewCategory},
            errors::CategoriesServiceError,
            records::{CategoryId, CategoryRecord},
            repository::PgCategoriesRepository,
        },
        hierarchy::{Depth, HierarchyLoader},
        integrity::{CatalogRef, PgReferentialIntegrity},
    },
};

#[derive(Debug, Clone)]
pub struct PgCategoriesService {
    db: Db,
    repository: PgCategoriesRepository,
    integrity: PgReferentialIntegrity,
    hierarchy: HierarchyLoader,
}

impl PgCategoriesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCategoriesRepository::new(),
            integrity: PgReferentialIntegrity::new(),
            hierarchy: HierarchyLoader::new(),
        }
    }
}

#[async_trait]
impl CategoriesService for PgCategoriesService {
    async fn list_categories(
        &self,
        filter: CategoryFilter,
        depth: Depth,
    ) -> Result<Vec<CategoryRecord>, CategoriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut categories = self.repository.list_categories(&mut tx, &filter).await?;

        self.hierarchy
            .attach_category_ancestors(&mut tx, &mut categories)
            .await?;

        self.hierarchy
            .attach_category_descendants(&mut tx, &mut categories, depth)
            .await?;

        tx.commit().await?;

        Ok(categories)
    }

    async fn get_category(
        &self,
        category: CategoryId,
        depth: Depth,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut category = self.repository.get_category(&mut tx, &category).await?;

        self.hierarchy
            .attach_category_ancestors(&mut tx, slice::from_mut(&mut category))
            .await?;

        self.hierarchy
            .attach_category_descendants(&mut tx, slice::from_mut(&mut category), depth)
            .await?;

        tx.commit().await?;

        Ok(category)
    }

    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        category.validate()?;

        let mut tx = self.db.begin_transaction().await?;

        self.integrity
            .validate_parent_exists(&mut tx, CatalogRef::Brand(&category.brand_id))
            .await?;

        let mut created = self.repository.create_category(&mut tx, &category).await?;

        self.hierarchy
            .attach_category_ancestors(&mut tx, slice::from_mut(&mut created))
            .await?;

        tx.commit().await?;

        debug!(category = %created.id, brand = %created.brand_id, "created category");

        Ok(created)
    }

    async fn update_category(
        &self,
        category: CategoryId,
        update: CategoryUpdate,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        update.validate()?;

        let mut tx = self.db.begin_transaction().await?;

        if let Some(brand) = &update.brand_id {
            self.integrity
                .validate_parent_exists(&mut tx, CatalogRef::Brand(brand))
                .await?;
        }

        let mut updated = self
            .repository
            .update_category(&mut tx, &category, &update)
            .await?;

        self.hierarchy
            .attach_category_ancestors(&mut tx, slice::from_mut(&mut updated))
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_category(&self, category: CategoryId) -> Result<(), CategoriesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        self.integrity
            .assert_no_dependents(&mut tx, CatalogRef::Category(&category))
            .await?;

        let rows_affected = self.repository.delete_category(&mut tx, &category).await?;

        if rows_affected == 0 {
            return Err(CategoriesServiceError::NotFound);
        }

        tx.commit().await?;

        debug!(%category, "deleted category");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Lists categories matching `filter` with their brand and up to `depth`
    /// levels of descendants attached.
    async fn list_categories(
        &self,
        filter: CategoryFilter,
        depth: Depth,
    ) -> Result<Vec<CategoryRecord>, CategoriesServiceError>;

    async fn get_category(
        &self,
        category: CategoryId,
        depth: Depth,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Creates a category under an existing brand.
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    async fn update_category(
        &self,
        category: CategoryId,
        update: CategoryUpdate,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Deletes a category that owns no models.
    async fn delete_category(&self, category: CategoryId) -> Result<(), CategoriesServiceError>;
}
