//! Brands service.

use std::slice;

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        brands::{
            data::{BrandFilter, BrandUpdate, NewBrand},
            errors::BrandsServiceError,
            records::{BrandId, BrandRecord},
            repository::PgBrandsRepository,
        },
        hierarchy::{Depth, HierarchyLoader},
        integrity::{CatalogRef, PgReferentialIntegrity},
    },
};

#[derive(Debug, Clone)]
pub struct PgBrandsService {
    db: Db,
    repository: PgBrandsRepository,
    integrity: PgReferentialIntegrity,
    hierarchy: HierarchyLoader,
}

impl PgBrandsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgBrandsRepository::new(),
            integrity: PgReferentialIntegrity::new(),
            hierarchy: HierarchyLoader::new(),
        }
    }
}

#[async_trait]
impl BrandsService for PgBrandsService {
    async fn list_brands(
        &self,
        filter: BrandFilter,
        depth: Depth,
    ) -> Result<Vec<BrandRecord>, BrandsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut brands = self
            .repository
            .list_brands(&mut tx, filter.search.as_deref())
            .await?;

        self.hierarchy
            .attach_brand_descendants(&mut tx, &mut brands, depth)
            .await?;

        tx.commit().await?;

        Ok(brands)
    }

    async fn get_brand(
        &self,
        brand: BrandId,
        depth: Depth,
    ) -> Result<BrandRecord, BrandsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut brand = self.repository.get_brand(&mut tx, &brand).await?;

        self.hierarchy
            .attach_brand_descendants(&mut tx, slice::from_mut(&mut brand), depth)
            .await?;

        tx.commit().await?;

        Ok(brand)
    }

    async fn create_brand(&self, brand: NewBrand) -> Result<BrandRecord, BrandsServiceError> {
        brand.validate()?;

        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_brand(&mut tx, &brand).await?;

        tx.commit().await?;

        debug!(brand = %created.id, "created brand");

        Ok(created)
    }

    async fn update_brand(
        &self,
        brand: BrandId,
        update: BrandUpdate,
    ) -> Result<BrandRecord, BrandsServiceError> {
        update.validate()?;

        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .update_brand(&mut tx, &brand, &update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_brand(&self, brand: BrandId) -> Result<(), BrandsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        self.integrity
            .assert_no_dependents(&mut tx, CatalogRef::Brand(&brand))
            .await?;

        let rows_affected = self.repository.delete_brand(&mut tx, &brand).await?;

        if rows_affected == 0 {
            return Err(BrandsServiceError::NotFound);
        }

        tx.commit().await?;

        debug!(%brand, "deleted brand");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait BrandsService: Send + Sync {
    /// Lists brands matching `filter`, oldest first, with up to `depth`
    /// levels of descendants attached.
    async fn list_brands(
        &self,
        filter: BrandFilter,
        depth: Depth,
    ) -> Result<Vec<BrandRecord>, BrandsServiceError>;

    /// Retrieve a single brand.
    async fn get_brand(
        &self,
        brand: BrandId,
        depth: Depth,
    ) -> Result<BrandRecord, BrandsServiceError>;

    async fn create_brand(&self, brand: NewBrand) -> Result<BrandRecord, BrandsServiceError>;

    async fn update_brand(
        &self,
        brand: BrandId,
        update: BrandUpdate,
    ) -> Result<BrandRecord, BrandsServiceError>;

    /// Deletes a brand that owns no categories.
    async fn delete_brand(&self, brand: BrandId) -> Result<(), BrandsServiceError>;
}
