//! Products service.

use std::slice;

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        hierarchy::HierarchyLoader,
        integrity::{CatalogRef, PgReferentialIntegrity},
        products::{
            data::{NewProduct, ProductFilter, ProductUpdate},
            errors::ProductsServiceError,
            records::{ProductId, ProductRecord},
            repository::PgProductsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
    integrity: PgReferentialIntegrity,
    hierarchy: HierarchyLoader,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
            integrity: PgReferentialIntegrity::new(),
            hierarchy: HierarchyLoader::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut products = self.repository.list_products(&mut tx, &filter).await?;

        self.hierarchy
            .attach_product_ancestors(&mut tx, &mut products)
            .await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut product = self.repository.get_product(&mut tx, &product).await?;

        self.hierarchy
            .attach_product_ancestors(&mut tx, slice::from_mut(&mut product))
            .await?;

        self.hierarchy
            .attach_product_history(&mut tx, &mut product)
            .await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        product.validate()?;

        let mut tx = self.db.begin_transaction().await?;

        self.integrity
            .validate_parent_exists(&mut tx, CatalogRef::Model(&product.model_id))
            .await?;

        let mut created = self.repository.create_product(&mut tx, &product).await?;

        self.hierarchy
            .attach_product_ancestors(&mut tx, slice::from_mut(&mut created))
            .await?;

        tx.commit().await?;

        debug!(product = %created.id, model = %created.model_id, "created product");

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        update.validate()?;

        let mut tx = self.db.begin_transaction().await?;

        if let Some(model) = &update.model_id {
            self.integrity
                .validate_parent_exists(&mut tx, CatalogRef::Model(model))
                .await?;
        }

        let mut updated = self
            .repository
            .update_product(&mut tx, &product, &update)
            .await?;

        self.hierarchy
            .attach_product_ancestors(&mut tx, slice::from_mut(&mut updated))
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self.repository.delete_product(&mut tx, &product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        debug!(%product, "deleted product");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Lists products matching `filter` with their model, category and brand
    /// attached.
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product with its ancestors and its sales and
    /// purchase history.
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a product under an existing model.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Deletes a product. History rows keep their data with the product
    /// link cleared.
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError>;
}
