//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::{
        brands::{BrandsService, PgBrandsService},
        categories::{CategoriesService, PgCategoriesService},
        dashboard::{DashboardService, PgDashboardService},
        models::{ModelsService, PgModelsService},
        products::{PgProductsService, ProductsService},
        users::{PgUsersService, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

/// Database options used to build an [`AppContext`].
#[derive(Debug, Clone)]
pub struct DatabaseOptions {
    pub url: String,
    pub max_connections: u32,

    /// Apply embedded migrations before serving.
    pub run_migrations: bool,
}

#[derive(Clone)]
pub struct AppContext {
    pub brands: Arc<dyn BrandsService>,
    pub categories: Arc<dyn CategoriesService>,
    pub models: Arc<dyn ModelsService>,
    pub products: Arc<dyn ProductsService>,
    pub dashboard: Arc<dyn DashboardService>,
    pub users: Arc<dyn UsersService>,
}

impl AppContext {
    /// Build application context from database options.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or applying
    /// migrations fails.
    pub async fn from_database_options(options: &DatabaseOptions) -> Result<Self, AppInitError> {
        let pool = database::connect_with_max_connections(&options.url, options.max_connections)
            .await
            .map_err(AppInitError::Database)?;

        if options.run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrate)?;

            info!("applied database migrations");
        }

        Ok(Self::from_db(&Db::new(pool)))
    }

    /// Wire every Postgres-backed service onto one pool.
    #[must_use]
    pub fn from_db(db: &Db) -> Self {
        Self {
            brands: Arc::new(PgBrandsService::new(db.clone())),
            categories: Arc::new(PgCategoriesService::new(db.clone())),
            models: Arc::new(PgModelsService::new(db.clone())),
            products: Arc::new(PgProductsService::new(db.clone())),
            dashboard: Arc::new(PgDashboardService::new(db.clone())),
            users: Arc::new(PgUsersService::new(db.clone())),
        }
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
