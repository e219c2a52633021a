//! Test context for service-level integration tests.

use crate::{
    database::Db,
    domain::{
        brands::PgBrandsService, categories::PgCategoriesService,
        dashboard::PgDashboardService, models::PgModelsService, products::PgProductsService,
        users::PgUsersService,
    },
};

use super::db::TestDb;

pub(crate) struct TestContext {
    pub db: TestDb,
    pub brands: PgBrandsService,
    pub categories: PgCategoriesService,
    pub models: PgModelsService,
    pub products: PgProductsService,
    pub dashboard: PgDashboardService,
    pub users: PgUsersService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            brands: PgBrandsService::new(db.clone()),
            categories: PgCategoriesService::new(db.clone()),
            models: PgModelsService::new(db.clone()),
            products: PgProductsService::new(db.clone()),
            dashboard: PgDashboardService::new(db.clone()),
            users: PgUsersService::new(db),
            db: test_db,
        }
    }
}
