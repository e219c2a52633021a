//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use inventory_app::{
    context::AppContext,
    domain::{
        brands::{
            MockBrandsService,
            records::{BrandId, BrandRecord},
        },
        categories::{
            MockCategoriesService,
            records::{CategoryId, CategoryRecord},
        },
        dashboard::MockDashboardService,
        models::{
            MockModelsService,
            records::{ModelId, ModelRecord},
        },
        products::{
            MockProductsService,
            records::{ProductId, ProductRecord},
        },
        users::MockUsersService,
    },
};

use crate::{errors, state::State};

fn strict_brands_mock() -> MockBrandsService {
    let mut brands = MockBrandsService::new();

    brands.expect_list_brands().never();
    brands.expect_get_brand().never();
    brands.expect_create_brand().never();
    brands.expect_update_brand().never();
    brands.expect_delete_brand().never();

    brands
}

fn strict_categories_mock() -> MockCategoriesService {
    let mut categories = MockCategoriesService::new();

    categories.expect_list_categories().never();
    categories.expect_get_category().never();
    categories.expect_create_category().never();
    categories.expect_update_category().never();
    categories.expect_delete_category().never();

    categories
}

fn strict_models_mock() -> MockModelsService {
    let mut models = MockModelsService::new();

    models.expect_list_models().never();
    models.expect_get_model().never();
    models.expect_create_model().never();
    models.expect_update_model().never();
    models.expect_delete_model().never();

    models
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

fn strict_dashboard_mock() -> MockDashboardService {
    let mut dashboard = MockDashboardService::new();

    dashboard.expect_get_dashboard_summary().never();
    dashboard.expect_list_expenses_by_category().never();

    dashboard
}

fn strict_users_mock() -> MockUsersService {
    let mut users = MockUsersService::new();

    users.expect_list_users().never();

    users
}

/// App context whose services fail the test on any call.
fn strict_app_context() -> AppContext {
    AppContext {
        brands: Arc::new(strict_brands_mock()),
        categories: Arc::new(strict_categories_mock()),
        models: Arc::new(strict_models_mock()),
        products: Arc::new(strict_products_mock()),
        dashboard: Arc::new(strict_dashboard_mock()),
        users: Arc::new(strict_users_mock()),
    }
}

fn app_service(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
    .catcher(errors::catcher())
}

pub(crate) fn brands_service(brands: MockBrandsService, route: Router) -> Service {
    app_service(
        AppContext {
            brands: Arc::new(brands),
            ..strict_app_context()
        },
        route,
    )
}

pub(crate) fn categories_service(categories: MockCategoriesService, route: Router) -> Service {
    app_service(
        AppContext {
            categories: Arc::new(categories),
            ..strict_app_context()
        },
        route,
    )
}

pub(crate) fn models_service(models: MockModelsService, route: Router) -> Service {
    app_service(
        AppContext {
            models: Arc::new(models),
            ..strict_app_context()
        },
        route,
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    app_service(
        AppContext {
            products: Arc::new(products),
            ..strict_app_context()
        },
        route,
    )
}

pub(crate) fn dashboard_service(dashboard: MockDashboardService, route: Router) -> Service {
    app_service(
        AppContext {
            dashboard: Arc::new(dashboard),
            ..strict_app_context()
        },
        route,
    )
}

pub(crate) fn users_service(users: MockUsersService, route: Router) -> Service {
    app_service(
        AppContext {
            users: Arc::new(users),
            ..strict_app_context()
        },
        route,
    )
}

pub(crate) fn make_brand(id: &str) -> BrandRecord {
    BrandRecord {
        id: BrandId::from(id),
        name: format!("Brand {id}"),
        description: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        categories: None,
    }
}

pub(crate) fn make_category(id: &str, brand: &str) -> CategoryRecord {
    CategoryRecord {
        id: CategoryId::from(id),
        brand_id: BrandId::from(brand),
        name: format!("Category {id}"),
        description: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        brand: Some(Box::new(make_brand(brand))),
        models: None,
    }
}

pub(crate) fn make_model(id: &str, category: &str) -> ModelRecord {
    ModelRecord {
        id: ModelId::from(id),
        category_id: CategoryId::from(category),
        name: format!("Model {id}"),
        description: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        category: None,
        products: None,
    }
}

pub(crate) fn make_product(id: &str, model: &str) -> ProductRecord {
    ProductRecord {
        id: ProductId::from(id),
        model_id: ModelId::from(model),
        name: format!("Product {id}"),
        price: Decimal::new(1_999, 2),
        stock_quantity: 5,
        rating: Some(4.5),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        model: None,
        sales: None,
        purchases: None,
    }
}
