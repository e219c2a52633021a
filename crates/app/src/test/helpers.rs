//! Test Helpers
//!
//! Seed rows get predictable names: `Brand b1`, `Category c1` and so on.

use rust_decimal::Decimal;

use crate::{
    domain::{
        brands::{
            BrandsService, BrandsServiceError,
            data::NewBrand,
            records::{BrandId, BrandRecord},
        },
        categories::{
            CategoriesService, CategoriesServiceError,
            data::NewCategory,
            records::{CategoryId, CategoryRecord},
        },
        models::{
            ModelsService, ModelsServiceError,
            data::NewModel,
            records::{ModelId, ModelRecord},
        },
        products::{
            ProductsService, ProductsServiceError,
            data::NewProduct,
            records::{ProductId, ProductRecord},
        },
    },
    test::TestContext,
};

pub(crate) async fn create_brand(
    ctx: &TestContext,
    brand: &str,
) -> Result<BrandRecord, BrandsServiceError> {
    ctx.brands
        .create_brand(NewBrand {
            id: BrandId::from(brand),
            name: format!("Brand {brand}"),
            description: None,
        })
        .await
}

pub(crate) async fn create_category(
    ctx: &TestContext,
    category: &str,
    brand: &str,
) -> Result<CategoryRecord, CategoriesServiceError> {
    ctx.categories
        .create_category(NewCategory {
            id: CategoryId::from(category),
            brand_id: BrandId::from(brand),
            name: format!("Category {category}"),
            description: None,
        })
        .await
}

pub(crate) async fn create_model(
    ctx: &TestContext,
    model: &str,
    category: &str,
) -> Result<ModelRecord, ModelsServiceError> {
    ctx.models
        .create_model(NewModel {
            id: ModelId::from(model),
            category_id: CategoryId::from(category),
            name: format!("Model {model}"),
            description: None,
        })
        .await
}

pub(crate) async fn create_product(
    ctx: &TestContext,
    product: &str,
    model: &str,
    price: Decimal,
) -> Result<ProductRecord, ProductsServiceError> {
    ctx.products
        .create_product(NewProduct {
            id: ProductId::from(product),
            model_id: ModelId::from(model),
            name: format!("Product {product}"),
            price,
            stock_quantity: 0,
            rating: None,
        })
        .await
}

pub(crate) async fn create_product_with_stock(
    ctx: &TestContext,
    product: &str,
    model: &str,
    stock_quantity: u64,
) -> Result<ProductRecord, ProductsServiceError> {
    ctx.products
        .create_product(NewProduct {
            id: ProductId::from(product),
            model_id: ModelId::from(model),
            name: format!("Product {product}"),
            price: Decimal::ONE,
            stock_quantity,
            rating: None,
        })
        .await
}
