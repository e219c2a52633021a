//! Create Product Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use inventory_app::domain::products::{data::NewProduct, records::ProductId};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{errors::into_api_error, responses::ProductResponse},
    state::State,
};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateProductRequest {
    /// Caller-chosen id, generated when omitted
    #[serde(default)]
    pub id: Option<String>,

    /// Owning model, which must exist
    pub model_id: String,
    pub name: String,

    /// Non-negative, fractional amounts allowed
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    pub stock_quantity: u64,

    /// Between 0 and 5
    #[serde(default)]
    pub rating: Option<f64>,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            id: request.id.map_or_else(ProductId::generate, ProductId::from),
            model_id: request.model_id.into(),
            name: request.name,
            price: request.price,
            stock_quantity: request.stock_quantity,
            rating: request.rating,
        }
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::CONFLICT, description = "Product already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Model not found or invalid payload"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .create_product(json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    res.add_header(LOCATION, format!("/products/{}", product.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use inventory_app::domain::{
        models::records::ModelId,
        products::{MockProductsService, ProductsServiceError},
        validation::ValidationError,
    };

    use crate::{
        errors::ErrorResponse,
        test_helpers::{make_product, products_service},
    };

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products").post(handler))
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|new| {
                *new == NewProduct {
                    id: ProductId::from("p1"),
                    model_id: ModelId::from("m1"),
                    name: "Drill".to_owned(),
                    price: Decimal::new(1_999, 2),
                    stock_quantity: 5,
                    rating: Some(4.5),
                }
            })
            .return_once(|_| Ok(make_product("p1", "m1")));

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({
                "id": "p1",
                "modelId": "m1",
                "name": "Drill",
                "price": 19.99,
                "stockQuantity": 5,
                "rating": 4.5
            }))
            .send(&make_service(products))
            .await;

        let body: ProductResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/products/p1"));
        assert_eq!(body.model_id, "m1");
        assert_eq!(body.price, Decimal::new(1_999, 2));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_accepts_whole_number_price() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|new| new.price == Decimal::from(20))
            .return_once(|_| Ok(make_product("p1", "m1")));

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "modelId": "m1", "name": "Drill", "price": 20, "stockQuantity": 1 }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_under_missing_model_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::ModelNotFound));

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({ "modelId": "nope", "name": "Drill", "price": 1.5, "stockQuantity": 1 }))
            .send(&make_service(products))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "Model not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_rating_out_of_range_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_create_product().once().return_once(|_| {
            Err(ProductsServiceError::Invalid(ValidationError::OutOfRange {
                field: "rating",
                min: "0",
                max: "5",
            }))
        });

        let res = TestClient::post("http://example.com/products")
            .json(&json!({
                "modelId": "m1",
                "name": "Drill",
                "price": 1.5,
                "stockQuantity": 1,
                "rating": 7
            }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_negative_price_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|new| new.price == Decimal::new(-1, 2))
            .return_once(|_| {
                Err(ProductsServiceError::Invalid(ValidationError::Negative {
                    field: "price",
                }))
            });

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({ "modelId": "m1", "name": "Drill", "price": -0.01, "stockQuantity": 1 }))
            .send(&make_service(products))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "price must not be negative");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_without_stock_quantity_is_rejected() -> TestResult {
        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "modelId": "m1", "name": "Drill", "price": 19.99 }))
            .send(&make_service(MockProductsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
