//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{errors::into_api_error, responses::ProductResponse},
    state::State,
};

/// Get Product Handler
///
/// Returns a product with its ancestors and its sales and purchase history.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .get_product(id.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use inventory_app::domain::products::{
        MockProductsService, ProductsServiceError,
        records::{ProductId, SaleId, SaleRecord},
    };

    use crate::{
        errors::ErrorResponse,
        test_helpers::{make_product, products_service},
    };

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_product_with_history() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .withf(|id| *id == ProductId::from("p1"))
            .return_once(|_| {
                let mut product = make_product("p1", "m1");

                product.sales = Some(vec![SaleRecord {
                    id: SaleId::from("s1"),
                    product_id: Some(ProductId::from("p1")),
                    timestamp: Timestamp::UNIX_EPOCH,
                    quantity: 2,
                    unit_price: Decimal::new(1_999, 2),
                    total_amount: Decimal::new(3_998, 2),
                }]);
                product.purchases = Some(vec![]);

                Ok(product)
            });

        let mut res = TestClient::get("http://example.com/products/p1")
            .send(&make_service(products))
            .await;

        let body: ProductResponse = res.take_json().await?;
        let sale = body.sales.as_ref().and_then(|sales| sales.first());

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.stock_quantity, 5);
        assert!(
            body.rating.is_some_and(|rating| (rating - 4.5).abs() < f64::EPSILON),
            "rating should pass through"
        );
        assert_eq!(sale.map(|s| s.total_amount), Some(Decimal::new(3_998, 2)));
        assert_eq!(body.purchases.as_ref().map(Vec::len), Some(0));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_renders_price_as_json_number() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .return_once(|_| Ok(make_product("p1", "m1")));

        let body: Value = TestClient::get("http://example.com/products/p1")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        assert_eq!(body["price"], json!(19.99));
        assert_eq!(body["stockQuantity"], json!(5));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_product_returns_404() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let mut res = TestClient::get("http://example.com/products/missing")
            .send(&make_service(products))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "Product not found");

        Ok(())
    }
}
