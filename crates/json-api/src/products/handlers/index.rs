//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::ToParameters, prelude::*};
use serde::Deserialize;

use inventory_app::domain::products::data::ProductFilter;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{errors::into_api_error, responses::ProductResponse},
    state::State,
};

/// Product list query
#[derive(Debug, Deserialize, ToParameters)]
#[serde(rename_all = "camelCase")]
#[salvo(parameters(default_parameter_in = Query, rename_all = "camelCase"))]
pub(crate) struct ProductsQuery {
    /// Case-sensitive substring of the product name
    pub search: Option<String>,

    /// Only products of this model
    pub model_id: Option<String>,
}

impl From<ProductsQuery> for ProductFilter {
    fn from(query: ProductsQuery) -> Self {
        ProductFilter {
            search: query.search,
            model_id: query.model_id.map(Into::into),
        }
    }
}

/// Product Index Handler
///
/// Returns products oldest first, each with its model, category and brand.
#[endpoint(tags("products"), summary = "List Products", parameters(ProductsQuery))]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let query = req
        .parse_queries::<ProductsQuery>()
        .map_err(|error| ApiError::bad_request(format!("invalid query: {error}")))?;

    let products = state
        .app
        .products
        .list_products(query.into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use inventory_app::domain::{
        models::records::ModelId,
        products::{MockProductsService, ProductsServiceError},
    };

    use crate::test_helpers::{make_category, make_model, make_product, products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .withf(|filter| *filter == ProductFilter::default())
            .return_once(|_| Ok(vec![]));

        let body: Vec<ProductResponse> = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        assert!(body.is_empty(), "expected no products");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_products_with_ancestor_chain() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(|_| {
                let category = make_category("c1", "b1");
                let mut model = make_model("m1", "c1");
                let mut product = make_product("p1", "m1");

                model.category = Some(Box::new(category));
                product.model = Some(Box::new(model));

                Ok(vec![product, make_product("p2", "m1")])
            });

        let body: Vec<ProductResponse> = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        let first = body.first();
        let brand_id = first
            .and_then(|p| p.model.as_ref())
            .and_then(|m| m.category.as_ref())
            .map(|c| c.brand_id.as_str());

        assert_eq!(body.len(), 2, "expected two products");
        assert_eq!(first.map(|p| p.price), Some(Decimal::new(1_999, 2)));
        assert_eq!(brand_id, Some("b1"));
        assert!(
            first.is_some_and(|p| p.sales.is_none()),
            "lists never carry history"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_index_forwards_model_filter_and_search() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .withf(|filter| {
                filter.model_id == Some(ModelId::from("m1"))
                    && filter.search.as_deref() == Some("50%")
            })
            .return_once(|_| Ok(vec![]));

        let res = TestClient::get("http://example.com/products?modelId=m1&search=50%25")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_error_returns_500() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(|_| Err(ProductsServiceError::Sql(sqlx::Error::PoolClosed)));

        let res = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
