//! Get Category Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};

use crate::{
    categories::{errors::into_api_error, responses::CategoryResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Get Category Handler
///
/// Returns a category with its brand and up to `depth` levels below it.
#[endpoint(
    tags("categories"),
    summary = "Get Category",
    responses(
        (status_code = StatusCode::OK, description = "Category found"),
        (status_code = StatusCode::NOT_FOUND, description = "Category not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depth: QueryParam<u8, false>,
    depot: &mut Depot,
) -> Result<Json<CategoryResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let depth = depth.into_inner().into_depth()?;

    let category = state
        .app
        .categories
        .get_category(id.into_inner().into(), depth)
        .await
        .map_err(into_api_error)?;

    Ok(Json(category.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use inventory_app::domain::{
        categories::{CategoriesServiceError, MockCategoriesService, records::CategoryId},
        hierarchy::Depth,
    };

    use crate::test_helpers::{categories_service, make_category, make_model};

    use super::*;

    fn make_service(categories: MockCategoriesService) -> Service {
        categories_service(categories, Router::with_path("categories/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_category_with_models() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories
            .expect_get_category()
            .once()
            .withf(|id, depth| *id == CategoryId::from("c1") && *depth == Depth::FULL)
            .return_once(|_, _| {
                let mut category = make_category("c1", "b1");

                category.models = Some(vec![make_model("m1", "c1")]);

                Ok(category)
            });

        let mut res = TestClient::get("http://example.com/categories/c1")
            .send(&make_service(categories))
            .await;

        let body: CategoryResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.models.as_ref().map(Vec::len), Some(1));
        assert!(body.brand.is_some(), "brand should always be attached");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_category_returns_404() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories
            .expect_get_category()
            .once()
            .return_once(|_, _| Err(CategoriesServiceError::NotFound));

        let res = TestClient::get("http://example.com/categories/missing")
            .send(&make_service(categories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_rejects_depth_above_three() -> TestResult {
        let res = TestClient::get("http://example.com/categories/c1?depth=9")
            .send(&make_service(MockCategoriesService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
