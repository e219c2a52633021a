//! Delete Brand Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{brands::errors::into_api_error, errors::ApiError, extensions::*, state::State};

/// Delete Brand Handler
///
/// Brands that still own categories are refused.
#[endpoint(
    tags("brands"),
    summary = "Delete Brand",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Brand deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Brand not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Brand has categories"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .brands
        .delete_brand(id.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use inventory_app::domain::brands::{BrandsServiceError, MockBrandsService, records::BrandId};

    use crate::{errors::ErrorResponse, test_helpers::brands_service};

    use super::*;

    fn make_service(brands: MockBrandsService) -> Service {
        brands_service(brands, Router::with_path("brands/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_brand_success() -> TestResult {
        let mut brands = MockBrandsService::new();

        brands
            .expect_delete_brand()
            .once()
            .withf(|id| *id == BrandId::from("b1"))
            .return_once(|_| Ok(()));

        let res = TestClient::delete("http://example.com/brands/b1")
            .send(&make_service(brands))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_brand_with_categories_returns_400() -> TestResult {
        let mut brands = MockBrandsService::new();

        brands
            .expect_delete_brand()
            .once()
            .return_once(|_| Err(BrandsServiceError::HasCategories));

        let mut res = TestClient::delete("http://example.com/brands/b1")
            .send(&make_service(brands))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            body.message,
            "Cannot delete brand with existing categories. Please delete categories first."
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_brand_returns_404() -> TestResult {
        let mut brands = MockBrandsService::new();

        brands
            .expect_delete_brand()
            .once()
            .return_once(|_| Err(BrandsServiceError::NotFound));

        let res = TestClient::delete("http://example.com/brands/missing")
            .send(&make_service(brands))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
