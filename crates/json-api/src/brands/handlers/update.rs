//! Update Brand Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use inventory_app::domain::brands::data::BrandUpdate;

use crate::{
    brands::{errors::into_api_error, responses::BrandResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Update Brand Request
///
/// Omitted fields keep their stored value.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct UpdateBrandRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<UpdateBrandRequest> for BrandUpdate {
    fn from(request: UpdateBrandRequest) -> Self {
        BrandUpdate {
            name: request.name,
            description: request.description,
        }
    }
}

/// Update Brand Handler
#[endpoint(
    tags("brands"),
    summary = "Update Brand",
    responses(
        (status_code = StatusCode::OK, description = "Brand updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Brand not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
#[tracing::instrument(
    name = "brands.update",
    skip(id, json, depot),
    fields(brand_id = %id.as_str()),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<UpdateBrandRequest>,
    depot: &mut Depot,
) -> Result<Json<BrandResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let brand = state
        .app
        .brands
        .update_brand(id.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    tracing::info!(brand_id = %brand.id, "updated brand");

    Ok(Json(brand.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use inventory_app::domain::{
        brands::{BrandsServiceError, MockBrandsService, records::BrandId},
        validation::ValidationError,
    };

    use crate::{
        errors::ErrorResponse,
        test_helpers::{brands_service, make_brand},
    };

    use super::*;

    fn make_service(brands: MockBrandsService) -> Service {
        brands_service(brands, Router::with_path("brands/{id}").put(handler))
    }

    #[tokio::test]
    async fn test_update_brand_success() -> TestResult {
        let mut brands = MockBrandsService::new();

        brands
            .expect_update_brand()
            .once()
            .withf(|id, update| {
                *id == BrandId::from("b1")
                    && *update
                        == BrandUpdate {
                            name: Some("Renamed".to_owned()),
                            description: None,
                        }
            })
            .return_once(|_, _| {
                let mut brand = make_brand("b1");

                brand.name = "Renamed".to_owned();

                Ok(brand)
            });

        let mut res = TestClient::put("http://example.com/brands/b1")
            .json(&json!({ "name": "Renamed" }))
            .send(&make_service(brands))
            .await;

        let body: BrandResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.name, "Renamed");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_blank_name_returns_400() -> TestResult {
        let mut brands = MockBrandsService::new();

        brands.expect_update_brand().once().return_once(|_, _| {
            Err(BrandsServiceError::Invalid(ValidationError::Required {
                field: "name",
            }))
        });

        let mut res = TestClient::put("http://example.com/brands/b1")
            .json(&json!({ "name": " " }))
            .send(&make_service(brands))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "name is required");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_brand_returns_404() -> TestResult {
        let mut brands = MockBrandsService::new();

        brands
            .expect_update_brand()
            .once()
            .return_once(|_, _| Err(BrandsServiceError::NotFound));

        let res = TestClient::put("http://example.com/brands/missing")
            .json(&json!({}))
            .send(&make_service(brands))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
