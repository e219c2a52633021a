//! Update Category Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use inventory_app::domain::categories::data::CategoryUpdate;

use crate::{
    categories::{errors::into_api_error, responses::CategoryResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Update Category Request
///
/// Omitted fields keep their stored value. A new `brandId` must exist.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct UpdateCategoryRequest {
    pub brand_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<UpdateCategoryRequest> for CategoryUpdate {
    fn from(request: UpdateCategoryRequest) -> Self {
        CategoryUpdate {
            brand_id: request.brand_id.map(Into::into),
            name: request.name,
            description: request.description,
        }
    }
}

/// Update Category Handler
#[endpoint(
    tags("categories"),
    summary = "Update Category",
    responses(
        (status_code = StatusCode::OK, description = "Category updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Category not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Brand not found or invalid payload"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<UpdateCategoryRequest>,
    depot: &mut Depot,
) -> Result<Json<CategoryResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let category = state
        .app
        .categories
        .update_category(id.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(category.into()))
}
