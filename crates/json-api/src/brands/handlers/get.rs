//! Get Brand Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};

use crate::{
    brands::{errors::into_api_error, responses::BrandResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Get Brand Handler
///
/// Returns a brand with up to `depth` levels of descendants.
#[endpoint(
    tags("brands"),
    summary = "Get Brand",
    responses(
        (status_code = StatusCode::OK, description = "Brand found"),
        (status_code = StatusCode::NOT_FOUND, description = "Brand not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depth: QueryParam<u8, false>,
    depot: &mut Depot,
) -> Result<Json<BrandResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let depth = depth.into_inner().into_depth()?;

    let brand = state
        .app
        .brands
        .get_brand(id.into_inner().into(), depth)
        .await
        .map_err(into_api_error)?;

    Ok(Json(brand.into()))
}
