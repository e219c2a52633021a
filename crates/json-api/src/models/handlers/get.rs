//! Get Model Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};

use crate::{
    errors::ApiError,
    extensions::*,
    models::{errors::into_api_error, responses::ModelResponse},
    state::State,
};

/// Get Model Handler
#[endpoint(
    tags("models"),
    summary = "Get Model",
    responses(
        (status_code = StatusCode::OK, description = "Model found"),
        (status_code = StatusCode::NOT_FOUND, description = "Model not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depth: QueryParam<u8, false>,
    depot: &mut Depot,
) -> Result<Json<ModelResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let depth = depth.into_inner().into_depth()?;

    let model = state
        .app
        .models
        .get_model(id.into_inner().into(), depth)
        .await
        .map_err(into_api_error)?;

    Ok(Json(model.into()))
}
