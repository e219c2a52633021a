//! Delete Model Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{errors::ApiError, extensions::*, models::errors::into_api_error, state::State};

/// Delete Model Handler
///
/// Models that still own products are refused.
#[endpoint(
    tags("models"),
    summary = "Delete Model",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Model deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Model not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Model has products"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .models
        .delete_model(id.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(StatusCode::NO_CONTENT)
}
