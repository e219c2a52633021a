//! Update Model Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use inventory_app::domain::models::data::ModelUpdate;

use crate::{
    errors::ApiError,
    extensions::*,
    models::{errors::into_api_error, responses::ModelResponse},
    state::State,
};

/// Update Model Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct UpdateModelRequest {
    pub category_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<UpdateModelRequest> for ModelUpdate {
    fn from(request: UpdateModelRequest) -> Self {
        ModelUpdate {
            category_id: request.category_id.map(Into::into),
            name: request.name,
            description: request.description,
        }
    }
}

/// Update Model Handler
#[endpoint(
    tags("models"),
    summary = "Update Model",
    responses(
        (status_code = StatusCode::OK, description = "Model updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Model not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Category not found or invalid payload"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<UpdateModelRequest>,
    depot: &mut Depot,
) -> Result<Json<ModelResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let model = state
        .app
        .models
        .update_model(id.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(model.into()))
}
