//! Create Model Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use inventory_app::domain::models::{data::NewModel, records::ModelId};

use crate::{
    errors::ApiError,
    extensions::*,
    models::{errors::into_api_error, responses::ModelResponse},
    state::State,
};

/// Create Model Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateModelRequest {
    /// Caller-chosen id, generated when omitted
    #[serde(default)]
    pub id: Option<String>,

    /// Owning category, which must exist
    pub category_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<CreateModelRequest> for NewModel {
    fn from(request: CreateModelRequest) -> Self {
        NewModel {
            id: request.id.map_or_else(ModelId::generate, ModelId::from),
            category_id: request.category_id.into(),
            name: request.name,
            description: request.description,
        }
    }
}

/// Create Model Handler
#[endpoint(
    tags("models"),
    summary = "Create Model",
    responses(
        (status_code = StatusCode::CREATED, description = "Model created"),
        (status_code = StatusCode::CONFLICT, description = "Model already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Category not found or invalid payload"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateModelRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ModelResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let model = state
        .app
        .models
        .create_model(json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    res.add_header(LOCATION, format!("/models/{}", model.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(model.into()))
}
