//! Model Index Handler

use std::sync::Arc;

use salvo::{oapi::ToParameters, prelude::*};
use serde::Deserialize;

use inventory_app::domain::models::data::ModelFilter;

use crate::{
    errors::ApiError,
    extensions::*,
    models::{errors::into_api_error, responses::ModelResponse},
    state::State,
};

/// Model list query
#[derive(Debug, Deserialize, ToParameters)]
#[serde(rename_all = "camelCase")]
#[salvo(parameters(default_parameter_in = Query, rename_all = "camelCase"))]
pub(crate) struct ModelsQuery {
    /// Case-sensitive substring of the model name
    pub search: Option<String>,

    /// Only models of this category
    pub category_id: Option<String>,

    /// Descendant levels to attach (0-3, default 3)
    pub depth: Option<u8>,
}

impl From<ModelsQuery> for ModelFilter {
    fn from(query: ModelsQuery) -> Self {
        ModelFilter {
            search: query.search,
            category_id: query.category_id.map(Into::into),
        }
    }
}

/// Model Index Handler
///
/// Returns models oldest first, each with its category and brand.
#[endpoint(tags("models"), summary = "List Models", parameters(ModelsQuery))]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<ModelResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let query = req
        .parse_queries::<ModelsQuery>()
        .map_err(|error| ApiError::bad_request(format!("invalid query: {error}")))?;

    let depth = query.depth.into_depth()?;

    let models = state
        .app
        .models
        .list_models(query.into(), depth)
        .await
        .map_err(into_api_error)?;

    Ok(Json(models.into_iter().map(Into::into).collect()))
}
