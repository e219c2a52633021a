//! Create Brand Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use inventory_app::domain::brands::{data::NewBrand, records::BrandId};

use crate::{
    brands::{errors::into_api_error, responses::BrandResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Create Brand Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateBrandRequest {
    /// Caller-chosen id, generated when omitted
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<CreateBrandRequest> for NewBrand {
    fn from(request: CreateBrandRequest) -> Self {
        NewBrand {
            id: request.id.map_or_else(BrandId::generate, BrandId::from),
            name: request.name,
            description: request.description,
        }
    }
}

/// Create Brand Handler
#[endpoint(
    tags("brands"),
    summary = "Create Brand",
    responses(
        (status_code = StatusCode::CREATED, description = "Brand created"),
        (status_code = StatusCode::CONFLICT, description = "Brand already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateBrandRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BrandResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let brand = state
        .app
        .brands
        .create_brand(json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    res.add_header(LOCATION, format!("/brands/{}", brand.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(brand.into()))
}
