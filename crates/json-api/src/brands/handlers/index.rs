//! Brand Index Handler

use std::sync::Arc;

use salvo::{oapi::ToParameters, prelude::*};
use serde::Deserialize;

use inventory_app::domain::brands::data::BrandFilter;

use crate::{
    brands::{errors::into_api_error, responses::BrandResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Brand list query
#[derive(Debug, Deserialize, ToParameters)]
#[serde(rename_all = "camelCase")]
#[salvo(parameters(default_parameter_in = Query, rename_all = "camelCase"))]
pub(crate) struct BrandsQuery {
    /// Case-sensitive substring of the brand name
    pub search: Option<String>,

    /// Descendant levels to attach (0-3, default 3)
    pub depth: Option<u8>,
}

/// Brand Index Handler
///
/// Returns brands oldest first.
#[endpoint(tags("brands"), summary = "List Brands", parameters(BrandsQuery))]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<BrandResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let query = req
        .parse_queries::<BrandsQuery>()
        .map_err(|error| ApiError::bad_request(format!("invalid query: {error}")))?;

    let depth = query.depth.into_depth()?;

    let brands = state
        .app
        .brands
        .list_brands(
            BrandFilter {
                search: query.search,
            },
            depth,
        )
        .await
        .map_err(into_api_error)?;

    Ok(Json(brands.into_iter().map(Into::into).collect()))
}
