//! Category Index Handler

use std::sync::Arc;

use salvo::{oapi::ToParameters, prelude::*};
use serde::Deserialize;

use inventory_app::domain::categories::data::CategoryFilter;

use crate::{
    categories::{errors::into_api_error, responses::CategoryResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Category list query
#[derive(Debug, Deserialize, ToParameters)]
#[serde(rename_all = "camelCase")]
#[salvo(parameters(default_parameter_in = Query, rename_all = "camelCase"))]
pub(crate) struct CategoriesQuery {
    /// Case-sensitive substring of the category name
    pub search: Option<String>,

    /// Only categories of this brand
    pub brand_id: Option<String>,

    /// Descendant levels to attach (0-3, default 3)
    pub depth: Option<u8>,
}

impl From<CategoriesQuery> for CategoryFilter {
    fn from(query: CategoriesQuery) -> Self {
        CategoryFilter {
            search: query.search,
            brand_id: query.brand_id.map(Into::into),
        }
    }
}

/// Category Index Handler
///
/// Returns categories oldest first, each with its brand.
#[endpoint(tags("categories"), summary = "List Categories", parameters(CategoriesQuery))]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let query = req
        .parse_queries::<CategoriesQuery>()
        .map_err(|error| ApiError::bad_request(format!("invalid query: {error}")))?;

    let depth = query.depth.into_depth()?;

    let categories = state
        .app
        .categories
        .list_categories(query.into(), depth)
        .await
        .map_err(into_api_error)?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}
