//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use inventory_app::domain::products::data::ProductUpdate;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{errors::into_api_error, responses::ProductResponse},
    state::State,
};

/// Update Product Request
///
/// Omitted fields keep their stored value.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct UpdateProductRequest {
    pub model_id: Option<String>,
    pub name: Option<String>,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[salvo(schema(value_type = Option<f64>))]
    pub price: Option<Decimal>,
    pub stock_quantity: Option<u64>,
    pub rating: Option<f64>,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            model_id: request.model_id.map(Into::into),
            name: request.name,
            price: request.price,
            stock_quantity: request.stock_quantity,
            rating: request.rating,
        }
    }
}

/// Product Update Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Model not found or invalid payload"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(id, json, depot),
    fields(
        product_id = %id.as_str(),
        price = tracing::field::Empty,
        stock_quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let span = tracing::Span::current();

    if let Some(price) = request.price {
        span.record("price", tracing::field::display(price));
    }

    if let Some(stock_quantity) = request.stock_quantity {
        span.record("stock_quantity", stock_quantity);
    }

    let product = state
        .app
        .products
        .update_product(id.into_inner().into(), request.into())
        .await
        .map_err(into_api_error)?;

    tracing::info!(product_id = %product.id, price = %product.price, "updated product");

    Ok(Json(product.into()))
}
