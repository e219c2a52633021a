//! Product Errors

use tracing::error;

use inventory_app::domain::products::ProductsServiceError;

use crate::{
    errors::ApiError,
    observability::{Refusal, record_refusal},
};

pub(crate) fn into_api_error(error: ProductsServiceError) -> ApiError {
    match error {
        error @ ProductsServiceError::AlreadyExists => ApiError::conflict(error.to_string()),
        error @ ProductsServiceError::NotFound => ApiError::not_found(error.to_string()),
        error @ ProductsServiceError::ModelNotFound => {
            record_refusal("product", Refusal::ParentMissing);

            ApiError::bad_request(error.to_string())
        }
        ProductsServiceError::Invalid(source) => ApiError::bad_request(source.to_string()),
        ProductsServiceError::MissingRequiredData | ProductsServiceError::InvalidData => {
            ApiError::bad_request("Invalid product payload")
        }
        ProductsServiceError::Sql(source) => {
            error!("product storage failure: {source}");

            ApiError::internal()
        }
    }
}
