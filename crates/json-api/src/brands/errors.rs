//! Brand Errors

use tracing::error;

use inventory_app::domain::brands::BrandsServiceError;

use crate::{
    errors::ApiError,
    observability::{Refusal, record_refusal},
};

pub(crate) fn into_api_error(error: BrandsServiceError) -> ApiError {
    match error {
        error @ BrandsServiceError::AlreadyExists => ApiError::conflict(error.to_string()),
        error @ BrandsServiceError::NotFound => ApiError::not_found(error.to_string()),
        error @ BrandsServiceError::HasCategories => {
            record_refusal("brand", Refusal::HasDependents);

            ApiError::bad_request(error.to_string())
        }
        BrandsServiceError::Invalid(source) => ApiError::bad_request(source.to_string()),
        BrandsServiceError::MissingRequiredData | BrandsServiceError::InvalidData => {
            ApiError::bad_request("Invalid brand payload")
        }
        BrandsServiceError::Sql(source) => {
            error!("brand storage failure: {source}");

            ApiError::internal()
        }
    }
}
