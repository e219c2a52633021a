//! Category Errors

use tracing::error;

use inventory_app::domain::categories::CategoriesServiceError;

use crate::{
    errors::ApiError,
    observability::{Refusal, record_refusal},
};

pub(crate) fn into_api_error(error: CategoriesServiceError) -> ApiError {
    match error {
        error @ CategoriesServiceError::AlreadyExists => ApiError::conflict(error.to_string()),
        error @ CategoriesServiceError::NotFound => ApiError::not_found(error.to_string()),
        error @ CategoriesServiceError::BrandNotFound => {
            record_refusal("category", Refusal::ParentMissing);

            ApiError::bad_request(error.to_string())
        }
        error @ CategoriesServiceError::HasModels => {
            record_refusal("category", Refusal::HasDependents);

            ApiError::bad_request(error.to_string())
        }
        CategoriesServiceError::Invalid(source) => ApiError::bad_request(source.to_string()),
        CategoriesServiceError::MissingRequiredData | CategoriesServiceError::InvalidData => {
            ApiError::bad_request("Invalid category payload")
        }
        CategoriesServiceError::Sql(source) => {
            error!("category storage failure: {source}");

            ApiError::internal()
        }
    }
}
