//! Model Errors

use tracing::error;

use inventory_app::domain::models::ModelsServiceError;

use crate::{
    errors::ApiError,
    observability::{Refusal, record_refusal},
};

pub(crate) fn into_api_error(error: ModelsServiceError) -> ApiError {
    match error {
        error @ ModelsServiceError::AlreadyExists => ApiError::conflict(error.to_string()),
        error @ ModelsServiceError::NotFound => ApiError::not_found(error.to_string()),
        error @ ModelsServiceError::CategoryNotFound => {
            record_refusal("model", Refusal::ParentMissing);

            ApiError::bad_request(error.to_string())
        }
        error @ ModelsServiceError::HasProducts => {
            record_refusal("model", Refusal::HasDependents);

            ApiError::bad_request(error.to_string())
        }
        ModelsServiceError::Invalid(source) => ApiError::bad_request(source.to_string()),
        ModelsServiceError::MissingRequiredData | ModelsServiceError::InvalidData => {
            ApiError::bad_request("Invalid model payload")
        }
        ModelsServiceError::Sql(source) => {
            error!("model storage failure: {source}");

            ApiError::internal()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn missing_category_is_a_bad_request() {
        let error = into_api_error(ModelsServiceError::CategoryNotFound);

        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.message(), "Category not found");
    }

    #[test]
    fn duplicate_model_is_a_conflict() {
        assert_eq!(
            into_api_error(ModelsServiceError::AlreadyExists).status(),
            StatusCode::CONFLICT
        );
    }
}
