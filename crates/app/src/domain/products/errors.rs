//! Products service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::{
    integrity::{CatalogLevel, ForeignKey, IntegrityError},
    validation::ValidationError,
};

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("Product already exists")]
    AlreadyExists,

    #[error("Product not found")]
    NotFound,

    #[error("Model not found")]
    ModelNotFound,

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<IntegrityError> for ProductsServiceError {
    fn from(error: IntegrityError) -> Self {
        match error {
            IntegrityError::ParentNotFound(_) => Self::ModelNotFound,
            // Products own no catalog rows.
            IntegrityError::HasDependents { .. } => Self::InvalidData,
            IntegrityError::Sql(error) => Self::from(error),
        }
    }
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        if let Some(key) = ForeignKey::violated_by(&error) {
            return key.into_integrity_error(CatalogLevel::Product).into();
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::ForeignKeyViolation | ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
