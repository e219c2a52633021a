//! Models service errors.

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
pub enum ModelsServiceError {
    #[error("Model already exists")]
    AlreadyExists,

    #[error("Model not found")]
    NotFound,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Cannot delete model with existing products. Please delete products first.")]
    HasProducts,

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<IntegrityError> for ModelsServiceError {
    fn from(error: IntegrityError) -> Self {
        match error {
            IntegrityError::ParentNotFound(_) => Self::CategoryNotFound,
            IntegrityError::HasDependents { .. } => Self::HasProducts,
            IntegrityError::Sql(error) => Self::from(error),
        }
    }
}

impl From<Error> for ModelsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        if let Some(key) = ForeignKey::violated_by(&error) {
            return key.into_integrity_error(CatalogLevel::Model).into();
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::ForeignKeyViolation | ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
