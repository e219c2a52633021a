//! Brands service errors.

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
pub enum BrandsServiceError {
    #[error("Brand already exists")]
    AlreadyExists,

    #[error("Brand not found")]
    NotFound,

    #[error("Cannot delete brand with existing categories. Please delete categories first.")]
    HasCategories,

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<IntegrityError> for BrandsServiceError {
    fn from(error: IntegrityError) -> Self {
        match error {
            IntegrityError::HasDependents { .. } => Self::HasCategories,
            IntegrityError::ParentNotFound(_) => Self::NotFound,
            IntegrityError::Sql(error) => Self::from(error),
        }
    }
}

impl From<Error> for BrandsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        if let Some(key) = ForeignKey::violated_by(&error) {
            return key.into_integrity_error(CatalogLevel::Brand).into();
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::ForeignKeyViolation | ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        assert!(matches!(
            BrandsServiceError::from(Error::RowNotFound),
            BrandsServiceError::NotFound
        ));
    }

    #[test]
    fn dependents_map_to_has_categories() {
        let error = IntegrityError::HasDependents {
            owner: CatalogLevel::Brand,
            dependents: CatalogLevel::Category,
        };

        assert!(matches!(
            BrandsServiceError::from(error),
            BrandsServiceError::HasCategories
        ));
    }
}
