//! Categories service errors.

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
pub enum CategoriesServiceError {
    #[error("Category already exists")]
    AlreadyExists,

    #[error("Category not found")]
    NotFound,

    #[error("Brand not found")]
    BrandNotFound,

    #[error("Cannot delete category with existing models. Please delete models first.")]
    HasModels,

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<IntegrityError> for CategoriesServiceError {
    fn from(error: IntegrityError) -> Self {
        match error {
            IntegrityError::ParentNotFound(_) => Self::BrandNotFound,
            IntegrityError::HasDependents { .. } => Self::HasModels,
            IntegrityError::Sql(error) => Self::from(error),
        }
    }
}

impl From<Error> for CategoriesServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        if let Some(key) = ForeignKey::violated_by(&error) {
            return key.into_integrity_error(CatalogLevel::Category).into();
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
    fn missing_brand_reads_as_brand_not_found() {
        let error = CategoriesServiceError::from(IntegrityError::ParentNotFound(CatalogLevel::Brand));

        assert_eq!(error.to_string(), "Brand not found");
    }

    #[test]
    fn own_key_violation_maps_to_brand_not_found() {
        let error: CategoriesServiceError = ForeignKey::CategoryBrand
            .into_integrity_error(CatalogLevel::Category)
            .into();

        assert!(matches!(error, CategoriesServiceError::BrandNotFound));
    }
}
