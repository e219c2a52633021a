//! Integrity errors.

use thiserror::Error;

use super::CatalogLevel;

#[derive(Debug, Error)]
pub enum IntegrityError {
    #[error("{} not found", .0.title())]
    ParentNotFound(CatalogLevel),

    #[error(
        "Cannot delete {owner} with existing {}. Please delete {} first.",
        .dependents.plural(),
        .dependents.plural()
    )]
    HasDependents {
        owner: CatalogLevel,
        dependents: CatalogLevel,
    },

    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_not_found_names_the_parent() {
        assert_eq!(
            IntegrityError::ParentNotFound(CatalogLevel::Brand).to_string(),
            "Brand not found"
        );
    }

    #[test]
    fn has_dependents_names_the_blocking_children() {
        let error = IntegrityError::HasDependents {
            owner: CatalogLevel::Model,
            dependents: CatalogLevel::Product,
        };

        assert_eq!(
            error.to_string(),
            "Cannot delete model with existing products. Please delete products first."
        );
    }
}
