//! Referential integrity for the catalog hierarchy.
//!
//! Every guarded write runs its checks inside the transaction that performs
//! the write. Parent rows are share-locked before a child references them and
//! owner rows are locked for update before their dependents are counted, so
//! a concurrent writer cannot slip in between the check and the write. The
//! named foreign keys in the schema remain as a last line of defence and are
//! mapped back to the same domain errors through [`ForeignKey`].

mod errors;
mod repository;

use std::fmt::{Display, Formatter, Result as FmtResult};

use sqlx::error::ErrorKind;

use crate::domain::{brands::records::BrandId, categories::records::CategoryId, models::records::ModelId};

pub use errors::IntegrityError;
pub(crate) use repository::PgReferentialIntegrity;

/// A level of the catalog hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogLevel {
    Brand,
    Category,
    Model,
    Product,
}

impl CatalogLevel {
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Category => "category",
            Self::Model => "model",
            Self::Product => "product",
        }
    }

    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Brand => "brands",
            Self::Category => "categories",
            Self::Model => "models",
            Self::Product => "products",
        }
    }

    /// Capitalised name used in user-facing messages.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Brand => "Brand",
            Self::Category => "Category",
            Self::Model => "Model",
            Self::Product => "Product",
        }
    }

    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::Brand => None,
            Self::Category => Some(Self::Brand),
            Self::Model => Some(Self::Category),
            Self::Product => Some(Self::Model),
        }
    }

    #[must_use]
    pub const fn child(self) -> Option<Self> {
        match self {
            Self::Brand => Some(Self::Category),
            Self::Category => Some(Self::Model),
            Self::Model => Some(Self::Product),
            Self::Product => None,
        }
    }
}

impl Display for CatalogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.singular())
    }
}

/// A reference to a catalog row that can own children.
#[derive(Debug, Clone, Copy)]
pub(crate) enum CatalogRef<'a> {
    Brand(&'a BrandId),
    Category(&'a CategoryId),
    Model(&'a ModelId),
}

impl CatalogRef<'_> {
    pub(crate) const fn level(self) -> CatalogLevel {
        match self {
            Self::Brand(_) => CatalogLevel::Brand,
            Self::Category(_) => CatalogLevel::Category,
            Self::Model(_) => CatalogLevel::Model,
        }
    }

    /// The level whose rows reference this one.
    pub(crate) const fn dependents(self) -> CatalogLevel {
        match self {
            Self::Brand(_) => CatalogLevel::Category,
            Self::Category(_) => CatalogLevel::Model,
            Self::Model(_) => CatalogLevel::Product,
        }
    }

    pub(crate) fn id(&self) -> &str {
        match self {
            Self::Brand(id) => id.as_str(),
            Self::Category(id) => id.as_str(),
            Self::Model(id) => id.as_str(),
        }
    }
}

/// Named foreign keys of the catalog schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ForeignKey {
    CategoryBrand,
    ModelCategory,
    ProductModel,
}

impl ForeignKey {
    const ALL: [Self; 3] = [Self::CategoryBrand, Self::ModelCategory, Self::ProductModel];

    pub(crate) const fn constraint(self) -> &'static str {
        match self {
            Self::CategoryBrand => "categories_brand_id_fkey",
            Self::ModelCategory => "models_category_id_fkey",
            Self::ProductModel => "products_model_id_fkey",
        }
    }

    /// The referenced (parent) level.
    pub(crate) const fn parent(self) -> CatalogLevel {
        match self {
            Self::CategoryBrand => CatalogLevel::Brand,
            Self::ModelCategory => CatalogLevel::Category,
            Self::ProductModel => CatalogLevel::Model,
        }
    }

    /// The referencing (child) level.
    pub(crate) const fn child(self) -> CatalogLevel {
        match self {
            Self::CategoryBrand => CatalogLevel::Category,
            Self::ModelCategory => CatalogLevel::Model,
            Self::ProductModel => CatalogLevel::Product,
        }
    }

    /// The catalog foreign key a storage error violated, if any.
    pub(crate) fn violated_by(error: &sqlx::Error) -> Option<Self> {
        let database_error = error.as_database_error()?;

        if !matches!(database_error.kind(), ErrorKind::ForeignKeyViolation) {
            return None;
        }

        let constraint = database_error.constraint()?;

        Self::ALL
            .into_iter()
            .find(|key| key.constraint() == constraint)
    }

    /// Translate a violation raised while writing `level` into the error the
    /// explicit checks would have produced.
    pub(crate) fn into_integrity_error(self, level: CatalogLevel) -> IntegrityError {
        if self.child() == level {
            IntegrityError::ParentNotFound(self.parent())
        } else {
            IntegrityError::HasDependents {
                owner: self.parent(),
                dependents: self.child(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_chain_in_both_directions() {
        assert_eq!(CatalogLevel::Brand.child(), Some(CatalogLevel::Category));
        assert_eq!(CatalogLevel::Product.child(), None);
        assert_eq!(CatalogLevel::Product.parent(), Some(CatalogLevel::Model));
        assert_eq!(CatalogLevel::Brand.parent(), None);
    }

    #[test]
    fn catalog_ref_reports_dependents() {
        let brand = BrandId::from("b1");

        let owner = CatalogRef::Brand(&brand);

        assert_eq!(owner.level(), CatalogLevel::Brand);
        assert_eq!(owner.dependents(), CatalogLevel::Category);
        assert_eq!(owner.id(), "b1");
    }

    #[test]
    fn violation_on_own_parent_key_is_parent_not_found() {
        let error = ForeignKey::CategoryBrand.into_integrity_error(CatalogLevel::Category);

        assert!(
            matches!(error, IntegrityError::ParentNotFound(CatalogLevel::Brand)),
            "expected ParentNotFound(Brand), got {error:?}"
        );
    }

    #[test]
    fn violation_on_child_key_is_has_dependents() {
        let error = ForeignKey::CategoryBrand.into_integrity_error(CatalogLevel::Brand);

        assert!(
            matches!(
                error,
                IntegrityError::HasDependents {
                    owner: CatalogLevel::Brand,
                    dependents: CatalogLevel::Category,
                }
            ),
            "expected HasDependents, got {error:?}"
        );
    }

    #[test]
    fn non_database_errors_are_not_violations() {
        assert_eq!(ForeignKey::violated_by(&sqlx::Error::RowNotFound), None);
    }
}
