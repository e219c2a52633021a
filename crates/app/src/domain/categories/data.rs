//! Categories Data

use crate::domain::{
    brands::records::BrandId,
    categories::records::CategoryId,
    validation::{
        ValidationResult, validate_description, validate_id, validate_if_present, validate_name,
    },
};

/// New Category Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub id: CategoryId,
    pub brand_id: BrandId,
    pub name: String,
    pub description: Option<String>,
}

impl NewCategory {
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn validate(&self) -> ValidationResult {
        validate_id(&self.id)?;
        validate_id(&self.brand_id)?;
        validate_name(&self.name)?;
        validate_description(self.description.as_deref())
    }
}

/// Category Update Data
///
/// Fields left as `None` keep their stored value. Supplying `brand_id` moves
/// the category under another brand, which must exist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryUpdate {
    pub brand_id: Option<BrandId>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CategoryUpdate {
    /// # Errors
    ///
    /// Returns the first supplied field that fails validation.
    pub fn validate(&self) -> ValidationResult {
        validate_if_present(self.brand_id.as_ref(), validate_id)?;
        validate_if_present(self.name.as_deref(), validate_name)?;
        validate_description(self.description.as_deref())
    }
}

/// Category list filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    /// Case-sensitive substring of the category name.
    pub search: Option<String>,

    /// Only categories of this brand.
    pub brand_id: Option<BrandId>,
}
