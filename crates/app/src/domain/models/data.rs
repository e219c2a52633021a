//! Models Data

use crate::domain::{
    categories::records::CategoryId,
    models::records::ModelId,
    validation::{
        ValidationResult, validate_description, validate_id, validate_if_present, validate_name,
    },
};

/// New Model Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewModel {
    pub id: ModelId,
    pub category_id: CategoryId,
    pub name: String,
    pub description: Option<String>,
}

impl NewModel {
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn validate(&self) -> ValidationResult {
        validate_id(&self.id)?;
        validate_id(&self.category_id)?;
        validate_name(&self.name)?;
        validate_description(self.description.as_deref())
    }
}

/// Model Update Data
///
/// Fields left as `None` keep their stored value. Supplying `category_id` moves
/// the model under another category, which must exist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelUpdate {
    pub category_id: Option<CategoryId>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ModelUpdate {
    /// # Errors
    ///
    /// Returns the first supplied field that fails validation.
    pub fn validate(&self) -> ValidationResult {
        validate_if_present(self.category_id.as_ref(), validate_id)?;
        validate_if_present(self.name.as_deref(), validate_name)?;
        validate_description(self.description.as_deref())
    }
}

/// Model list filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelFilter {
    /// Case-sensitive substring of the model name.
    pub search: Option<String>,

    /// Only models of this category.
    pub category_id: Option<CategoryId>,
}
