//! Brands Data

use crate::domain::{
    brands::records::BrandId,
    validation::{
        ValidationResult, validate_description, validate_id, validate_if_present, validate_name,
    },
};

/// New Brand Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewBrand {
    pub id: BrandId,
    pub name: String,
    pub description: Option<String>,
}

impl NewBrand {
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn validate(&self) -> ValidationResult {
        validate_id(&self.id)?;
        validate_name(&self.name)?;
        validate_description(self.description.as_deref())
    }
}

/// Brand Update Data
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrandUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl BrandUpdate {
    /// # Errors
    ///
    /// Returns the first supplied field that fails validation.
    pub fn validate(&self) -> ValidationResult {
        validate_if_present(self.name.as_deref(), validate_name)?;
        validate_description(self.description.as_deref())
    }
}

/// Brand list filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandFilter {
    /// Case-sensitive substring of the brand name.
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use crate::domain::validation::ValidationError;

    use super::*;

    #[test]
    fn new_brand_requires_a_name() {
        let brand = NewBrand {
            id: BrandId::from("b1"),
            name: String::new(),
            description: None,
        };

        assert_eq!(
            brand.validate(),
            Err(ValidationError::Required { field: "name" })
        );
    }

    #[test]
    fn empty_update_is_valid() {
        assert!(BrandUpdate::default().validate().is_ok());
    }

    #[test]
    fn update_rejects_blank_name() {
        let update = BrandUpdate {
            name: Some(" ".to_owned()),
            description: None,
        };

        assert!(update.validate().is_err());
    }
}
