//! Products Data

use rust_decimal::Decimal;

use crate::domain::{
    models::records::ModelId,
    products::records::ProductId,
    validation::{
        ValidationResult, validate_amount, validate_id, validate_if_present, validate_name,
        validate_rating, validate_storable,
    },
};

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub id: ProductId,
    pub model_id: ModelId,
    pub name: String,

    pub price: Decimal,
    pub stock_quantity: u64,
    pub rating: Option<f64>,
}

impl NewProduct {
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn validate(&self) -> ValidationResult {
        validate_id(&self.id)?;
        validate_id(&self.model_id)?;
        validate_name(&self.name)?;
        validate_amount("price", self.price)?;
        validate_storable("stockQuantity", self.stock_quantity)?;
        validate_rating(self.rating)
    }
}

/// Product Update Data
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub model_id: Option<ModelId>,
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub stock_quantity: Option<u64>,
    pub rating: Option<f64>,
}

impl ProductUpdate {
    /// # Errors
    ///
    /// Returns the first supplied field that fails validation.
    pub fn validate(&self) -> ValidationResult {
        validate_if_present(self.model_id.as_ref(), validate_id)?;
        validate_if_present(self.name.as_deref(), validate_name)?;
        validate_if_present(self.price, |price| validate_amount("price", price))?;
        validate_if_present(self.stock_quantity, |stock| {
            validate_storable("stockQuantity", stock)
        })?;
        validate_rating(self.rating)
    }
}

/// Product list filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Case-sensitive substring of the product name.
    pub search: Option<String>,

    /// Only products of this model.
    pub model_id: Option<ModelId>,
}

#[cfg(test)]
mod tests {
    use crate::domain::validation::ValidationError;

    use super::*;

    fn new_product() -> NewProduct {
        NewProduct {
            id: ProductId::from("p1"),
            model_id: ModelId::from("m1"),
            name: "Widget".to_owned(),
            price: Decimal::new(1_999, 2),
            stock_quantity: 3,
            rating: Some(4.5),
        }
    }

    #[test]
    fn valid_product_passes() {
        assert!(new_product().validate().is_ok());
    }

    #[test]
    fn rating_above_five_is_rejected() {
        let product = NewProduct {
            rating: Some(5.5),
            ..new_product()
        };

        assert!(matches!(
            product.validate(),
            Err(ValidationError::OutOfRange { field: "rating", .. })
        ));
    }

    #[test]
    fn negative_price_is_rejected() {
        let product = NewProduct {
            price: Decimal::new(-1, 0),
            ..new_product()
        };

        assert_eq!(
            product.validate(),
            Err(ValidationError::Negative { field: "price" })
        );
    }

    #[test]
    fn free_products_are_allowed() {
        let product = NewProduct {
            price: Decimal::ZERO,
            ..new_product()
        };

        assert!(product.validate().is_ok());
    }

    #[test]
    fn update_validates_only_supplied_fields() {
        assert!(ProductUpdate::default().validate().is_ok());

        let update = ProductUpdate {
            stock_quantity: Some(u64::MAX),
            ..ProductUpdate::default()
        };

        assert!(matches!(
            update.validate(),
            Err(ValidationError::OutOfRange {
                field: "stockQuantity",
                ..
            })
        ));
    }
}
