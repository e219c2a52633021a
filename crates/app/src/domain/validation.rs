//! Field validation shared by the catalog services.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::ids::TypedId;

/// Maximum length of a catalog entry name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum length of a catalog entry description.
pub const MAX_DESCRIPTION_LENGTH: usize = 2_000;

/// Upper bound of a product rating.
pub const MAX_RATING: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: &'static str,
        max: &'static str,
    },
}

pub type ValidationResult = Result<(), ValidationError>;

pub fn validate_id<T>(id: &TypedId<T>) -> ValidationResult {
    if id.is_blank() {
        return Err(ValidationError::Required { field: "id" });
    }

    if id.as_str().chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "id",
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

pub fn validate_name(name: &str) -> ValidationResult {
    if name.trim().is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name",
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

pub fn validate_description(description: Option<&str>) -> ValidationResult {
    match description {
        Some(text) if text.chars().count() > MAX_DESCRIPTION_LENGTH => {
            Err(ValidationError::TooLong {
                field: "description",
                max: MAX_DESCRIPTION_LENGTH,
            })
        }
        _ => Ok(()),
    }
}

/// Ratings are optional; when present they must be a finite value in `[0, 5]`.
pub fn validate_rating(rating: Option<f64>) -> ValidationResult {
    match rating {
        Some(value) if !value.is_finite() || !(0.0..=MAX_RATING).contains(&value) => {
            Err(ValidationError::OutOfRange {
                field: "rating",
                min: "0",
                max: "5",
            })
        }
        _ => Ok(()),
    }
}

/// Money amounts are stored as `NUMERIC` and cannot go below zero.
pub fn validate_amount(field: &'static str, value: Decimal) -> ValidationResult {
    if value < Decimal::ZERO {
        return Err(ValidationError::Negative { field });
    }

    Ok(())
}

/// Integers that are stored as `BIGINT`.
pub fn validate_storable(field: &'static str, value: u64) -> ValidationResult {
    if i64::try_from(value).is_err() {
        return Err(ValidationError::OutOfRange {
            field,
            min: "0",
            max: "9223372036854775807",
        });
    }

    Ok(())
}

/// Validate an optional field only when the caller supplied it.
pub fn validate_if_present<T>(
    value: Option<T>,
    validate: impl FnOnce(T) -> ValidationResult,
) -> ValidationResult {
    value.map_or(Ok(()), validate)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    #[test]
    fn blank_names_are_rejected() {
        assert_eq!(
            validate_name("   "),
            Err(ValidationError::Required { field: "name" })
        );
        assert!(validate_name("Acme").is_ok());
    }

    #[test]
    fn overly_long_names_are_rejected() {
        let name = "a".repeat(MAX_NAME_LENGTH + 1);

        assert!(matches!(
            validate_name(&name),
            Err(ValidationError::TooLong { field: "name", .. })
        ));
    }

    #[test]
    fn blank_ids_are_rejected() {
        assert!(validate_id(&TypedId::<Marker>::from(" ")).is_err());
        assert!(validate_id(&TypedId::<Marker>::from("b1")).is_ok());
    }

    #[test]
    fn descriptions_are_optional() {
        assert!(validate_description(None).is_ok());
        assert!(validate_description(Some("")).is_ok());
        assert!(validate_description(Some(&"d".repeat(MAX_DESCRIPTION_LENGTH + 1))).is_err());
    }

    #[test]
    fn ratings_must_be_within_bounds() {
        assert!(validate_rating(None).is_ok());
        assert!(validate_rating(Some(0.0)).is_ok());
        assert!(validate_rating(Some(5.0)).is_ok());
        assert!(validate_rating(Some(4.5)).is_ok());
        assert!(validate_rating(Some(-0.1)).is_err());
        assert!(validate_rating(Some(5.1)).is_err());
        assert!(validate_rating(Some(f64::NAN)).is_err());
    }

    #[test]
    fn amounts_may_be_fractional_but_not_negative() {
        assert!(validate_amount("price", Decimal::ZERO).is_ok());
        assert!(validate_amount("price", Decimal::new(1_999, 2)).is_ok());
        assert_eq!(
            validate_amount("price", Decimal::new(-1, 2)),
            Err(ValidationError::Negative { field: "price" })
        );
    }

    #[test]
    fn storable_integers_fit_in_bigint() {
        assert!(validate_storable("stockQuantity", 0).is_ok());
        assert!(validate_storable("stockQuantity", u64::MAX).is_err());
    }

    #[test]
    fn absent_values_skip_validation() {
        assert!(validate_if_present(None::<&str>, validate_name).is_ok());
        assert!(validate_if_present(Some(""), validate_name).is_err());
    }
}
