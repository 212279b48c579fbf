//! Pose catalog constants and validation.

use crate::error::CoreError;

/// Valid difficulty levels for a pose.
pub const VALID_DIFFICULTIES: &[&str] = &["beginner", "intermediate", "advanced"];

/// Valid pose categories.
pub const VALID_CATEGORIES: &[&str] = &[
    "standing",
    "seated",
    "balancing",
    "backbend",
    "forward_fold",
    "twist",
    "inversion",
    "restorative",
];

/// Validate a difficulty filter value.
pub fn validate_difficulty(difficulty: &str) -> Result<(), CoreError> {
    if VALID_DIFFICULTIES.contains(&difficulty) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid difficulty '{difficulty}'. Must be one of: {}",
            VALID_DIFFICULTIES.join(", ")
        )))
    }
}

/// Validate a category filter value.
pub fn validate_category(category: &str) -> Result<(), CoreError> {
    if VALID_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid category '{category}'. Must be one of: {}",
            VALID_CATEGORIES.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_difficulties_are_valid() {
        assert!(validate_difficulty("beginner").is_ok());
        assert!(validate_difficulty("intermediate").is_ok());
        assert!(validate_difficulty("advanced").is_ok());
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        let err = validate_difficulty("expert").unwrap_err();
        assert!(err.to_string().contains("expert"));
    }

    #[test]
    fn known_categories_are_valid() {
        for c in VALID_CATEGORIES {
            assert!(validate_category(c).is_ok());
        }
    }

    #[test]
    fn empty_category_is_rejected() {
        assert!(validate_category("").is_err());
    }
}
