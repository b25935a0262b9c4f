use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::error::{AppError, Result};

pub const CATEGORY_NAME_MIN: usize = 2;
pub const CATEGORY_NAME_MAX: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub image_url: Option<String>,
}

/// Category names are 2-50 chars of letters, digits, spaces, `-`, `&` or `'`.
/// Violations come back as a per-field error map.
pub fn validate_category_name(name: &str) -> Result<()> {
    let trimmed = name.trim();
    let mut errors = BTreeMap::new();

    let char_count = trimmed.chars().count();
    if char_count < CATEGORY_NAME_MIN || char_count > CATEGORY_NAME_MAX {
        errors.insert(
            "name".to_string(),
            format!(
                "must be between {} and {} characters",
                CATEGORY_NAME_MIN, CATEGORY_NAME_MAX
            ),
        );
    } else if !trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '&' | '\''))
    {
        errors.insert(
            "name".to_string(),
            "may only contain letters, digits, spaces, hyphens, '&' and apostrophes".to_string(),
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

/// Deletion guard: a category that products still reference must survive the
/// delete attempt untouched.
pub fn ensure_category_deletable(referenced_by_products: bool) -> Result<()> {
    if referenced_by_products {
        return Err(AppError::Conflict(
            "Category is still referenced by products".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_names() {
        assert!(validate_category_name("Pain Relief").is_ok());
        assert!(validate_category_name("Vitamins & Supplements").is_ok());
        assert!(validate_category_name("Baby's Care").is_ok());
        assert!(validate_category_name("First-Aid").is_ok());
    }

    #[test]
    fn rejects_too_short_and_too_long() {
        assert!(validate_category_name("A").is_err());
        assert!(validate_category_name(&"x".repeat(51)).is_err());
        assert!(validate_category_name(&"x".repeat(50)).is_ok());
        assert!(validate_category_name("ab").is_ok());
    }

    #[test]
    fn rejects_bad_charset() {
        assert!(validate_category_name("Pills <script>").is_err());
        assert!(validate_category_name("Skin/Care").is_err());
    }

    #[test]
    fn referenced_category_cannot_be_deleted() {
        match ensure_category_deletable(true) {
            Err(AppError::Conflict(_)) => {}
            other => panic!("expected conflict, got {:?}", other.err()),
        }
    }

    #[test]
    fn unreferenced_category_may_be_deleted() {
        assert!(ensure_category_deletable(false).is_ok());
    }

    #[test]
    fn errors_carry_the_field_name() {
        match validate_category_name("!") {
            Err(AppError::Validation(fields)) => assert!(fields.contains_key("name")),
            other => panic!("expected validation error, got {:?}", other.err()),
        }
    }
}
