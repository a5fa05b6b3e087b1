// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// PRINCIPLES:
// - DTOs are simple, serializable structs
// - DTOs never carry invariants; the domain validates
// - Output DTOs are built FROM domain entities only

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Category;

// ============================================================================
// CATEGORY DTOs
// ============================================================================

/// Input for the CreateCategory use case.
/// Missing name/description deserialize to `None` and are rejected by validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

impl CreateCategoryInput {
    pub fn new(name: impl Into<String>, description: impl Into<String>, is_active: bool) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            is_active,
        }
    }
}

/// Projection of a persisted category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryOutput {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Category> for CreateCategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id(),
            name: category.name().to_string(),
            description: category.description().to_string(),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_defaults_to_active() {
        let input: CreateCategoryInput =
            serde_json::from_str(r#"{"name": "Drama", "description": ""}"#).unwrap();
        assert!(input.is_active);
        assert_eq!(input.description.as_deref(), Some(""));
    }

    #[test]
    fn test_input_null_description_stays_none() {
        let input: CreateCategoryInput =
            serde_json::from_str(r#"{"name": "Drama", "description": null, "is_active": false}"#)
                .unwrap();
        assert!(input.description.is_none());
        assert!(!input.is_active);
    }

    #[test]
    fn test_output_mirrors_category() {
        let category = Category::with_status("Thriller", "Suspense", false).unwrap();
        let output = CreateCategoryOutput::from(&category);
        assert_eq!(output.id, category.id());
        assert_eq!(output.name, "Thriller");
        assert_eq!(output.description, "Suspense");
        assert!(!output.is_active);
        assert_eq!(output.created_at, category.created_at());
    }
}
