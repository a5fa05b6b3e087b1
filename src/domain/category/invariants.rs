use super::entity::Category;
use crate::domain::{DomainError, DomainResult};

/// Shortest accepted category name, in UTF-16 code units
pub const NAME_MIN_LENGTH: usize = 3;

/// Longest accepted category name, in UTF-16 code units
pub const NAME_MAX_LENGTH: usize = 255;

/// Longest accepted category description, in UTF-16 code units
pub const DESCRIPTION_MAX_LENGTH: usize = 10_000;

/// Validates all Category invariants on an existing instance
pub fn validate_category(category: &Category) -> DomainResult<()> {
    validate_category_fields(Some(category.name()), Some(category.description()))
}

/// Validates raw Category field values.
///
/// Checks run in a fixed order and only the first violation is reported:
/// name presence, name minimum, name maximum, description presence,
/// description maximum.
pub fn validate_category_fields(name: Option<&str>, description: Option<&str>) -> DomainResult<()> {
    validate_name(name)?;
    validate_description(description)?;
    Ok(())
}

fn validate_name(name: Option<&str>) -> DomainResult<()> {
    let name = match name {
        Some(n) if !n.trim().is_empty() => n,
        _ => return Err(violation("Name should not be empty or null.")),
    };

    let length = text_length(name);
    if length < NAME_MIN_LENGTH {
        return Err(violation(format!(
            "Name should not be less than {} characters long",
            NAME_MIN_LENGTH
        )));
    }
    if length > NAME_MAX_LENGTH {
        return Err(violation(format!(
            "Name should not be greater than {} characters long",
            NAME_MAX_LENGTH
        )));
    }
    Ok(())
}

fn validate_description(description: Option<&str>) -> DomainResult<()> {
    let description = description.ok_or_else(|| violation("Description should not be null"))?;

    if text_length(description) > DESCRIPTION_MAX_LENGTH {
        return Err(violation(format!(
            "Description should not be greater than {} characters long",
            DESCRIPTION_MAX_LENGTH
        )));
    }
    Ok(())
}

/// Length in UTF-16 code units, so characters outside the Basic
/// Multilingual Plane count twice
fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

fn violation(message: impl Into<String>) -> DomainError {
    DomainError::EntityValidation(message.into())
}

/// Critical Category Invariants:
///
/// 1. Identity (UUID) is immutable
/// 2. Created timestamp never changes
/// 3. Name is present and not whitespace-only
/// 4. Name length is within 3..=255 characters
/// 5. Description is present (empty is allowed)
/// 6. Description length is at most 10000 characters
/// 7. A failed update leaves the previous state in place
