// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod category;
pub mod clock;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Category Domain
pub use category::{
    validate_category, validate_category_fields, Category, CategoryUpdate,
    DESCRIPTION_MAX_LENGTH, NAME_MAX_LENGTH, NAME_MIN_LENGTH,
};

// Time
pub use clock::{Clock, FixedClock, SystemClock};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// An entity was built or mutated into a state that breaks its invariants.
    /// Displays the bare validation message.
    #[error("{0}")]
    EntityValidation(String),
}

impl DomainError {
    /// Message carried by the error, without any prefix
    pub fn message(&self) -> &str {
        match self {
            DomainError::EntityValidation(message) => message,
        }
    }
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
