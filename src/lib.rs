// src/lib.rs
// Movie Catalog - category core
//
// Architecture:
// - Domain-centric: validation and mutation rules live on the entity
// - Use cases orchestrate entities with repository / unit-of-work collaborators
// - Explicit: no implicit behavior, time and persistence are injected

pub mod application;
pub mod domain;
pub mod error;
pub mod repositories;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_category, validate_category_fields, Category, CategoryUpdate, Clock, DomainError,
    DomainResult, FixedClock, SystemClock, DESCRIPTION_MAX_LENGTH, NAME_MAX_LENGTH,
    NAME_MIN_LENGTH,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    CategoryRepository, InMemoryCategoryRepository, InMemoryStore, InMemoryUnitOfWork,
    UnitOfWork,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{
    AppState, CreateCategory, CreateCategoryInput, CreateCategoryOutput, CreateCategoryUseCase,
    ErrorResponse, ErrorType,
};
