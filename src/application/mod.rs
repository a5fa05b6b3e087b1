// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Sits between callers and the domain
// - Use cases orchestrate entities with repository / unit-of-work collaborators
// - Translates between DTOs and domain entities

pub mod dto;
pub mod error_handling;
pub mod state;
pub mod use_cases;

pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType};
pub use state::AppState;
pub use use_cases::{CreateCategory, CreateCategoryUseCase};
