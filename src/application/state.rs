// src/application/state.rs

use std::sync::Arc;

use crate::application::use_cases::CreateCategoryUseCase;

/// Application state shared with whatever drives the use cases.
/// All fields are Arc-wrapped for thread-safe sharing.
/// Use cases are built by the composition root and passed here.
#[derive(Clone)]
pub struct AppState {
    pub create_category: Arc<dyn CreateCategoryUseCase>,
}
