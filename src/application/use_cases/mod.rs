// src/application/use_cases/mod.rs
//
// Use Cases - Orchestration Layer

pub mod create_category;


pub use create_category::{CreateCategory, CreateCategoryUseCase};
