// src/repositories/mod.rs
//
// Repository layer
//
// RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO cross-repository calls
// - Side effects become durable only through a UnitOfWork commit

pub mod category_repository;
pub mod in_memory;
pub mod unit_of_work;

pub use category_repository::CategoryRepository;
pub use in_memory::{InMemoryCategoryRepository, InMemoryStore, InMemoryUnitOfWork};
pub use unit_of_work::UnitOfWork;

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use unit_of_work::MockUnitOfWork;
