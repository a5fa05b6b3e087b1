//! Shared fixtures for category integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use movie_catalog::{
    CreateCategory, CreateCategoryInput, InMemoryCategoryRepository, InMemoryStore,
    InMemoryUnitOfWork, SystemClock,
};

const CATEGORY_NAMES: &[&str] = &[
    "Action",
    "Adventure",
    "Animation",
    "Biography",
    "Crime",
    "Documentary",
    "Film Noir",
    "Science Fiction",
];

const CATEGORY_DESCRIPTIONS: &[&str] = &[
    "Fast paced films built around physical feats and chases.",
    "Journeys to unfamiliar places, usually with a quest at the centre.",
    "",
    "Stories that follow a single protagonist through a long arc of change.",
];

/// A name within the accepted length range, picked by index.
pub fn valid_category_name(seed: usize) -> String {
    CATEGORY_NAMES[seed % CATEGORY_NAMES.len()].to_string()
}

/// A description within the accepted length range, picked by index.
pub fn valid_category_description(seed: usize) -> String {
    CATEGORY_DESCRIPTIONS[seed % CATEGORY_DESCRIPTIONS.len()].to_string()
}

pub fn valid_input(seed: usize) -> CreateCategoryInput {
    CreateCategoryInput::new(
        valid_category_name(seed),
        valid_category_description(seed),
        seed % 2 == 0,
    )
}

/// Use case wired to a fresh in-memory store.
pub fn in_memory_use_case() -> (CreateCategory, Arc<InMemoryStore>) {
    let store = InMemoryStore::new();
    let use_case = CreateCategory::new(
        Arc::new(InMemoryCategoryRepository::new(store.clone())),
        Arc::new(InMemoryUnitOfWork::new(store.clone())),
        Arc::new(SystemClock),
    );
    (use_case, store)
}
