pub mod entity;
pub mod invariants;

pub use entity::{Category, CategoryUpdate};
pub use invariants::{
    validate_category, validate_category_fields, DESCRIPTION_MAX_LENGTH, NAME_MAX_LENGTH,
    NAME_MIN_LENGTH,
};
