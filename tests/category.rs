//! Category entity behaviour through the public crate API.

mod common;

use movie_catalog::{Category, CategoryUpdate, DomainError, NAME_MAX_LENGTH};

#[test]
fn fixture_values_build_valid_categories() {
    for seed in 0..8 {
        let category = Category::new(
            common::valid_category_name(seed),
            common::valid_category_description(seed),
        )
        .unwrap();
        assert!(category.validate().is_ok());
        assert!(category.is_active());
    }
}

#[test]
fn lifecycle_activate_update_deactivate() {
    let mut category = Category::with_status(
        common::valid_category_name(2),
        common::valid_category_description(2),
        false,
    )
    .unwrap();

    category.activate();
    assert!(category.is_active());

    category
        .update(CategoryUpdate::name("Animated Features"))
        .unwrap();
    assert_eq!(category.name(), "Animated Features");
    assert_eq!(category.description(), common::valid_category_description(2));

    category.deactivate();
    assert!(!category.is_active());
}

#[test]
fn update_rejects_name_over_limit() {
    let mut category = Category::new(
        common::valid_category_name(0),
        common::valid_category_description(0),
    )
    .unwrap();

    let error = category
        .update(CategoryUpdate::name("x".repeat(NAME_MAX_LENGTH + 1)))
        .unwrap_err();

    assert_eq!(
        error,
        DomainError::EntityValidation(
            "Name should not be greater than 255 characters long".to_string()
        )
    );
    assert_eq!(category.name(), common::valid_category_name(0));
}
