use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::invariants::{validate_category, validate_category_fields};
use crate::domain::clock::{Clock, SystemClock};
use crate::domain::DomainResult;

/// Classification entity for catalog items.
///
/// Fields are private: every way of obtaining or mutating a `Category`
/// goes through validation, so an instance in memory is always valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Internal immutable identifier
    id: Uuid,

    /// Display name, 3 to 255 characters
    name: String,

    /// Free text, may be empty, at most 10000 characters
    description: String,

    /// Whether the category is offered for classification
    is_active: bool,

    /// Creation timestamp
    created_at: DateTime<Utc>,
}

/// Partial change set for [`Category::update`].
///
/// Outer `None` leaves the field untouched, `Some(None)` sets it to null
/// (which validation then rejects), `Some(Some(v))` overwrites it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryUpdate {
    pub name: Option<Option<String>>,
    pub description: Option<Option<String>>,
}

impl CategoryUpdate {
    /// Change only the name
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(Some(name.into())),
            description: None,
        }
    }

    /// Change only the description
    pub fn description(description: impl Into<String>) -> Self {
        Self {
            name: None,
            description: Some(Some(description.into())),
        }
    }

    /// Also change the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }
}

impl Category {
    /// Create an active Category stamped with the system clock
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> DomainResult<Self> {
        Self::with_status(name, description, true)
    }

    /// Create a Category with an explicit activation flag
    pub fn with_status(
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) -> DomainResult<Self> {
        Self::create(
            Some(name.into()),
            Some(description.into()),
            is_active,
            &SystemClock,
        )
    }

    /// Create a Category from possibly-missing fields.
    /// This is the constructor the others delegate to; validation runs
    /// before any identity is assigned.
    pub fn create(
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
        clock: &dyn Clock,
    ) -> DomainResult<Self> {
        validate_category_fields(name.as_deref(), description.as_deref())?;

        let category = Self {
            id: Uuid::new_v4(),
            name: name.unwrap_or_default(),
            description: description.unwrap_or_default(),
            is_active,
            created_at: clock.now(),
        };

        log::debug!("Category {} created ({})", category.id, category.name);
        Ok(category)
    }

    /// Rebuild a previously stored Category, re-checking its invariants
    pub fn restore(
        id: Uuid,
        name: String,
        description: String,
        is_active: bool,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let category = Self {
            id,
            name,
            description,
            is_active,
            created_at,
        };
        category.validate()?;
        Ok(category)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Re-check invariants on the current state
    pub fn validate(&self) -> DomainResult<()> {
        validate_category(self)
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Apply a partial update.
    /// The resulting state is validated first; on error nothing changes.
    pub fn update(&mut self, changes: CategoryUpdate) -> DomainResult<()> {
        let name = match changes.name {
            Some(name) => name,
            None => Some(self.name.clone()),
        };
        let description = match changes.description {
            Some(description) => description,
            None => Some(self.description.clone()),
        };

        validate_category_fields(name.as_deref(), description.as_deref())?;

        self.name = name.unwrap_or_default();
        self.description = description.unwrap_or_default();

        log::debug!("Category {} updated", self.id);
        Ok(())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
