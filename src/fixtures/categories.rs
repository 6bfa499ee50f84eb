//! Category Fixtures

use serde::Deserialize;

use crate::{categories::Category, fixtures::FixtureError};

/// Wrapper for categories in YAML
#[derive(Debug, Deserialize)]
pub struct CategoriesFixture {
    /// Categories in display order
    pub categories: Vec<CategoryFixture>,
}

/// Category Fixture
#[derive(Debug, Deserialize)]
pub struct CategoryFixture {
    /// Category identifier
    pub id: String,

    /// Display name
    pub name: String,
}

impl TryFrom<CategoryFixture> for Category {
    type Error = FixtureError;

    fn try_from(fixture: CategoryFixture) -> Result<Self, Self::Error> {
        Ok(Category::new(fixture.id, fixture.name)?)
    }
}
