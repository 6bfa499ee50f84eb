//! Menu Fixtures

use serde::Deserialize;

use crate::{fixtures::FixtureError, navigation::MenuItem};

/// Wrapper for menu entries in YAML
#[derive(Debug, Deserialize)]
pub struct MenuFixture {
    /// Menu entries in display order
    pub menu: Vec<MenuItemFixture>,
}

/// Menu Item Fixture
#[derive(Debug, Deserialize)]
pub struct MenuItemFixture {
    /// Text shown in the menu
    pub label: String,

    /// Emoji icon
    #[serde(default)]
    pub icon: String,

    /// Route path
    pub href: String,
}

impl TryFrom<MenuItemFixture> for MenuItem {
    type Error = FixtureError;

    fn try_from(fixture: MenuItemFixture) -> Result<Self, Self::Error> {
        Ok(MenuItem::new(fixture.label, fixture.icon, fixture.href)?)
    }
}
