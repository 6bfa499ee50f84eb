//! Navigation

use crate::validation::ValidationError;

/// An entry in the slide-out menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    label: String,
    icon: String,
    href: String,
}

impl MenuItem {
    /// Create a menu item.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidHref`] if the route does not start with `/`.
    pub fn new(
        label: impl Into<String>,
        icon: impl Into<String>,
        href: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let href = href.into();

        if !href.starts_with('/') {
            return Err(ValidationError::InvalidHref(href));
        }

        Ok(Self {
            label: label.into(),
            icon: icon.into(),
            href,
        })
    }

    /// Text shown in the menu
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Emoji shown before the label
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Route navigated to
    pub fn href(&self) -> &str {
        &self.href
    }
}
