//! Categories

use std::{borrow::Borrow, fmt};

use crate::validation::{ValidationError, identifier};

/// Identifier of a product category.
///
/// The reserved identifier [`CategoryId::ALL`] selects every product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(String);

impl CategoryId {
    /// Sentinel identifier meaning "no filter".
    pub const ALL: &'static str = "all";

    /// Create a category identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyIdentifier`] if the identifier is blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        identifier(id.into(), "category").map(Self)
    }

    /// The "no filter" category.
    #[must_use]
    pub fn all() -> Self {
        Self(Self::ALL.to_string())
    }

    /// Whether this is the "no filter" sentinel.
    pub fn is_all(&self) -> bool {
        self.0 == Self::ALL
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::all()
    }
}

impl Borrow<str> for CategoryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CategoryId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A product category shown in the category bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    name: String,
}

impl Category {
    /// Create a category.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyIdentifier`] if the identifier is blank.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            id: CategoryId::new(id)?,
            name: name.into(),
        })
    }

    /// Category identifier
    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this category is the "no filter" entry.
    pub fn is_all(&self) -> bool {
        self.id.is_all()
    }
}
