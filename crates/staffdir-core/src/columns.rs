//! Projectable employee fields.
//!
//! `Column` is the closed whitelist of fields an organization may expose.
//! The tenant id is deliberately not a variant, so no column configuration
//! can ever project it.

use std::fmt;
use std::str::FromStr;

/// A field of an employee record that may appear in a search response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    /// Record identifier.
    Id,
    /// Full name.
    Name,
    /// Work email address.
    Email,
    /// Department name.
    Department,
    /// Office location.
    Location,
    /// Job title.
    Position,
}

impl Column {
    /// Every projectable column, in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Id,
        Self::Name,
        Self::Email,
        Self::Department,
        Self::Location,
        Self::Position,
    ];

    /// The wire name of the column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Email => "email",
            Self::Department => "department",
            Self::Location => "location",
            Self::Position => "position",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Column {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| UnknownColumn(s.to_string()))
    }
}

/// A column name outside the whitelist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown column: {0}")]
pub struct UnknownColumn(pub String);
