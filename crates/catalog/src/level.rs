use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::CatalogError;

/// Classification of an action by what it lets the caller do
///
/// Catalog files spell levels the way the upstream datasets do (`"Permissions management"`);
/// any spelling accepted by [`FromStr`] is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum AccessLevel {
    List,
    Read,
    Tagging,
    Write,
    PermissionsManagement,
}

impl AccessLevel {
    pub const ALL: [AccessLevel; 5] = [
        AccessLevel::List,
        AccessLevel::Read,
        AccessLevel::Tagging,
        AccessLevel::Write,
        AccessLevel::PermissionsManagement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Read => "Read",
            Self::Tagging => "Tagging",
            Self::Write => "Write",
            Self::PermissionsManagement => "Permissions management",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts `write`, `Write`, `permissions-management`, `PermissionsManagement`,
/// `"Permissions management"` and similar spellings.
impl FromStr for AccessLevel {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "list" => Ok(Self::List),
            "read" => Ok(Self::Read),
            "tagging" => Ok(Self::Tagging),
            "write" => Ok(Self::Write),
            "permissionsmanagement" => Ok(Self::PermissionsManagement),
            _ => Err(CatalogError::UnknownAccessLevel(s.to_string())),
        }
    }
}

impl TryFrom<String> for AccessLevel {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
