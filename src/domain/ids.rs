//! Domain identifier types with validation
//!
//! Newtype wrappers for Notion identifiers. Each type keeps database ids and
//! page ids from being mixed up and rejects empty values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Notion database identifier
///
/// # Examples
///
/// ```
/// use scribe::domain::ids::DatabaseId;
/// use std::str::FromStr;
///
/// let db = DatabaseId::from_str("8f2b0c6e4a1d4b7e9c3f5a2d1e0b9c8a").unwrap();
/// assert_eq!(db.as_str(), "8f2b0c6e4a1d4b7e9c3f5a2d1e0b9c8a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatabaseId(String);

impl DatabaseId {
    /// Creates a new DatabaseId, trimming surrounding whitespace
    ///
    /// Returns `Err` if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err("Database ID cannot be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the database ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatabaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DatabaseId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for DatabaseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identifier of a record (a Notion page) returned by a database query
///
/// The same id addresses the page's block children.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    /// Creates a new RecordId
    ///
    /// Returns `Err` if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Record ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the record ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_id_valid() {
        let id = DatabaseId::new("abc").unwrap();
        assert_eq!(id.as_str(), "abc");
        assert_eq!(id.to_string(), "abc");
    }

    #[test]
    fn test_database_id_trims_whitespace() {
        let id = DatabaseId::from_str("  abc \n").unwrap();
        assert_eq!(id.as_str(), "abc");
    }

    #[test]
    fn test_database_id_empty() {
        assert!(DatabaseId::new("").is_err());
        assert!(DatabaseId::new("   ").is_err());
    }

    #[test]
    fn test_record_id_roundtrip() {
        let id = RecordId::from_str("59833787-2cf9-4fdf-8782-e53db20768a5").unwrap();
        assert_eq!(id.as_ref(), "59833787-2cf9-4fdf-8782-e53db20768a5");
        assert_eq!(id.to_string(), "59833787-2cf9-4fdf-8782-e53db20768a5");
    }

    #[test]
    fn test_record_id_empty() {
        assert!(RecordId::new("").is_err());
    }

    #[test]
    fn test_record_id_serde_transparent() {
        let id = RecordId::new("abc123").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc123\"");
    }
}
