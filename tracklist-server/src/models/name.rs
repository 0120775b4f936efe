//! Name validation shared by artists, albums and tracks

use super::ValidationError;

/// Maximum length for entity names (VARCHAR(255) columns)
pub const MAX_NAME_LEN: usize = 255;

/// Validated, trimmed entity name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityName(String);

impl EntityName {
    /// Create a new name, trimming surrounding whitespace.
    ///
    /// # Rules
    /// - Not empty after trimming
    /// - Max 255 characters
    ///
    /// # Example
    /// ```
    /// use tracklist_server::models::EntityName;
    ///
    /// assert_eq!(EntityName::new("album name", "  Kid A ").unwrap().as_str(), "Kid A");
    /// assert!(EntityName::new("album name", "   ").is_err());
    /// ```
    pub fn new(field: &'static str, s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field });
        }

        if trimmed.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::TooLong {
                field,
                max: MAX_NAME_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validate an optional free-text column, dropping blank values.
pub(crate) fn optional_text(
    field: &'static str,
    value: Option<String>,
    max: usize,
) -> Result<Option<String>, ValidationError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(Some(trimmed.to_owned()))
}
