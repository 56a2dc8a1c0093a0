//! Validated text values carried by task lists and tasks.

use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of a task list name, matching the `task_lists.name` column.
const MAX_NAME_LENGTH: usize = 120;

/// Maximum length of a task title, matching the `tasks.title` column.
const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length of a task description, matching the `tasks.description`
/// column.
const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// Checks the character count of `value` and, unless `allow_blank`, rejects
/// empty or whitespace-only input.
fn check_text(
    field: &'static str,
    value: &str,
    max: usize,
    allow_blank: bool,
) -> Result<(), ValidationError> {
    if !allow_blank && value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }

    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }

    Ok(())
}

/// Display name of a task list.
///
/// Names hold between 1 and 120 characters and are never blank. The value is
/// stored exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskListName(String);

impl TaskListName {
    /// Creates a validated task list name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Empty`] when the value is blank or
    /// [`ValidationError::TooLong`] when it exceeds 120 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        check_text("name", &raw, MAX_NAME_LENGTH, false)?;
        Ok(Self(raw))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskListName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskListName> for String {
    fn from(value: TaskListName) -> Self {
        value.0
    }
}

impl AsRef<str> for TaskListName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Title of a task: 1 to 200 characters, never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated task title.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Empty`] when the value is blank or
    /// [`ValidationError::TooLong`] when it exceeds 200 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        check_text("title", &raw, MAX_TITLE_LENGTH, false)?;
        Ok(Self(raw))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskTitle {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskTitle> for String {
    fn from(value: TaskTitle) -> Self {
        value.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form task description of at most 1000 characters. May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Creates a validated task description.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooLong`] when the value exceeds 1000
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        check_text("description", &raw, MAX_DESCRIPTION_LENGTH, true)?;
        Ok(Self(raw))
    }

    /// Returns the description as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskDescription {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskDescription> for String {
    fn from(value: TaskDescription) -> Self {
        value.0
    }
}

impl AsRef<str> for TaskDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
