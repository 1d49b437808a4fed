//! Homework domain types

use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::FieldError;

/// Review status of a homework as reported by the status API
///
/// The set is closed: a status the API adds later is rejected as
/// [`FieldError::UnknownStatus`] until it is added here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// All statuses, in table order
    pub const ALL: [HomeworkStatus; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    /// Status code as it appears in the API payload
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// User-facing verdict text for this status
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HomeworkStatus {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| FieldError::UnknownStatus(s.to_string()))
    }
}

/// A single homework entry from the status API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub name: String,
    pub status: HomeworkStatus,
}

impl HomeworkRecord {
    /// Chat message announcing this record's current status
    pub fn message(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\". {}",
            self.name,
            self.status.verdict()
        )
    }
}

impl TryFrom<&Value> for HomeworkRecord {
    type Error = FieldError;

    /// Reads a record out of a raw payload element.
    ///
    /// Extra keys are ignored. Keys are checked name first, then status, so a
    /// record missing both reports the name.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let name = string_field(value, "homework_name")?;
        let status = string_field(value, "status")?.parse()?;

        Ok(Self {
            name: name.to_string(),
            status,
        })
    }
}

fn string_field<'a>(value: &'a Value, key: &'static str) -> Result<&'a str, FieldError> {
    value
        .get(key)
        .and_then(Value::as_str)
        .ok_or(FieldError::MissingField(key))
}

/// Renders a raw homework record as a chat message
pub fn format(record: &Value) -> Result<String, FieldError> {
    HomeworkRecord::try_from(record).map(|record| record.message())
}
