use crate::error::CoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A club tournament.
///
/// Every field is optional so that partial request bodies (including `{}`)
/// deserialize cleanly. `id` is `None` until the store assigns one on the
/// first save.
///
/// The business rules (`has_valid_name`, `is_upcoming`) are not applied on
/// the write path unless the service is configured to enforce them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Tournament {
    pub id: Option<i64>,
    pub name: Option<String>,
    /// Calendar day of play, serialized as `YYYY-MM-DD`.
    pub date: Option<NaiveDate>,
}

impl Tournament {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            date: Some(date),
        }
    }

    /// A tournament with only a name, the shape most API clients submit.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// True when a name is present and not blank.
    pub fn has_valid_name(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.trim().is_empty())
    }

    /// True when the tournament is scheduled strictly after `today`.
    /// A tournament taking place today is no longer upcoming.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.date.is_some_and(|d| d > today)
    }

    /// Checks the creation-time business rules against `today`.
    pub fn validate(&self, today: NaiveDate) -> Result<(), CoreError> {
        if !self.has_valid_name() {
            return Err(CoreError::invalid("name", "must not be empty"));
        }
        match self.date {
            None => Err(CoreError::invalid("date", "must be set")),
            Some(d) if d <= today => Err(CoreError::invalid(
                "date",
                &format!("{d} is not in the future"),
            )),
            Some(_) => Ok(()),
        }
    }
}
