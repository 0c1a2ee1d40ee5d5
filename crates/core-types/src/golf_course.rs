use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A golf course operated or visited by the club.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct GolfCourse {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub location: Option<String>,
}

impl GolfCourse {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            location: Some(location.into()),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        match self.name.as_deref() {
            Some(n) if !n.trim().is_empty() => Ok(()),
            _ => Err(CoreError::invalid("name", "must not be empty")),
        }
    }
}
