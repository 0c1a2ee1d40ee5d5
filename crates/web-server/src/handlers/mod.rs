pub mod golf_courses;
pub mod tournaments;

use serde::Deserialize;

/// `?name=` lookups. `None` means the parameter was left out entirely,
/// which is a different answer (400) from an empty or unmatched name (404).
#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: Option<String>,
}

impl NameQuery {
    pub(crate) fn require(self) -> Result<String, crate::error::AppError> {
        self.name.ok_or_else(|| {
            crate::error::AppError::BadRequest(
                "Required request parameter 'name' is not present".to_string(),
            )
        })
    }
}
