use crate::DbError;
use async_trait::async_trait;
use chrono::NaiveDate;
use core_types::{GolfCourse, Tournament};

/// Persistence operations for tournaments.
///
/// Lookups return `Ok(None)` when nothing matches; absence is never an error
/// at this layer. When several rows match a name or date, the one with the
/// lowest id wins.
#[async_trait]
pub trait TournamentRepository: Send + Sync {
    /// Exact, case-sensitive name match.
    async fn find_by_name(&self, name: &str) -> Result<Option<Tournament>, DbError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Tournament>, DbError>;

    async fn find_by_date(&self, date: NaiveDate) -> Result<Option<Tournament>, DbError>;

    /// Every stored tournament in insertion order.
    async fn find_all(&self) -> Result<Vec<Tournament>, DbError>;

    /// Inserts when `id` is unset or unknown (assigning a fresh id),
    /// otherwise overwrites the stored row. Returns the stored entity.
    async fn save(&self, tournament: Tournament) -> Result<Tournament, DbError>;

    /// Removes the row with the tournament's id. Deleting an unsaved or
    /// already removed tournament is a no-op.
    async fn delete(&self, tournament: &Tournament) -> Result<(), DbError>;
}

/// Persistence operations for golf courses. Same semantics as
/// [`TournamentRepository`].
#[async_trait]
pub trait GolfCourseRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<GolfCourse>, DbError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<GolfCourse>, DbError>;

    async fn find_all(&self) -> Result<Vec<GolfCourse>, DbError>;

    async fn save(&self, course: GolfCourse) -> Result<GolfCourse, DbError>;

    async fn delete(&self, course: &GolfCourse) -> Result<(), DbError>;
}
