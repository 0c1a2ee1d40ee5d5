use crate::repository::{GolfCourseRepository, TournamentRepository};
use crate::DbError;
use async_trait::async_trait;
use chrono::NaiveDate;
use core_types::{GolfCourse, Tournament};
use sqlx::postgres::PgPool;

/// PostgreSQL-backed tournament storage (`tournaments` table).
#[derive(Debug, Clone)]
pub struct PgTournamentRepository {
    pool: PgPool,
}

impl PgTournamentRepository {
    /// Creates a new repository with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, tournament: &Tournament) -> Result<Tournament, DbError> {
        let saved = sqlx::query_as::<_, Tournament>(
            "INSERT INTO tournaments (name, date) VALUES ($1, $2) RETURNING id, name, date",
        )
        .bind(&tournament.name)
        .bind(tournament.date)
        .fetch_one(&self.pool)
        .await?;
        tracing::debug!(id = ?saved.id, "Inserted tournament.");
        Ok(saved)
    }
}

#[async_trait]
impl TournamentRepository for PgTournamentRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Tournament>, DbError> {
        let tournament = sqlx::query_as::<_, Tournament>(
            "SELECT id, name, date FROM tournaments WHERE name = $1 ORDER BY id ASC LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(tournament)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Tournament>, DbError> {
        let tournament =
            sqlx::query_as::<_, Tournament>("SELECT id, name, date FROM tournaments WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(tournament)
    }

    async fn find_by_date(&self, date: NaiveDate) -> Result<Option<Tournament>, DbError> {
        let tournament = sqlx::query_as::<_, Tournament>(
            "SELECT id, name, date FROM tournaments WHERE date = $1 ORDER BY id ASC LIMIT 1",
        )
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;
        Ok(tournament)
    }

    async fn find_all(&self) -> Result<Vec<Tournament>, DbError> {
        let tournaments =
            sqlx::query_as::<_, Tournament>("SELECT id, name, date FROM tournaments ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(tournaments)
    }

    async fn save(&self, tournament: Tournament) -> Result<Tournament, DbError> {
        let Some(id) = tournament.id else {
            return self.insert(&tournament).await;
        };

        let updated = sqlx::query_as::<_, Tournament>(
            "UPDATE tournaments SET name = $1, date = $2 WHERE id = $3 RETURNING id, name, date",
        )
        .bind(&tournament.name)
        .bind(tournament.date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match updated {
            Some(t) => {
                tracing::debug!(id, "Updated tournament.");
                Ok(t)
            }
            // Unknown id: store it as a new row with a generated id.
            None => self.insert(&tournament).await,
        }
    }

    async fn delete(&self, tournament: &Tournament) -> Result<(), DbError> {
        let Some(id) = tournament.id else {
            return Ok(());
        };
        sqlx::query("DELETE FROM tournaments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        tracing::debug!(id, "Deleted tournament.");
        Ok(())
    }
}

/// PostgreSQL-backed golf course storage (`golf_courses` table).
#[derive(Debug, Clone)]
pub struct PgGolfCourseRepository {
    pool: PgPool,
}

impl PgGolfCourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, course: &GolfCourse) -> Result<GolfCourse, DbError> {
        let saved = sqlx::query_as::<_, GolfCourse>(
            "INSERT INTO golf_courses (name, location) VALUES ($1, $2) RETURNING id, name, location",
        )
        .bind(&course.name)
        .bind(&course.location)
        .fetch_one(&self.pool)
        .await?;
        tracing::debug!(id = ?saved.id, "Inserted golf course.");
        Ok(saved)
    }
}

#[async_trait]
impl GolfCourseRepository for PgGolfCourseRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<GolfCourse>, DbError> {
        let course = sqlx::query_as::<_, GolfCourse>(
            "SELECT id, name, location FROM golf_courses WHERE name = $1 ORDER BY id ASC LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(course)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<GolfCourse>, DbError> {
        let course = sqlx::query_as::<_, GolfCourse>(
            "SELECT id, name, location FROM golf_courses WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(course)
    }

    async fn find_all(&self) -> Result<Vec<GolfCourse>, DbError> {
        let courses = sqlx::query_as::<_, GolfCourse>(
            "SELECT id, name, location FROM golf_courses ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(courses)
    }

    async fn save(&self, course: GolfCourse) -> Result<GolfCourse, DbError> {
        let Some(id) = course.id else {
            return self.insert(&course).await;
        };

        let updated = sqlx::query_as::<_, GolfCourse>(
            "UPDATE golf_courses SET name = $1, location = $2 WHERE id = $3 RETURNING id, name, location",
        )
        .bind(&course.name)
        .bind(&course.location)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match updated {
            Some(c) => {
                tracing::debug!(id, "Updated golf course.");
                Ok(c)
            }
            None => self.insert(&course).await,
        }
    }

    async fn delete(&self, course: &GolfCourse) -> Result<(), DbError> {
        let Some(id) = course.id else {
            return Ok(());
        };
        sqlx::query("DELETE FROM golf_courses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        tracing::debug!(id, "Deleted golf course.");
        Ok(())
    }
}
