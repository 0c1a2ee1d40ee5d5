//! Repository doubles that count calls and can simulate an unavailable store.

use async_trait::async_trait;
use chrono::NaiveDate;
use core_types::{GolfCourse, Tournament};
use database::{
    DbError, GolfCourseRepository, InMemoryGolfCourseRepository, InMemoryTournamentRepository,
    TournamentRepository,
};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
struct CallLog {
    calls: Mutex<HashMap<&'static str, usize>>,
}

impl CallLog {
    fn record(&self, op: &'static str) {
        if let Ok(mut calls) = self.calls.lock() {
            *calls.entry(op).or_default() += 1;
        }
    }

    fn count(&self, op: &str) -> usize {
        self.calls
            .lock()
            .map(|calls| calls.get(op).copied().unwrap_or(0))
            .unwrap_or(0)
    }
}

fn offline() -> DbError {
    DbError::ConnectionConfigError("store offline".to_string())
}

pub struct RecordingTournamentRepository {
    inner: InMemoryTournamentRepository,
    log: CallLog,
    fail: bool,
}

impl RecordingTournamentRepository {
    pub fn new() -> Self {
        Self {
            inner: InMemoryTournamentRepository::new(),
            log: CallLog::default(),
            fail: false,
        }
    }

    /// Every call records itself and then fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn calls(&self, op: &str) -> usize {
        self.log.count(op)
    }

    fn enter(&self, op: &'static str) -> Result<(), DbError> {
        self.log.record(op);
        if self.fail { Err(offline()) } else { Ok(()) }
    }
}

#[async_trait]
impl TournamentRepository for RecordingTournamentRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Tournament>, DbError> {
        self.enter("find_by_name")?;
        self.inner.find_by_name(name).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Tournament>, DbError> {
        self.enter("find_by_id")?;
        self.inner.find_by_id(id).await
    }

    async fn find_by_date(&self, date: NaiveDate) -> Result<Option<Tournament>, DbError> {
        self.enter("find_by_date")?;
        self.inner.find_by_date(date).await
    }

    async fn find_all(&self) -> Result<Vec<Tournament>, DbError> {
        self.enter("find_all")?;
        self.inner.find_all().await
    }

    async fn save(&self, tournament: Tournament) -> Result<Tournament, DbError> {
        self.enter("save")?;
        self.inner.save(tournament).await
    }

    async fn delete(&self, tournament: &Tournament) -> Result<(), DbError> {
        self.enter("delete")?;
        self.inner.delete(tournament).await
    }
}

pub struct RecordingGolfCourseRepository {
    inner: InMemoryGolfCourseRepository,
    log: CallLog,
}

impl RecordingGolfCourseRepository {
    pub fn new() -> Self {
        Self {
            inner: InMemoryGolfCourseRepository::new(),
            log: CallLog::default(),
        }
    }

    pub fn calls(&self, op: &str) -> usize {
        self.log.count(op)
    }
}

#[async_trait]
impl GolfCourseRepository for RecordingGolfCourseRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<GolfCourse>, DbError> {
        self.log.record("find_by_name");
        self.inner.find_by_name(name).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<GolfCourse>, DbError> {
        self.log.record("find_by_id");
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<GolfCourse>, DbError> {
        self.log.record("find_all");
        self.inner.find_all().await
    }

    async fn save(&self, course: GolfCourse) -> Result<GolfCourse, DbError> {
        self.log.record("save");
        self.inner.save(course).await
    }

    async fn delete(&self, course: &GolfCourse) -> Result<(), DbError> {
        self.log.record("delete");
        self.inner.delete(course).await
    }
}
