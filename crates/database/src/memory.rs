use crate::repository::{GolfCourseRepository, TournamentRepository};
use crate::DbError;
use async_trait::async_trait;
use chrono::NaiveDate;
use core_types::{GolfCourse, Tournament};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Anything with a store-assigned id.
trait Identified: Clone {
    fn id(&self) -> Option<i64>;
    fn set_id(&mut self, id: i64);
}

impl Identified for Tournament {
    fn id(&self) -> Option<i64> {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

impl Identified for GolfCourse {
    fn id(&self) -> Option<i64> {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

/// One "table". Ids come from a counter that never goes backwards, so
/// iterating the map by key yields insertion order.
struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T: Identified> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn find_first(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.values().find(|row| pred(*row)).cloned()
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn save(&mut self, mut row: T) -> T {
        let id = match row.id() {
            Some(id) if self.rows.contains_key(&id) => id,
            _ => {
                let id = self.next_id;
                self.next_id += 1;
                row.set_id(id);
                id
            }
        };
        self.rows.insert(id, row.clone());
        row
    }

    fn remove(&mut self, row: &T) -> bool {
        row.id().is_some_and(|id| self.rows.remove(&id).is_some())
    }
}

/// In-memory tournament storage (useful for testing and `--in-memory` serving).
pub struct InMemoryTournamentRepository {
    table: RwLock<Table<Tournament>>,
}

impl InMemoryTournamentRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for InMemoryTournamentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TournamentRepository for InMemoryTournamentRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Tournament>, DbError> {
        let table = self.table.read().await;
        Ok(table.find_first(|t| t.name.as_deref() == Some(name)))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Tournament>, DbError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn find_by_date(&self, date: NaiveDate) -> Result<Option<Tournament>, DbError> {
        let table = self.table.read().await;
        Ok(table.find_first(|t| t.date == Some(date)))
    }

    async fn find_all(&self) -> Result<Vec<Tournament>, DbError> {
        Ok(self.table.read().await.all())
    }

    async fn save(&self, tournament: Tournament) -> Result<Tournament, DbError> {
        let saved = self.table.write().await.save(tournament);
        tracing::debug!(id = ?saved.id, "Saved tournament in memory.");
        Ok(saved)
    }

    async fn delete(&self, tournament: &Tournament) -> Result<(), DbError> {
        if self.table.write().await.remove(tournament) {
            tracing::debug!(id = ?tournament.id, "Deleted tournament from memory.");
        }
        Ok(())
    }
}

/// In-memory golf course storage.
pub struct InMemoryGolfCourseRepository {
    table: RwLock<Table<GolfCourse>>,
}

impl InMemoryGolfCourseRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }
}

impl Default for InMemoryGolfCourseRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GolfCourseRepository for InMemoryGolfCourseRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<GolfCourse>, DbError> {
        let table = self.table.read().await;
        Ok(table.find_first(|c| c.name.as_deref() == Some(name)))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<GolfCourse>, DbError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<GolfCourse>, DbError> {
        Ok(self.table.read().await.all())
    }

    async fn save(&self, course: GolfCourse) -> Result<GolfCourse, DbError> {
        let saved = self.table.write().await.save(course);
        tracing::debug!(id = ?saved.id, "Saved golf course in memory.");
        Ok(saved)
    }

    async fn delete(&self, course: &GolfCourse) -> Result<(), DbError> {
        if self.table.write().await.remove(course) {
            tracing::debug!(id = ?course.id, "Deleted golf course from memory.");
        }
        Ok(())
    }
}
