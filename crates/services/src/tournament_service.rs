use crate::error::ServiceError;
use chrono::{NaiveDate, Utc};
use core_types::Tournament;
use database::TournamentRepository;
use std::sync::Arc;

/// Tournament use cases on top of a [`TournamentRepository`].
#[derive(Clone)]
pub struct TournamentService {
    repository: Arc<dyn TournamentRepository>,
    enforce_rules: bool,
}

impl TournamentService {
    pub fn new(repository: Arc<dyn TournamentRepository>) -> Self {
        Self {
            repository,
            enforce_rules: false,
        }
    }

    /// When enabled, writes must carry a non-blank name and a future date.
    pub fn with_rules_enforced(mut self, enforce: bool) -> Self {
        self.enforce_rules = enforce;
        self
    }

    fn check_rules(&self, tournament: &Tournament) -> Result<(), ServiceError> {
        if self.enforce_rules {
            tournament.validate(Utc::now().date_naive())?;
        }
        Ok(())
    }

    /// Persists a new tournament and returns it with its assigned id.
    ///
    /// `None` stands for a `null` submission and is rejected.
    pub async fn add_tournament(
        &self,
        tournament: Option<Tournament>,
    ) -> Result<Tournament, ServiceError> {
        let Some(tournament) = tournament else {
            tracing::warn!("Rejected null tournament.");
            return Err(ServiceError::InvalidArgument(
                "Tournament cannot be null".to_string(),
            ));
        };
        self.check_rules(&tournament)?;

        let saved = self.repository.save(tournament).await?;
        tracing::info!(id = ?saved.id, name = ?saved.name, "Tournament added.");
        Ok(saved)
    }

    /// All tournaments in insertion order; empty when there are none.
    pub async fn get_all_tournaments(&self) -> Result<Vec<Tournament>, ServiceError> {
        Ok(self.repository.find_all().await?)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Tournament>, ServiceError> {
        Ok(self.repository.find_by_name(name).await?)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Tournament>, ServiceError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    pub async fn find_by_date(&self, date: NaiveDate) -> Result<Option<Tournament>, ServiceError> {
        Ok(self.repository.find_by_date(date).await?)
    }

    /// Overwrites the tournament stored under `id`. The id argument wins
    /// over any id carried in the body.
    pub async fn update_tournament(
        &self,
        id: i64,
        mut tournament: Tournament,
    ) -> Result<Tournament, ServiceError> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(ServiceError::NotFound(format!("tournament {id}")));
        }
        self.check_rules(&tournament)?;

        tournament.id = Some(id);
        let saved = self.repository.save(tournament).await?;
        tracing::info!(id, "Tournament updated.");
        Ok(saved)
    }

    pub async fn delete_tournament(&self, id: i64) -> Result<(), ServiceError> {
        let Some(existing) = self.repository.find_by_id(id).await? else {
            return Err(ServiceError::NotFound(format!("tournament {id}")));
        };
        self.repository.delete(&existing).await?;
        tracing::info!(id, "Tournament deleted.");
        Ok(())
    }
}
