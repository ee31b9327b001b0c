use crate::db::TeamRepository;
use crate::models::Team;

/// Business operations over teams. Stateless; the repository handle is the
/// only dependency and is injected at construction.
#[derive(Clone)]
pub struct TeamService {
    repository: TeamRepository,
}

impl TeamService {
    pub fn new(repository: TeamRepository) -> Self {
        Self { repository }
    }

    pub async fn list_all(&self) -> Result<Vec<Team>, sqlx::Error> {
        self.repository.find_all().await
    }

    /// Absence is reported as `None`; the HTTP layer decides the 404 mapping.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Team>, sqlx::Error> {
        self.repository.find_by_id(id).await
    }

    pub async fn search_by_name(&self, fragment: &str) -> Result<Vec<Team>, sqlx::Error> {
        self.repository.find_by_name_containing(fragment).await
    }

    /// Persists a new team and returns it with the assigned id. Blank-field
    /// validation happens at the HTTP boundary, before this is called.
    pub async fn create(&self, team: Team) -> Result<Team, sqlx::Error> {
        self.repository.save(Team { id: None, ..team }).await
    }

    /// Copies name/league/country onto the stored team, keeping its id. An
    /// absent id is a silent no-op: nothing is written and nothing is
    /// signaled to the caller.
    pub async fn update(&self, id: i64, patch: Team) -> Result<(), sqlx::Error> {
        if let Some(existing) = self.repository.find_by_id(id).await? {
            let updated = Team {
                id: existing.id,
                name: patch.name,
                league: patch.league,
                country: patch.country,
            };
            self.repository.save(updated).await?;
        }
        Ok(())
    }

    /// Idempotent: deleting an id that was never assigned succeeds.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), sqlx::Error> {
        self.repository.delete_by_id(id).await
    }
}
