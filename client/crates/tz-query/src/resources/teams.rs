use crate::{Mutation, QueryCache, QueryKey};

use std::sync::Arc;

use tz_api::{ApiClient, ApiResult, Notifier};
use tz_core::{CreateTeam, Team, UpdateTeam};

pub struct Teams {
    api: Arc<ApiClient>,
    cache: Arc<QueryCache>,
    notifier: Arc<dyn Notifier>,
}

impl Teams {
    pub fn new(api: Arc<ApiClient>, cache: Arc<QueryCache>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            cache,
            notifier,
        }
    }

    pub fn list_key() -> QueryKey {
        QueryKey::new(["teams"])
    }

    pub fn detail_key(uuid: &str) -> QueryKey {
        QueryKey::new(["teams", uuid])
    }

    pub async fn list(&self) -> ApiResult<Vec<Team>> {
        let api = self.api.clone();
        self.cache
            .fetch(&Self::list_key(), move || {
                let api = api.clone();
                async move { api.list_teams().await }
            })
            .await
    }

    /// Detail query; a missing uuid means "not ready yet" - the query does
    /// not execute.
    pub async fn get(&self, uuid: &str) -> ApiResult<Option<Team>> {
        if uuid.is_empty() {
            return Ok(None);
        }

        let api = self.api.clone();
        let uuid = uuid.to_string();
        self.cache
            .fetch(&Self::detail_key(&uuid), move || {
                let api = api.clone();
                let uuid = uuid.clone();
                async move { api.get_team(&uuid).await }
            })
            .await
            .map(Some)
    }

    pub async fn create(&self, data: &CreateTeam) -> ApiResult<Team> {
        let team = self.api.create_team(data).await?;
        self.apply(Mutation::TeamCreated);
        Ok(team)
    }

    pub async fn update(&self, uuid: &str, data: &UpdateTeam) -> ApiResult<Team> {
        let team = self.api.update_team(uuid, data).await?;
        self.apply(Mutation::TeamUpdated);
        Ok(team)
    }

    pub async fn delete(&self, uuid: &str) -> ApiResult<()> {
        self.api.delete_team(uuid).await?;
        self.apply(Mutation::TeamDeleted {
            team_id: uuid.to_string(),
        });
        Ok(())
    }

    fn apply(&self, mutation: Mutation) {
        for key in mutation.invalidates() {
            self.cache.invalidate(&key);
        }
        self.notifier.success(mutation.success_message());
    }
}
