use crate::resources::filters_segment;
use crate::{Mutation, QueryCache, QueryKey};

use std::sync::Arc;

use tz_api::{ApiClient, ApiResult, Notifier};
use tz_core::{
    AssignTask, CreateTask, RemoveAssignees, Task, TaskFilters, TaskStatistics, TaskStatus,
    UpdateTask, UpdateTaskStatus,
};

pub struct Tasks {
    api: Arc<ApiClient>,
    cache: Arc<QueryCache>,
    notifier: Arc<dyn Notifier>,
}

impl Tasks {
    pub fn new(api: Arc<ApiClient>, cache: Arc<QueryCache>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            cache,
            notifier,
        }
    }

    pub fn my_tasks_key(filters: &TaskFilters) -> QueryKey {
        QueryKey::new(["tasks", "my-tasks"]).push(filters_segment(filters))
    }

    pub fn team_tasks_key(team_id: &str, filters: &TaskFilters) -> QueryKey {
        QueryKey::new(["tasks", "team", team_id]).push(filters_segment(filters))
    }

    pub fn statistics_key(team_id: &str) -> QueryKey {
        QueryKey::new(["tasks", "statistics", team_id])
    }

    pub fn detail_key(uuid: &str) -> QueryKey {
        QueryKey::new(["tasks", uuid])
    }

    pub async fn my(&self, filters: &TaskFilters) -> ApiResult<Vec<Task>> {
        let api = self.api.clone();
        let filters = filters.clone();
        self.cache
            .fetch(&Self::my_tasks_key(&filters), move || {
                let api = api.clone();
                let filters = filters.clone();
                async move { api.my_tasks(&filters).await }
            })
            .await
    }

    /// Team list query; does not execute until a team is selected.
    pub async fn team(&self, team_id: &str, filters: &TaskFilters) -> ApiResult<Option<Vec<Task>>> {
        if team_id.is_empty() {
            return Ok(None);
        }

        let api = self.api.clone();
        let team_id = team_id.to_string();
        let filters = filters.clone();
        self.cache
            .fetch(&Self::team_tasks_key(&team_id, &filters), move || {
                let api = api.clone();
                let team_id = team_id.clone();
                let filters = filters.clone();
                async move { api.team_tasks(&team_id, &filters).await }
            })
            .await
            .map(Some)
    }

    pub async fn statistics(&self, team_id: &str) -> ApiResult<Option<TaskStatistics>> {
        if team_id.is_empty() {
            return Ok(None);
        }

        let api = self.api.clone();
        let team_id = team_id.to_string();
        self.cache
            .fetch(&Self::statistics_key(&team_id), move || {
                let api = api.clone();
                let team_id = team_id.clone();
                async move { api.task_statistics(&team_id).await }
            })
            .await
            .map(Some)
    }

    pub async fn get(&self, uuid: &str) -> ApiResult<Option<Task>> {
        if uuid.is_empty() {
            return Ok(None);
        }

        let api = self.api.clone();
        let uuid = uuid.to_string();
        self.cache
            .fetch(&Self::detail_key(&uuid), move || {
                let api = api.clone();
                let uuid = uuid.clone();
                async move { api.get_task(&uuid).await }
            })
            .await
            .map(Some)
    }

    pub async fn create(&self, data: &CreateTask) -> ApiResult<Task> {
        let task = self.api.create_task(data).await?;
        self.apply(Mutation::TaskCreated {
            team_id: task.team_id.clone(),
        });
        Ok(task)
    }

    pub async fn update(&self, uuid: &str, data: &UpdateTask) -> ApiResult<Task> {
        let task = self.api.update_task(uuid, data).await?;
        self.apply(Mutation::TaskUpdated {
            task_id: task.uuid.clone(),
            team_id: task.team_id.clone(),
        });
        Ok(task)
    }

    pub async fn set_status(&self, uuid: &str, status: TaskStatus) -> ApiResult<Task> {
        let task = self
            .api
            .update_task_status(uuid, &UpdateTaskStatus { status })
            .await?;
        self.apply(Mutation::TaskStatusChanged {
            task_id: task.uuid.clone(),
            team_id: task.team_id.clone(),
        });
        Ok(task)
    }

    /// Deletion returns no body, so the owning team must be supplied by the
    /// caller for precise invalidation.
    pub async fn delete(&self, uuid: &str, team_id: &str) -> ApiResult<()> {
        self.api.delete_task(uuid).await?;
        self.apply(Mutation::TaskDeleted {
            task_id: uuid.to_string(),
            team_id: team_id.to_string(),
        });
        Ok(())
    }

    pub async fn assign(&self, uuid: &str, user_ids: Vec<String>) -> ApiResult<Task> {
        let task = self.api.assign_users(uuid, &AssignTask { user_ids }).await?;
        self.apply(Mutation::TaskAssigned {
            task_id: task.uuid.clone(),
            team_id: task.team_id.clone(),
        });
        Ok(task)
    }

    pub async fn unassign(&self, uuid: &str, user_ids: Vec<String>) -> ApiResult<Task> {
        let task = self
            .api
            .remove_assignees(uuid, &RemoveAssignees { user_ids })
            .await?;
        self.apply(Mutation::AssigneesRemoved {
            task_id: task.uuid.clone(),
            team_id: task.team_id.clone(),
        });
        Ok(task)
    }

    fn apply(&self, mutation: Mutation) {
        for key in mutation.invalidates() {
            self.cache.invalidate(&key);
        }
        self.notifier.success(mutation.success_message());
    }
}
