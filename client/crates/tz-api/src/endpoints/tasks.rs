use crate::envelope::{Envelope, ListPayload};
use crate::{ApiClient, ApiResult};

use reqwest::Method;
use tz_core::{
    AssignTask, CreateTask, RemoveAssignees, Task, TaskFilters, TaskStatistics, UpdateTask,
    UpdateTaskStatus,
};

impl ApiClient {
    /// Tasks assigned to or created by the caller. Paginated list endpoint.
    pub async fn my_tasks(&self, filters: &TaskFilters) -> ApiResult<Vec<Task>> {
        let req = self.request(Method::GET, "/tasks/my-tasks").query(filters);
        let envelope: Envelope<ListPayload<Task>> = self.execute_json(req).await?;
        Ok(envelope.data.into_items())
    }

    /// All tasks of one team. Paginated list endpoint.
    pub async fn team_tasks(&self, team_id: &str, filters: &TaskFilters) -> ApiResult<Vec<Task>> {
        let req = self
            .request(Method::GET, &format!("/tasks/team/{}", team_id))
            .query(filters);
        let envelope: Envelope<ListPayload<Task>> = self.execute_json(req).await?;
        Ok(envelope.data.into_items())
    }

    pub async fn task_statistics(&self, team_id: &str) -> ApiResult<TaskStatistics> {
        let req = self.request(
            Method::GET,
            &format!("/tasks/team/{}/statistics", team_id),
        );
        let envelope: Envelope<TaskStatistics> = self.execute_json(req).await?;
        Ok(envelope.data)
    }

    pub async fn create_task(&self, data: &CreateTask) -> ApiResult<Task> {
        let req = self.request(Method::POST, "/tasks").json(data);
        let envelope: Envelope<Task> = self.execute_json(req).await?;
        Ok(envelope.data)
    }

    pub async fn get_task(&self, uuid: &str) -> ApiResult<Task> {
        let req = self.request(Method::GET, &format!("/tasks/{}", uuid));
        let envelope: Envelope<Task> = self.execute_json(req).await?;
        Ok(envelope.data)
    }

    pub async fn update_task(&self, uuid: &str, data: &UpdateTask) -> ApiResult<Task> {
        let req = self
            .request(Method::PUT, &format!("/tasks/{}", uuid))
            .json(data);
        let envelope: Envelope<Task> = self.execute_json(req).await?;
        Ok(envelope.data)
    }

    /// Status is its own endpoint so board views can move cards without
    /// sending a full update payload.
    pub async fn update_task_status(
        &self,
        uuid: &str,
        data: &UpdateTaskStatus,
    ) -> ApiResult<Task> {
        let req = self
            .request(Method::PATCH, &format!("/tasks/{}/status", uuid))
            .json(data);
        let envelope: Envelope<Task> = self.execute_json(req).await?;
        Ok(envelope.data)
    }

    pub async fn delete_task(&self, uuid: &str) -> ApiResult<()> {
        let req = self.request(Method::DELETE, &format!("/tasks/{}", uuid));
        self.execute(req).await?;
        Ok(())
    }

    pub async fn assign_users(&self, uuid: &str, data: &AssignTask) -> ApiResult<Task> {
        let req = self
            .request(Method::POST, &format!("/tasks/{}/assign", uuid))
            .json(data);
        let envelope: Envelope<Task> = self.execute_json(req).await?;
        Ok(envelope.data)
    }

    pub async fn remove_assignees(&self, uuid: &str, data: &RemoveAssignees) -> ApiResult<Task> {
        let req = self
            .request(Method::POST, &format!("/tasks/{}/remove-assignees", uuid))
            .json(data);
        let envelope: Envelope<Task> = self.execute_json(req).await?;
        Ok(envelope.data)
    }
}
