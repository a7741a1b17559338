use crate::envelope::{Envelope, ListPayload};
use crate::{ApiClient, ApiResult};

use reqwest::Method;
use tz_core::{CreateTeam, Team, UpdateTeam};

impl ApiClient {
    /// List the caller's teams. The list endpoint paginates.
    pub async fn list_teams(&self) -> ApiResult<Vec<Team>> {
        let req = self.request(Method::GET, "/teams");
        let envelope: Envelope<ListPayload<Team>> = self.execute_json(req).await?;
        Ok(envelope.data.into_items())
    }

    pub async fn create_team(&self, data: &CreateTeam) -> ApiResult<Team> {
        let req = self.request(Method::POST, "/teams").json(data);
        let envelope: Envelope<Team> = self.execute_json(req).await?;
        Ok(envelope.data)
    }

    pub async fn get_team(&self, uuid: &str) -> ApiResult<Team> {
        let req = self.request(Method::GET, &format!("/teams/{}", uuid));
        let envelope: Envelope<Team> = self.execute_json(req).await?;
        Ok(envelope.data)
    }

    pub async fn update_team(&self, uuid: &str, data: &UpdateTeam) -> ApiResult<Team> {
        let req = self
            .request(Method::PUT, &format!("/teams/{}", uuid))
            .json(data);
        let envelope: Envelope<Team> = self.execute_json(req).await?;
        Ok(envelope.data)
    }

    pub async fn delete_team(&self, uuid: &str) -> ApiResult<()> {
        let req = self.request(Method::DELETE, &format!("/teams/{}", uuid));
        self.execute(req).await?;
        Ok(())
    }
}
