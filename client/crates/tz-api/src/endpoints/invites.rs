use crate::envelope::{Envelope, ListPayload};
use crate::{ApiClient, ApiResult};

use reqwest::Method;
use tz_core::{AcceptInvitation, DeclineInvitation, Invite, SendInvitations};

impl ApiClient {
    /// Invite a batch of email addresses to a team. The response is the flat
    /// list of created invitations, not a paginator.
    pub async fn send_invitations(&self, data: &SendInvitations) -> ApiResult<Vec<Invite>> {
        let req = self.request(Method::POST, "/invites").json(data);
        let envelope: Envelope<Vec<Invite>> = self.execute_json(req).await?;
        Ok(envelope.data)
    }

    pub async fn accept_invitation(&self, data: &AcceptInvitation) -> ApiResult<()> {
        let req = self.request(Method::POST, "/invites/accept").json(data);
        self.execute(req).await?;
        Ok(())
    }

    pub async fn decline_invitation(&self, data: &DeclineInvitation) -> ApiResult<()> {
        let req = self.request(Method::POST, "/invites/decline").json(data);
        self.execute(req).await?;
        Ok(())
    }

    pub async fn revoke_invitation(&self, invite_id: &str) -> ApiResult<()> {
        let req = self.request(Method::DELETE, &format!("/invites/{}", invite_id));
        self.execute(req).await?;
        Ok(())
    }

    /// Invitations sent for one team. Paginated list endpoint.
    pub async fn team_invitations(&self, team_id: &str) -> ApiResult<Vec<Invite>> {
        let req = self.request(Method::GET, &format!("/invites/team/{}", team_id));
        let envelope: Envelope<ListPayload<Invite>> = self.execute_json(req).await?;
        Ok(envelope.data.into_items())
    }

    /// Invitations waiting on the caller. Paginated list endpoint.
    pub async fn my_pending_invitations(&self) -> ApiResult<Vec<Invite>> {
        let req = self.request(Method::GET, "/invites/my-pending");
        let envelope: Envelope<ListPayload<Invite>> = self.execute_json(req).await?;
        Ok(envelope.data.into_items())
    }
}
