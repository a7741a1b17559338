use crate::{Mutation, QueryCache, QueryKey};

use std::sync::Arc;

use tz_api::{ApiClient, ApiResult, Notifier};
use tz_core::{AcceptInvitation, DeclineInvitation, Invite, SendInvitations};

pub struct Invites {
    api: Arc<ApiClient>,
    cache: Arc<QueryCache>,
    notifier: Arc<dyn Notifier>,
}

impl Invites {
    pub fn new(api: Arc<ApiClient>, cache: Arc<QueryCache>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            cache,
            notifier,
        }
    }

    pub fn pending_key() -> QueryKey {
        QueryKey::new(["invites", "my-pending"])
    }

    pub fn team_key(team_id: &str) -> QueryKey {
        QueryKey::new(["invites", "team", team_id])
    }

    pub async fn pending(&self) -> ApiResult<Vec<Invite>> {
        let api = self.api.clone();
        self.cache
            .fetch(&Self::pending_key(), move || {
                let api = api.clone();
                async move { api.my_pending_invitations().await }
            })
            .await
    }

    /// Team invitations query; does not execute until a team is selected.
    pub async fn team(&self, team_id: &str) -> ApiResult<Option<Vec<Invite>>> {
        if team_id.is_empty() {
            return Ok(None);
        }

        let api = self.api.clone();
        let team_id = team_id.to_string();
        self.cache
            .fetch(&Self::team_key(&team_id), move || {
                let api = api.clone();
                let team_id = team_id.clone();
                async move { api.team_invitations(&team_id).await }
            })
            .await
            .map(Some)
    }

    pub async fn send(&self, data: &SendInvitations) -> ApiResult<Vec<Invite>> {
        let invites = self.api.send_invitations(data).await?;
        self.apply(Mutation::InvitationsSent {
            team_id: data.team_id.clone(),
        });
        Ok(invites)
    }

    /// Accepting joins a team, so team queries are invalidated along with
    /// the invite lists.
    pub async fn accept(&self, token: &str) -> ApiResult<()> {
        self.api
            .accept_invitation(&AcceptInvitation {
                token: token.to_string(),
            })
            .await?;
        self.apply(Mutation::InvitationAccepted);
        Ok(())
    }

    pub async fn decline(&self, token: &str) -> ApiResult<()> {
        self.api
            .decline_invitation(&DeclineInvitation {
                token: token.to_string(),
            })
            .await?;
        self.apply(Mutation::InvitationDeclined);
        Ok(())
    }

    /// Revocation returns no body, so the owning team is supplied by the
    /// caller for precise invalidation.
    pub async fn revoke(&self, invite_id: &str, team_id: &str) -> ApiResult<()> {
        self.api.revoke_invitation(invite_id).await?;
        self.apply(Mutation::InvitationRevoked {
            team_id: team_id.to_string(),
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
