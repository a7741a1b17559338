use crate::envelope::Envelope;
use crate::{ApiClient, ApiResult};

use reqwest::Method;
use tz_core::{AuthResponse, LoginCredentials, RegisterData, User};

impl ApiClient {
    /// Exchange credentials for a token and the account record.
    pub async fn login(&self, credentials: &LoginCredentials) -> ApiResult<AuthResponse> {
        let req = self.request(Method::POST, "/login").json(credentials);
        let envelope: Envelope<AuthResponse> = self.execute_json(req).await?;
        Ok(envelope.data)
    }

    /// Create an account. The returned token is not used by the client
    /// flow - registration is followed by a manual login.
    pub async fn register(&self, data: &RegisterData) -> ApiResult<AuthResponse> {
        let req = self.request(Method::POST, "/register").json(data);
        let envelope: Envelope<AuthResponse> = self.execute_json(req).await?;
        Ok(envelope.data)
    }

    /// Invalidate the token server-side. The response body is ignored.
    pub async fn logout(&self) -> ApiResult<()> {
        let req = self.request(Method::POST, "/logout");
        self.execute(req).await?;
        Ok(())
    }

    /// Fetch the authenticated account (profile refresh).
    pub async fn profile(&self) -> ApiResult<User> {
        let req = self.request(Method::GET, "/user");
        let envelope: Envelope<User> = self.execute_json(req).await?;
        Ok(envelope.data)
    }
}
