use crate::envelope::ErrorBody;
use crate::{ApiError, ApiResult, Notifier, SessionExpiry, TokenProvider};

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Method, Response};
use serde::de::DeserializeOwned;
use tz_config::ApiConfig;

/// HTTP client for the Taskzilla REST API.
///
/// The single chokepoint for every remote call: requests built through
/// [`ApiClient::request`] get the current bearer token attached, and every
/// failure leaves [`ApiClient::execute`] as an [`ApiError`] - downstream code
/// never sees a transport error.
pub struct ApiClient {
    base_url: String,
    http: ReqwestClient,
    tokens: Arc<dyn TokenProvider>,
    expiry: Arc<dyn SessionExpiry>,
    notifier: Arc<dyn Notifier>,
}

impl ApiClient {
    pub fn new(
        config: &ApiConfig,
        tokens: Arc<dyn TokenProvider>,
        expiry: Arc<dyn SessionExpiry>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = ReqwestClient::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("reqwest client construction only fails without a TLS backend");

        Self {
            base_url: config.trimmed_base_url().to_string(),
            http,
            tokens,
            expiry,
            notifier,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Outgoing stage: build a request with the current token, if any.
    ///
    /// A missing token never blocks the request; unauthenticated calls are
    /// allowed to proceed and fail server-side.
    pub(crate) fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.http.request(method, &url);

        if let Some(token) = self.tokens.token() {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Incoming stage: send the request and normalize any failure.
    pub(crate) async fn execute(&self, req: reqwest::RequestBuilder) -> ApiResult<Response> {
        let response = match req.send().await {
            Ok(response) => response,
            Err(e) => {
                log::debug!("Transport failure: {e}");
                return Err(self.fail(ApiError::Network));
            }
        };

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Error bodies are not guaranteed to be JSON; read tolerantly.
        let body: ErrorBody = match response.bytes().await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(e) => {
                log::debug!("Failed to read error body: {e}");
                ErrorBody::default()
            }
        };

        let error = match status.as_u16() {
            401 => {
                // Auth failure is handled globally, before the error even
                // reaches the caller. The handler is idempotent under
                // concurrent 401s.
                self.expiry.session_expired();
                ApiError::Unauthorized
            }
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            422 => ApiError::Validation {
                message: body
                    .message
                    .unwrap_or_else(|| String::from("Validation failed")),
                errors: body.errors.unwrap_or_default(),
            },
            500 => ApiError::Server,
            other => ApiError::Unexpected {
                status: other,
                message: body
                    .message
                    .unwrap_or_else(|| String::from("An error occurred")),
                errors: body.errors,
            },
        };

        Err(self.fail(error))
    }

    /// Execute and decode the response body.
    pub(crate) async fn execute_json<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> ApiResult<T> {
        let response = self.execute(req).await?;

        match response.json::<T>().await {
            Ok(value) => Ok(value),
            Err(e) => {
                log::debug!("Response decode failure: {e}");
                Err(self.fail(ApiError::Decode))
            }
        }
    }

    /// Raise the global toast for every normalized failure except validation,
    /// which is field-local by contract.
    fn fail(&self, error: ApiError) -> ApiError {
        if !error.is_validation() {
            self.notifier.error(&error.to_string());
        }
        error
    }
}
