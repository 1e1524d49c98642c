//! `AniListClient` - HTTP implementation of [`LocalGraphqlApi`].

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::instrument;
use url::Url;

use super::api::LocalGraphqlApi;
use super::envelope::{GraphqlRequest, GraphqlResponse};
use super::error::AniListError;
use super::operation::Operation;
use super::rate_limiter::RateLimiter;

/// Public AniList GraphQL endpoint.
pub const ANILIST_ENDPOINT: &str = "https://graphql.anilist.co";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// AniList GraphQL client.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct AniListClient {
    /// HTTP client.
    http_client: Client,
    /// GraphQL endpoint.
    endpoint: Url,
    /// Optional OAuth access token.
    access_token: Option<String>,
    /// Rate limiter.
    rate_limiter: Arc<Mutex<RateLimiter>>,
}

/// Builder for `AniListClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct AniListClientBuilder {
    endpoint: Option<Url>,
    user_agent: Option<String>,
    access_token: Option<String>,
    min_interval: Option<Duration>,
    timeout: Option<Duration>,
}

impl AniListClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            endpoint: None,
            user_agent: None,
            access_token: None,
            min_interval: None,
            timeout: None,
        }
    }

    /// Overrides the endpoint (for wiremock in tests).
    #[must_use]
    pub fn endpoint(mut self, url: Url) -> Self {
        self.endpoint = Some(url);
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets an OAuth access token sent as a Bearer header.
    #[must_use]
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Sets the minimum request interval (default: 700ms).
    #[must_use]
    pub const fn min_interval(mut self, interval: Duration) -> Self {
        self.min_interval = Some(interval);
        self
    }

    /// Sets the per-request timeout (default: 30s).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<AniListClient> {
        let user_agent = self.user_agent.context("user_agent is required")?;

        let endpoint = if let Some(url) = self.endpoint {
            url
        } else {
            let result = Url::parse(ANILIST_ENDPOINT);
            result.context("invalid default endpoint URL")?
        };

        let rate_limiter = self
            .min_interval
            .map_or_else(RateLimiter::default_interval, RateLimiter::new);

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .context("failed to build HTTP client")?;

        Ok(AniListClient {
            http_client,
            endpoint,
            access_token: self.access_token,
            rate_limiter: Arc::new(Mutex::new(rate_limiter)),
        })
    }
}

impl AniListClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> AniListClientBuilder {
        AniListClientBuilder::new()
    }

    /// GraphQL endpoint this client posts to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Interprets a response body.
    ///
    /// GraphQL errors win over the HTTP status, since AniList reports
    /// e.g. unknown ids as `404` with an `errors` array.
    pub(crate) fn parse_response<T: DeserializeOwned>(
        operation: &'static str,
        status: u16,
        body: &str,
    ) -> std::result::Result<T, AniListError> {
        let is_success = (200..300).contains(&status);

        let envelope = match serde_json::from_str::<GraphqlResponse>(body) {
            Ok(envelope) => envelope,
            Err(_) if !is_success => return Err(AniListError::http(operation, status, body)),
            Err(source) => return Err(AniListError::Decode { operation, source }),
        };

        if let Some(errors) = envelope.errors
            && !errors.is_empty()
        {
            return Err(AniListError::Remote {
                operation,
                status,
                errors,
            });
        }

        if !is_success {
            return Err(AniListError::http(operation, status, body));
        }

        let data = envelope
            .data
            .ok_or(AniListError::MissingData { operation })?;
        serde_json::from_value(data).map_err(|source| AniListError::Decode { operation, source })
    }
}

impl LocalGraphqlApi for AniListClient {
    #[instrument(skip_all)]
    async fn execute<O: Operation>(
        &self,
        _operation: &O,
        variables: &O::Variables,
    ) -> Result<O::Response> {
        self.rate_limiter.lock().await.wait().await;

        let document = O::document();
        let payload = GraphqlRequest {
            query: &document,
            operation_name: O::NAME,
            variables,
        };

        let mut request = self
            .http_client
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .json(&payload);
        if let Some(ref token) = self.access_token {
            request = request.bearer_auth(token);
        }

        tracing::debug!(operation = O::NAME, endpoint = %self.endpoint, "AniList request");

        let response = request
            .send()
            .await
            .map_err(|source| AniListError::Transport {
                operation: O::NAME,
                source,
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|source| AniListError::Transport {
                operation: O::NAME,
                source,
            })?;

        tracing::debug!(operation = O::NAME, status, body_len = body.len(), "AniList response");
        tracing::trace!(
            operation = O::NAME,
            body_preview = &body[..body.floor_char_boundary(500)],
            "AniList response body preview"
        );

        Ok(Self::parse_response(O::NAME, status, &body)?)
    }
}
