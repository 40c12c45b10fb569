//! Authenticated HTTP client
//!
//! Wraps reqwest with the session handling every Dodam backend expects:
//! the current access token rides along as a bearer credential, a 401 is
//! answered with exactly one refresh-and-replay, and every failure is both
//! reported to the [`Notifier`] and returned to the caller.

use std::sync::Arc;
use std::time::Duration;

use common::{
    ApiResponse, ClientConfig, ClientError, ClientResult, ErrorResponse, RefreshCredential,
};
use reqwest::header::{AUTHORIZATION, COOKIE, HeaderValue};
use reqwest::{Client, Method, Request, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::notify::{Notification, Notifier};
use crate::session::TokenStore;

/// Cookie the refresh token is delivered in
pub const REFRESH_COOKIE: &str = "refreshToken";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings shared by every client talking to the same auth backend
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Full URL of the credential refresh endpoint
    pub refresh_url: String,
    /// Client-side timeout per request
    pub timeout: Duration,
    /// How the refresh token is sent to the refresh endpoint
    pub refresh_credential: RefreshCredential,
}

impl ClientOptions {
    pub fn new(refresh_url: impl Into<String>) -> Self {
        Self {
            refresh_url: refresh_url.into(),
            timeout: DEFAULT_TIMEOUT,
            refresh_credential: RefreshCredential::default(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            refresh_url: config.refresh_url(),
            timeout: config.request_timeout(),
            refresh_credential: config.refresh_credential,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_refresh_credential(mut self, credential: RefreshCredential) -> Self {
        self.refresh_credential = credential;
        self
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<&'a str>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefreshedTokens {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
}

/// The refresh endpoint answers either enveloped or bare
#[derive(Deserialize)]
#[serde(untagged)]
enum RefreshResponse {
    Enveloped { data: RefreshedTokens },
    Bare(RefreshedTokens),
}

impl RefreshResponse {
    fn into_tokens(self) -> RefreshedTokens {
        match self {
            RefreshResponse::Enveloped { data } => data,
            RefreshResponse::Bare(tokens) => tokens,
        }
    }
}

/// HTTP client bound to one backend base URL
#[derive(Clone)]
pub struct AuthClient {
    http: Client,
    base_url: String,
    options: ClientOptions,
    store: TokenStore,
    notifier: Arc<dyn Notifier>,
}

impl AuthClient {
    /// Create a new client for `base_url`
    pub fn new(
        base_url: impl Into<String>,
        options: ClientOptions,
        store: TokenStore,
        notifier: Arc<dyn Notifier>,
    ) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|e| {
                ClientError::Configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            options,
            store,
            notifier,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    /// Start a request to `path`, relative to the base URL
    pub fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    /// Send a prepared request, returning the raw 2xx response
    pub async fn send(&self, builder: RequestBuilder) -> ClientResult<Response> {
        self.send_inner(builder).await.inspect_err(|e| self.report(e))
    }

    /// Send a prepared request and decode its success envelope
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> ClientResult<ApiResponse<T>> {
        async {
            let response = self.send_inner(builder).await?;
            decode(response).await
        }
        .await
        .inspect_err(|e| self.report(e))
    }

    /// Send a prepared request, discarding the response body
    pub async fn execute(&self, builder: RequestBuilder) -> ClientResult<()> {
        self.send(builder).await.map(|_| ())
    }

    /// Send `method path` with an optional JSON body
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<Response> {
        let mut builder = self.builder(method, path);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.send(builder).await
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<ApiResponse<T>> {
        self.send_json(self.builder(Method::GET, path)).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> ClientResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send_json(self.builder(Method::GET, path).query(query)).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ClientResult<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(self.builder(Method::POST, path).json(body)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> ClientResult<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(self.builder(Method::PUT, path).json(body)).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> ClientResult<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(self.builder(Method::PATCH, path).json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<ApiResponse<T>> {
        self.send_json(self.builder(Method::DELETE, path)).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn report(&self, error: &ClientError) {
        for notification in Notification::for_error(error) {
            self.notifier.notify(notification);
        }
    }

    async fn send_inner(&self, builder: RequestBuilder) -> ClientResult<Response> {
        let request = builder
            .build()
            .map_err(|e| ClientError::InvalidRequest(e.to_string()))?;
        // Taken before the bearer is attached; the replay gets the refreshed one.
        let replay = request.try_clone();

        debug!("{} {}", request.method(), request.url());
        let mut request = request;
        let access_token = self.store.access_token();
        if !access_token.is_empty() {
            set_bearer(&mut request, &access_token)?;
        }

        let response = self.dispatch(request).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return ensure_success(response).await;
        }

        let rejected = api_error(response).await;
        let Some(mut replay) = replay else {
            warn!("Request body cannot be replayed, not refreshing");
            return Err(rejected);
        };

        let access_token = match self.refresh().await {
            Ok(token) => token,
            Err(e) => {
                warn!("Token refresh failed, ending session: {}", e);
                self.store.clear_tokens();
                return Err(ClientError::session_expired(e));
            }
        };

        // Replayed once; a second 401 is an ordinary failure.
        set_bearer(&mut replay, &access_token)?;
        let response = self.dispatch(replay).await?;
        ensure_success(response).await
    }

    async fn dispatch(&self, request: Request) -> ClientResult<Response> {
        self.http
            .execute(request)
            .await
            .map_err(ClientError::from_transport)
    }

    /// Exchange the refresh token for a new access token and store it
    async fn refresh(&self) -> ClientResult<String> {
        info!("Access token rejected, refreshing session");

        let refresh_token = self.store.refresh_token();
        let mut builder = self.http.post(&self.options.refresh_url);
        let mut body = RefreshRequest {
            refresh_token: None,
        };
        if !refresh_token.is_empty() {
            match self.options.refresh_credential {
                RefreshCredential::Cookie => {
                    let mut cookie =
                        HeaderValue::try_from(format!("{REFRESH_COOKIE}={refresh_token}"))
                            .map_err(|e| ClientError::InvalidRequest(e.to_string()))?;
                    cookie.set_sensitive(true);
                    builder = builder.header(COOKIE, cookie);
                }
                RefreshCredential::Body => body.refresh_token = Some(&refresh_token),
            }
        }

        let request = builder
            .json(&body)
            .build()
            .map_err(|e| ClientError::InvalidRequest(e.to_string()))?;
        let response = ensure_success(self.dispatch(request).await?).await?;

        let bytes = response.bytes().await.map_err(ClientError::from_transport)?;
        let tokens = serde_json::from_slice::<RefreshResponse>(&bytes)
            .map_err(|e| ClientError::Decode(format!("Invalid refresh response: {}", e)))?
            .into_tokens();
        if tokens.access_token.is_empty() {
            return Err(ClientError::Decode(
                "Refresh response carried an empty access token".to_string(),
            ));
        }

        match tokens.refresh_token.filter(|t| !t.is_empty()) {
            Some(rotated) => self.store.set_tokens(tokens.access_token.clone(), rotated),
            None => self.store.set_access_token(tokens.access_token.clone()),
        }
        info!("Session refreshed");
        Ok(tokens.access_token)
    }
}

fn set_bearer(request: &mut Request, token: &str) -> ClientResult<()> {
    let mut value = HeaderValue::try_from(format!("Bearer {token}")).map_err(|e| {
        ClientError::InvalidRequest(format!("Access token is not a valid header value: {}", e))
    })?;
    value.set_sensitive(true);
    request.headers_mut().insert(AUTHORIZATION, value);
    Ok(())
}

async fn ensure_success(response: Response) -> ClientResult<Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(api_error(response).await)
    }
}

async fn api_error(response: Response) -> ClientError {
    let status = response.status();
    let body = match response.bytes().await {
        Ok(bytes) => serde_json::from_slice::<ErrorResponse>(&bytes).ok(),
        Err(e) => {
            warn!("Failed to read error body: {}", e);
            None
        }
    };
    ClientError::Api { status, body }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<ApiResponse<T>> {
    let bytes = response.bytes().await.map_err(ClientError::from_transport)?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
}
