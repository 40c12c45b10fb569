//! Login, logout and sign-up

use common::ClientResult;
use tracing::info;

use crate::http::AuthClient;
use crate::models::{LoginRequest, LoginTokens, SignUpRequest};

/// Session lifecycle against the main backend
#[derive(Clone)]
pub struct AuthApi {
    client: AuthClient,
}

impl AuthApi {
    pub fn new(client: AuthClient) -> Self {
        Self { client }
    }

    /// Log in and store the issued token pair
    pub async fn login(&self, id: &str, pw: &str) -> ClientResult<()> {
        info!("Login attempt for user: {}", id);

        let credentials = LoginRequest {
            id: id.to_string(),
            pw: pw.to_string(),
        };
        let tokens: LoginTokens = self.client.post("auth/login", &credentials).await?.data;
        self.client
            .store()
            .set_tokens(tokens.access_token, tokens.refresh_token);

        info!("Logged in as {}", id);
        Ok(())
    }

    /// Forget the current session
    pub fn logout(&self) {
        info!("Logging out");
        self.client.store().clear_tokens();
    }

    /// Register a new student account
    pub async fn sign_up(&self, request: &SignUpRequest) -> ClientResult<()> {
        info!("Registering student: {}", request.id);
        self.client
            .execute(
                self.client
                    .builder(reqwest::Method::POST, "member/join-student")
                    .json(request),
            )
            .await
    }
}
