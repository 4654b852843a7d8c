// ============================================================================
// AUTH - Read and write access for the TMDB v4 API
// Write tokens need a request token approved through the website, so the
// acquirer logs in like a browser and approves the token itself.
// ============================================================================

use reqwest::header::{HeaderMap, COOKIE, SET_COOKIE};
use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode};
use serde_json::json;

use crate::config::Config;
use crate::error::{AuthError, AuthResult};
use crate::session::{AccessScope, ApiSession, ApiResponse};

pub const SESSION_COOKIE_PREFIX: &str = "tmdb.session";

const STEP_UNAUTHENTICATED_COOKIE: &str = "unauthenticated cookie";
const STEP_LOGIN: &str = "login";
const STEP_REQUEST_TOKEN: &str = "request token";
const STEP_APPROVE: &str = "approve request token";
const STEP_ACCESS_TOKEN: &str = "write access token";

/// Mints sessions for the API host.
///
/// The read session is built once from the configured read access token.
/// The write session is minted on demand by `write_access`.
pub struct CredentialAcquirer {
    config: Config,
    web: Client,
    read: ApiSession,
}

impl CredentialAcquirer {
    pub fn new(config: Config) -> AuthResult<Self> {
        // Login answers with a redirect; the Set-Cookie on that response is what we need
        let web = Client::builder()
            .redirect(Policy::none())
            .build()
            .map_err(AuthError::Client)?;
        let read = ApiSession::with_bearer(
            &config.api_url,
            &config.read_access_token,
            AccessScope::Read,
        )?;

        Ok(Self { config, web, read })
    }

    /// Session authorized with the pre-issued read access token. No network call.
    pub fn read_access(&self) -> ApiSession {
        self.read.clone()
    }

    /// Runs the full handshake and returns a session carrying the write token.
    ///
    /// Steps run strictly in order; the first failing step aborts the
    /// handshake and its error is returned unchanged.
    pub async fn write_access(&self) -> AuthResult<ApiSession> {
        tracing::info!(username = %self.config.username, "Acquiring TMDB write access token");

        let token = self.acquire_write_token().await.inspect_err(|e| {
            tracing::warn!("Write access handshake failed: {}", e);
        })?;

        tracing::info!("Write access token acquired");
        ApiSession::with_bearer(&self.config.api_url, &token, AccessScope::Write)
    }

    /// Same handshake as `write_access`, returning the raw token.
    pub async fn acquire_write_token(&self) -> AuthResult<String> {
        let anonymous_cookie = self.unauthenticated_cookie().await?;
        let cookie = self.authorized_cookie(&anonymous_cookie).await?;
        let request_token = self.request_token().await?;

        self.approve_request_token(&request_token, &cookie).await?;

        self.write_access_token(&request_token).await
    }

    /// GET the login page and pick up the anonymous session cookie.
    pub async fn unauthenticated_cookie(&self) -> AuthResult<String> {
        let step = STEP_UNAUTHENTICATED_COOKIE;
        tracing::debug!("{}: GET {}", step, self.config.web("/login"));

        let response = self
            .web
            .get(self.config.web("/login"))
            .send()
            .await
            .map_err(|source| AuthError::Transport { step, source })?;

        ensure_status(step, response.status(), StatusCode::is_success)?;
        session_cookie(response.headers()).ok_or(AuthError::MissingCookie { step })
    }

    /// POST the credentials to the login form and return the authenticated cookie.
    pub async fn authorized_cookie(&self, unauthenticated_cookie: &str) -> AuthResult<String> {
        let step = STEP_LOGIN;
        tracing::debug!("{}: POST {}", step, self.config.web("/login"));

        let response = self
            .web
            .post(self.config.web("/login"))
            .header(COOKIE, unauthenticated_cookie)
            .form(&[
                ("username", self.config.username.as_str()),
                ("password", self.config.password.as_str()),
            ])
            .send()
            .await
            .map_err(|source| AuthError::Transport { step, source })?;

        // A successful login always redirects; 200 means the form was re-rendered
        ensure_status(step, response.status(), StatusCode::is_redirection)?;
        session_cookie(response.headers()).ok_or(AuthError::MissingCookie { step })
    }

    /// Ask the API host for a fresh (unapproved) request token.
    pub async fn request_token(&self) -> AuthResult<String> {
        let step = STEP_REQUEST_TOKEN;
        let response = self
            .read
            .post_empty("/auth/request_token")
            .await
            .map_err(|source| AuthError::Transport { step, source })?;

        required_str(step, &response, "request_token")
    }

    /// Approve the request token on the website using the logged-in cookie.
    pub async fn approve_request_token(&self, request_token: &str, cookie: &str) -> AuthResult<()> {
        let step = STEP_APPROVE;
        let time = chrono::Utc::now().timestamp().to_string();
        tracing::debug!("{}: POST {}", step, self.config.web("/auth/access/approve"));

        let response = self
            .web
            .post(self.config.web("/auth/access/approve"))
            .header(COOKIE, cookie)
            .form(&[
                ("request_token", request_token),
                ("time", time.as_str()),
                ("submit", "Approve"),
            ])
            .send()
            .await
            .map_err(|source| AuthError::Transport { step, source })?;

        ensure_status(step, response.status(), |s| {
            s.is_success() || s.is_redirection()
        })
    }

    /// Exchange an approved request token for a write access token.
    pub async fn write_access_token(&self, request_token: &str) -> AuthResult<String> {
        let step = STEP_ACCESS_TOKEN;
        let response = self
            .read
            .post("/auth/access_token", &json!({ "request_token": request_token }))
            .await
            .map_err(|source| AuthError::Transport { step, source })?;

        required_str(step, &response, "access_token")
    }
}

/// Picks the `tmdb.session` cookie out of possibly many `Set-Cookie` headers.
///
/// Only the `name=value` pair is returned; cookie attributes are dropped.
pub fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|cookie| cookie.starts_with(SESSION_COOKIE_PREFIX))
        .map(|cookie| {
            cookie
                .split(';')
                .next()
                .unwrap_or(cookie)
                .trim()
                .to_string()
        })
}

fn ensure_status(
    step: &'static str,
    status: StatusCode,
    accept: impl Fn(&StatusCode) -> bool,
) -> AuthResult<()> {
    if accept(&status) {
        Ok(())
    } else {
        Err(AuthError::UnexpectedStatus { step, status })
    }
}

fn required_str(
    step: &'static str,
    response: &ApiResponse,
    field: &'static str,
) -> AuthResult<String> {
    ensure_status(step, response.status, StatusCode::is_success)?;
    response
        .str_field(field)
        .map(str::to_string)
        .ok_or(AuthError::MissingField { step, field })
}
