// ============================================================================
// API SESSION - HTTP client with its own default headers
// Each session carries exactly one bearer token, fixed at construction
// ============================================================================

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::config::join_url;
use crate::error::{AuthError, AuthResult};

/// Which token a session was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessScope {
    Read,
    Write,
}

/// Client for the TMDB API host.
///
/// The `Authorization` header is installed as a default header on the
/// underlying `reqwest::Client`, so every request issued through this
/// session carries it. Cloning is cheap (the client is reference counted).
#[derive(Debug, Clone)]
pub struct ApiSession {
    client: Client,
    base_url: String,
    scope: AccessScope,
}

impl ApiSession {
    /// Session that sends `Authorization: Bearer <token>` on every request.
    pub fn with_bearer(base_url: &str, token: &str, scope: AccessScope) -> AuthResult<Self> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token))?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Self::build(base_url, headers, scope)
    }

    fn build(base_url: &str, headers: HeaderMap, scope: AccessScope) -> AuthResult<Self> {
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(AuthError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            scope,
        })
    }

    pub fn scope(&self) -> AccessScope {
        self.scope
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse, reqwest::Error> {
        self.send::<()>(Method::GET, path, None).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, reqwest::Error> {
        self.send(Method::POST, path, Some(body)).await
    }

    /// POST without a request body.
    pub async fn post_empty(&self, path: &str) -> Result<ApiResponse, reqwest::Error> {
        self.send::<()>(Method::POST, path, None).await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, reqwest::Error> {
        self.send(Method::PUT, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse, reqwest::Error> {
        self.send::<()>(Method::DELETE, path, None).await
    }

    /// DELETE with a JSON body (the list items endpoint takes one).
    pub async fn delete_with<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, reqwest::Error> {
        self.send(Method::DELETE, path, Some(body)).await
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse, reqwest::Error> {
        let url = self.url(path);
        let mut request = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = ApiResponse::read(request.send().await?).await?;
        tracing::debug!(
            %method,
            url = %url,
            status = response.status.as_u16(),
            scope = ?self.scope,
            "TMDB request"
        );
        Ok(response)
    }
}

/// Status, headers and decoded body of one response.
///
/// Bodies that are empty decode to `Value::Null`; bodies that are not JSON
/// are kept as a `Value::String` so failures still show what came back.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: Value,
}

impl ApiResponse {
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self, reqwest::Error> {
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;

        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        Ok(Self {
            status,
            headers,
            json,
        })
    }

    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// String field at the top level of the body, if present and non-empty.
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.json
            .get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}
