//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, authenticated with
//! the persisted bearer token.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Pages turn errors into toasts via
//! `ApiError::user_message`, which prefers the server's own message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
use super::types::{ApiEnvelope, AuthPayload, LoginRequest, RegisterRequest, Todo, TodoPage};
use crate::state::filters::TodoFilters;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message suitable for a toast: the server's message when it sent one.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }

    /// True for 401/403 responses.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn todo_path(id: &str) -> String {
    format!("todos/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn todo_mark_path(id: &str) -> String {
    format!("todos/{id}/mark")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Pull a usable `message` out of an error response body.
#[cfg(any(test, feature = "hydrate"))]
fn error_message_from_body(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.message.map(|m| m.trim().to_owned()).filter(|m| !m.is_empty())
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use session::SessionPersistence;

    use super::{ApiError, bearer_header, endpoint, error_message_from_body};
    use crate::config::client_config;
    use crate::net::types::ApiEnvelope;
    use crate::util::storage::BrowserStorage;

    pub(super) fn url(path: &str) -> String {
        endpoint(&client_config().api_base_url, path)
    }

    /// Attach the persisted bearer token, if any.
    pub(super) fn authorized(builder: RequestBuilder) -> RequestBuilder {
        match SessionPersistence::new(BrowserStorage).bearer_token() {
            Some(token) => builder.header("Authorization", &bearer_header(&token)),
            None => builder,
        }
    }

    pub(super) async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let resp = builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        check(resp).await
    }

    pub(super) async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
        let request = builder.json(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        check(resp).await
    }

    async fn check(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let message = resp.text().await.ok().as_deref().and_then(error_message_from_body);
        Err(ApiError::Status { status, message })
    }

    pub(super) async fn envelope<T: DeserializeOwned>(resp: Response) -> Result<ApiEnvelope<T>, ApiError> {
        resp.json::<ApiEnvelope<T>>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Sign in via `POST /login`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, a non-2xx status or a body that
/// does not decode (including an unknown role).
pub async fn login(request: &LoginRequest) -> Result<ApiEnvelope<AuthPayload>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send_json(gloo_net::http::Request::post(&http::url("login")), request).await?;
        http::envelope(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /register`.
///
/// # Errors
///
/// Same failure modes as [`login`].
pub async fn register(request: &RegisterRequest) -> Result<ApiEnvelope<AuthPayload>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::send_json(gloo_net::http::Request::post(&http::url("register")), request).await?;
        http::envelope(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Ask the server who `token` belongs to via `GET /verify`.
///
/// The token is passed explicitly rather than read from storage so the result
/// can be matched against the session it was issued for.
///
/// # Errors
///
/// Returns an `ApiError` when the token is rejected or the call fails.
pub async fn verify(token: &str) -> Result<AuthPayload, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = gloo_net::http::Request::get(&http::url("verify")).header("Authorization", &bearer_header(token));
        let resp = http::send(builder).await?;
        Ok(http::envelope::<AuthPayload>(resp).await?.content)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Tell the server to end the session via `POST /logout`. Outcome is ignored.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let builder = http::authorized(gloo_net::http::Request::post(&http::url("logout")));
        if let Err(e) = http::send(builder).await {
            log::debug!("logout request failed: {e}");
        }
    }
}

/// Fetch one page of to-dos via `GET /todos`.
///
/// # Errors
///
/// Returns an `ApiError` on transport or decode failure.
pub async fn fetch_todos(filters: &TodoFilters) -> Result<TodoPage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let pairs = filters.query_pairs();
        let builder = gloo_net::http::Request::get(&http::url("todos")).query(pairs.iter().map(|(k, v)| (*k, v.as_str())));
        let resp = http::send(http::authorized(builder)).await?;
        Ok(http::envelope::<TodoPage>(resp).await?.content)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = filters;
        Err(ApiError::Unavailable)
    }
}

/// Create a to-do via `POST /todos`.
///
/// # Errors
///
/// Returns an `ApiError` on transport, status or decode failure.
pub async fn create_todo(item: &str) -> Result<ApiEnvelope<Todo>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::CreateTodoRequest { item: item.to_owned() };
        let builder = http::authorized(gloo_net::http::Request::post(&http::url("todos")));
        let resp = http::send_json(builder, &body).await?;
        http::envelope(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = item;
        Err(ApiError::Unavailable)
    }
}

/// Mark a to-do done or undone via `PUT /todos/{id}/mark`.
///
/// # Errors
///
/// Returns an `ApiError` on transport, status or decode failure.
pub async fn mark_todo(id: &str, done: bool) -> Result<ApiEnvelope<Todo>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::{MarkAction, MarkRequest};
        let body = MarkRequest { action: MarkAction::from_done(done) };
        let builder = http::authorized(gloo_net::http::Request::put(&http::url(&todo_mark_path(id))));
        let resp = http::send_json(builder, &body).await?;
        http::envelope(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, done);
        Err(ApiError::Unavailable)
    }
}

/// Delete one to-do via `DELETE /todos/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` on transport or status failure.
pub async fn delete_todo(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = http::authorized(gloo_net::http::Request::delete(&http::url(&todo_path(id))));
        http::send(builder).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Delete several to-dos concurrently, one request per id.
///
/// # Errors
///
/// Returns the first failure after all requests have completed.
pub async fn delete_todos(ids: &[String]) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let results = futures::future::join_all(ids.iter().map(|id| delete_todo(id))).await;
        results.into_iter().collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ids;
        Err(ApiError::Unavailable)
    }
}
