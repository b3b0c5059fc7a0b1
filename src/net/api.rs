//! Authenticated REST helpers for the Mission Control API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning the generic failure since pages only
//! fetch from browser effects.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode — transport, non-2xx status, undecodable body —
//! collapses into [`FetchError`]. Callers attach their own static
//! user-facing message per call site and never interpret individual status
//! codes at this layer. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::types::{
    Board, BoardCreate, Task, TaskCreate, WikiPage, WikiPageCreate, WikiPageSummary,
    WikiPageUpdate,
};

/// Base URL used when `MISSION_CONTROL_API_URL` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Uniform request-failure signal surfaced to pages.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced an HTTP response.
    #[error("request failed")]
    Network,
    /// The server answered with a non-success status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The response body could not be decoded as the expected shape.
    #[error("malformed response body")]
    Decode,
}

/// Normalize a configured base URL: fall back to [`DEFAULT_API_BASE`] when
/// absent or empty, and strip trailing slashes before path concatenation.
pub fn normalize_base(configured: Option<&str>) -> String {
    let base = match configured {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_API_BASE,
    };
    base.trim_end_matches('/').to_owned()
}

/// The API base URL baked into this build.
pub fn api_base() -> String {
    normalize_base(option_env!("MISSION_CONTROL_API_URL"))
}

/// Authorization header value for an optional bearer token. An absent token
/// still sends an empty value; the API treats both as unauthenticated and
/// the existing service depends on the header being present.
pub fn bearer_value(token: Option<&str>) -> String {
    match token {
        Some(token) => format!("Bearer {token}"),
        None => String::new(),
    }
}

pub fn boards_path() -> String {
    "/api/v1/boards".to_owned()
}

pub fn board_path(board_id: &str) -> String {
    format!("/api/v1/boards/{board_id}")
}

pub fn board_tasks_path(board_id: &str) -> String {
    format!("/api/v1/boards/{board_id}/tasks")
}

pub fn wiki_path() -> String {
    "/api/v1/wiki".to_owned()
}

pub fn wiki_page_path(page_id: &str) -> String {
    format!("/api/v1/wiki/{page_id}")
}

/// Join two related fetch outcomes into one. Both requests are started
/// together and both must settle; whichever failure exists wins, with the
/// first argument taking precedence, so a page never partially renders.
pub fn join_outcomes<A, B, E>(first: Result<A, E>, second: Result<B, E>) -> Result<(A, B), E> {
    match (first, second) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(e), _) => Err(e),
        (_, Err(e)) => Err(e),
    }
}

/// A 2xx reply with no body where one was expected is a malformed reply.
#[cfg(any(test, feature = "hydrate"))]
fn require_body<T>(body: Option<T>) -> Result<T, FetchError> {
    body.ok_or(FetchError::Decode)
}

/// Core request: build the URL from the configured base, attach the JSON
/// content type and the bearer header, send, and normalize the outcome.
/// `Ok(None)` is the explicit absent-value result for 204 replies.
#[cfg(feature = "hydrate")]
async fn request_json<T: DeserializeOwned>(
    method: gloo_net::http::Method,
    path: &str,
    token: Option<&str>,
    body: Option<&serde_json::Value>,
) -> Result<Option<T>, FetchError> {
    let url = format!("{}{}", api_base(), path);
    let builder = gloo_net::http::RequestBuilder::new(&url)
        .method(method)
        .header("Authorization", &bearer_value(token));
    let request = match body {
        Some(json) => builder.json(json).map_err(|_| FetchError::Network)?,
        None => builder
            .header("Content-Type", "application/json")
            .build()
            .map_err(|_| FetchError::Network)?,
    };
    let response = request.send().await.map_err(|e| {
        log::warn!("api request to {path} failed to send: {e}");
        FetchError::Network
    })?;
    if !response.ok() {
        log::warn!("api request to {path} returned status {}", response.status());
        return Err(FetchError::Status(response.status()));
    }
    if response.status() == 204 {
        return Ok(None);
    }
    match response.json::<T>().await {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            log::warn!("api response from {path} failed to decode: {e}");
            Err(FetchError::Decode)
        }
    }
}

#[cfg(feature = "hydrate")]
fn to_body<P: serde::Serialize>(payload: &P) -> Result<serde_json::Value, FetchError> {
    serde_json::to_value(payload).map_err(|_| FetchError::Network)
}

/// Fetch all boards.
///
/// # Errors
///
/// Returns the generic [`FetchError`] on any transport, status, or decode
/// failure.
pub async fn list_boards(token: Option<&str>) -> Result<Vec<Board>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(gloo_net::http::Method::GET, &boards_path(), token, None)
            .await
            .and_then(require_body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(FetchError::Network)
    }
}

/// Create a board and return the server's record.
///
/// # Errors
///
/// Returns the generic [`FetchError`] on any transport, status, or decode
/// failure.
pub async fn create_board(token: Option<&str>, payload: &BoardCreate) -> Result<Board, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let body = to_body(payload)?;
        request_json(gloo_net::http::Method::POST, &boards_path(), token, Some(&body))
            .await
            .and_then(require_body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, payload);
        Err(FetchError::Network)
    }
}

/// Fetch a single board.
///
/// # Errors
///
/// Returns the generic [`FetchError`] on any transport, status, or decode
/// failure.
pub async fn get_board(token: Option<&str>, board_id: &str) -> Result<Board, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(gloo_net::http::Method::GET, &board_path(board_id), token, None)
            .await
            .and_then(require_body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, board_id);
        Err(FetchError::Network)
    }
}

/// Fetch the tasks on a board.
///
/// # Errors
///
/// Returns the generic [`FetchError`] on any transport, status, or decode
/// failure.
pub async fn list_tasks(token: Option<&str>, board_id: &str) -> Result<Vec<Task>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(
            gloo_net::http::Method::GET,
            &board_tasks_path(board_id),
            token,
            None,
        )
        .await
        .and_then(require_body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, board_id);
        Err(FetchError::Network)
    }
}

/// Create a task on a board and return the server's record.
///
/// # Errors
///
/// Returns the generic [`FetchError`] on any transport, status, or decode
/// failure.
pub async fn create_task(
    token: Option<&str>,
    board_id: &str,
    payload: &TaskCreate,
) -> Result<Task, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let body = to_body(payload)?;
        request_json(
            gloo_net::http::Method::POST,
            &board_tasks_path(board_id),
            token,
            Some(&body),
        )
        .await
        .and_then(require_body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, board_id, payload);
        Err(FetchError::Network)
    }
}

/// Fetch all wiki page summaries.
///
/// # Errors
///
/// Returns the generic [`FetchError`] on any transport, status, or decode
/// failure.
pub async fn list_wiki_pages(token: Option<&str>) -> Result<Vec<WikiPageSummary>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(gloo_net::http::Method::GET, &wiki_path(), token, None)
            .await
            .and_then(require_body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(FetchError::Network)
    }
}

/// Create a wiki page and return the server's record.
///
/// # Errors
///
/// Returns the generic [`FetchError`] on any transport, status, or decode
/// failure.
pub async fn create_wiki_page(
    token: Option<&str>,
    payload: &WikiPageCreate,
) -> Result<WikiPage, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let body = to_body(payload)?;
        request_json(gloo_net::http::Method::POST, &wiki_path(), token, Some(&body))
            .await
            .and_then(require_body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, payload);
        Err(FetchError::Network)
    }
}

/// Fetch a full wiki page.
///
/// # Errors
///
/// Returns the generic [`FetchError`] on any transport, status, or decode
/// failure.
pub async fn get_wiki_page(token: Option<&str>, page_id: &str) -> Result<WikiPage, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(
            gloo_net::http::Method::GET,
            &wiki_page_path(page_id),
            token,
            None,
        )
        .await
        .and_then(require_body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, page_id);
        Err(FetchError::Network)
    }
}

/// Update a wiki page and return the server's record.
///
/// # Errors
///
/// Returns the generic [`FetchError`] on any transport, status, or decode
/// failure.
pub async fn update_wiki_page(
    token: Option<&str>,
    page_id: &str,
    payload: &WikiPageUpdate,
) -> Result<WikiPage, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let body = to_body(payload)?;
        request_json(
            gloo_net::http::Method::PATCH,
            &wiki_page_path(page_id),
            token,
            Some(&body),
        )
        .await
        .and_then(require_body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, page_id, payload);
        Err(FetchError::Network)
    }
}

/// Delete a wiki page. A 204 reply is success; there is nothing to decode.
///
/// # Errors
///
/// Returns the generic [`FetchError`] on any transport or status failure.
pub async fn delete_wiki_page(token: Option<&str>, page_id: &str) -> Result<(), FetchError> {
    #[cfg(feature = "hydrate")]
    {
        request_json::<serde_json::Value>(
            gloo_net::http::Method::DELETE,
            &wiki_page_path(page_id),
            token,
            None,
        )
        .await
        .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, page_id);
        Err(FetchError::Network)
    }
}
