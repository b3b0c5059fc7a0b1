//! Wire DTOs for the Mission Control REST API.
//!
//! DESIGN
//! ======
//! Remote entities are owned entirely by the API service: the client never
//! assigns or mutates an id, it only echoes back whole records the server
//! returned, and every list is replaced wholesale on each fetch. Timestamps
//! stay as the opaque ISO strings the server sent.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A board as returned by `/api/v1/boards`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Server-assigned identifier (UUID string).
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// Payload for `POST /api/v1/boards`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCreate {
    pub name: String,
    pub slug: String,
}

/// A task as returned by `/api/v1/boards/{id}/tasks`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned identifier (UUID string).
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Workflow status; flows through as an opaque string. Known values:
    /// `inbox`, `assigned`, `in_progress`, `testing`, `review`, `done`.
    pub status: String,
    /// `low`, `medium`, or `high`.
    pub priority: String,
    #[serde(default)]
    pub due_at: Option<String>,
}

/// Payload for `POST /api/v1/boards/{id}/tasks`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCreate {
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
}

/// A wiki page summary as returned by `GET /api/v1/wiki`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WikiPageSummary {
    /// Server-assigned identifier (UUID string).
    pub id: String,
    pub title: String,
    pub slug: String,
    pub category: String,
    #[serde(default)]
    pub author_name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// A full wiki page as returned by `GET /api/v1/wiki/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WikiPage {
    /// Server-assigned identifier (UUID string).
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub author_name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Payload for `POST /api/v1/wiki`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WikiPageCreate {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub category: String,
}

/// Payload for `PATCH /api/v1/wiki/{id}`; unset fields are omitted so the
/// server only touches what the client edited.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WikiPageUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// First 10 characters of an ISO timestamp (the date part), for list rows
/// that show when a record last changed.
pub fn short_date(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}
