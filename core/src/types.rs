//! Wire DTOs for the to-do API.
//!
//! # Design
//! Defined independently of the server crate so a client build does not pull
//! in axum. The integration test catches any drift between the two.

use serde::{Deserialize, Serialize};

/// A to-do item as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: Option<String>,
    pub completed: bool,
}

/// Request payload for creating a to-do. Leave `id` at `0` to let the
/// server allocate one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub id: i64,
    pub title: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Request payload for PATCH and PUT.
///
/// A missing `title` keeps the stored one. `completed` is always sent and
/// always applied: the server treats an omitted value as `false`, so the
/// client makes it explicit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub completed: bool,
}

/// Result of a successful create: the stored item plus where to fetch it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    pub todo: Todo,
    pub location: Option<String>,
}
