//! Request builder and response parser for the to-do API.
//!
//! Each operation is a `build_*` method producing an `HttpRequest` and a
//! `parse_*` method consuming the matching `HttpResponse`. The caller runs
//! the round-trip in between.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Created, Todo, UpdateTodo};

/// Stateless client for the to-do API.
///
/// `base_url` may include a route prefix, e.g. `http://host:3000/api`.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, format!("{}/todo", self.base_url))
    }

    pub fn build_get_todo(&self, id: i64) -> HttpRequest {
        self.bare(HttpMethod::Get, self.item_path(id))
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        with_json(HttpMethod::Post, format!("{}/todo", self.base_url), input)
    }

    pub fn build_patch_todo(&self, id: i64, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        with_json(HttpMethod::Patch, self.item_path(id), input)
    }

    /// Same merge as `build_patch_todo`; the server treats both verbs alike.
    pub fn build_put_todo(&self, id: i64, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        with_json(HttpMethod::Put, self.item_path(id), input)
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        self.bare(HttpMethod::Delete, self.item_path(id))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        from_body(&response)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        from_body(&response)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Created, ApiError> {
        check_status(&response, 201)?;
        Ok(Created {
            todo: from_body(&response)?,
            location: response.header("location").map(str::to_string),
        })
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        from_body(&response)
    }

    /// Returns the item the server removed.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        from_body(&response)
    }

    fn item_path(&self, id: i64) -> String {
        format!("{}/todo/{id}", self.base_url)
    }

    fn bare(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }
}

fn with_json<T: Serialize>(
    method: HttpMethod,
    path: String,
    input: &T,
) -> Result<HttpRequest, ApiError> {
    let body =
        serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
    Ok(HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

fn from_body<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        status if status == expected => Ok(()),
        404 => Err(ApiError::NotFound),
        400 => Err(ApiError::BadRequest(response.body.clone())),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
