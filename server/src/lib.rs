//! In-memory to-do HTTP service.
//!
//! # Overview
//! A `ToDoStore` holds the items and the id allocator. The axum router maps
//! `GET/POST /todo` and `GET/PATCH/PUT/DELETE /todo/{id}` onto it, optionally
//! under a route prefix such as `/api`.
//!
//! # Design
//! - The store is an ordinary value built once at startup and moved into the
//!   router state behind a `RwLock`; tests build their own.
//! - Handlers parse bodies themselves so any malformed payload maps to the
//!   same 400 response regardless of content type.
//! - PATCH and PUT share one handler.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod store;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::ApiError;
pub use model::ToDoItem;
pub use store::{SharedStore, StoreError, ToDoStore};

use handlers::{create_todo, delete_todo, get_todo, health, list_todos, update_todo};

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    /// Normalized route prefix, used to build `Location` headers.
    pub prefix: String,
}

/// Router over the seeded store with no route prefix.
pub fn app() -> Router {
    router(ToDoStore::seeded().into_shared(), "")
}

/// Router over `store`, with the `/todo` routes mounted under `prefix`.
pub fn router(store: SharedStore, prefix: &str) -> Router {
    let prefix = config::normalize_prefix(prefix);
    let state = AppState {
        store,
        prefix: prefix.clone(),
    };

    let todos = Router::new()
        .route("/todo", get(list_todos).post(create_todo))
        .route(
            "/todo/{id}",
            get(get_todo)
                .patch(update_todo)
                .put(update_todo)
                .delete(delete_todo),
        );
    let todos = if prefix.is_empty() {
        todos
    } else {
        Router::new().nest(&prefix, todos)
    };

    Router::new()
        .route("/health", get(health))
        .merge(todos)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve according to `config` on an already bound listener.
pub async fn serve(listener: TcpListener, config: &Config) -> Result<(), std::io::Error> {
    let store = if config.no_seed {
        ToDoStore::new()
    } else {
        ToDoStore::seeded()
    };
    tracing::info!(items = store.len(), prefix = %config.prefix(), "starting todo service");
    axum::serve(listener, router(store.into_shared(), &config.prefix())).await
}
