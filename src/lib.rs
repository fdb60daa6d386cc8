//! Local library catalog server
//!
//! Server-rendered CRUD over books, authors, genres and book copies, backed
//! by a document store.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod repository;
pub mod services;
pub mod store;
pub mod views;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(store: Arc<dyn store::DocumentStore>) -> Self {
        Self {
            services: Arc::new(services::Services::new(repository::Repository::new(store))),
        }
    }
}
