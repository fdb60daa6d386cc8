//! HTTP handlers and routing for the catalog

pub mod authors;
pub mod books;
pub mod genres;
pub mod health;
pub mod index;
pub mod instances;

use axum::{
    async_trait,
    extract::{rejection::FormRejection, FromRequest, Request},
    response::Redirect,
    routing::get,
    Form, Router,
};
use mongodb::bson::oid::ObjectId;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::{
    error::{AppError, AppResult},
    forms::FormInput,
    services::parse_id,
    AppState,
};

/// Urlencoded request body. Malformed bodies become a 400 error page.
pub struct FormBody(pub FormInput);

#[async_trait]
impl<S: Send + Sync> FromRequest<S> for FormBody {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(input) = Form::<FormInput>::from_request(req, state)
            .await
            .map_err(|e: FormRejection| AppError::BadRequest(e.body_text()))?;
        Ok(FormBody(input))
    }
}

/// Identifier from a path segment; anything unparsable names no record
fn path_id(raw: &str, kind: &str) -> AppResult<ObjectId> {
    parse_id(raw).ok_or_else(|| AppError::NotFound(format!("{} not found", kind)))
}

/// Identifier posted by a delete confirmation form
fn posted_id(input: &FormInput, field: &str) -> Option<ObjectId> {
    input.get(field).and_then(parse_id)
}

/// Build the application router with every catalog route
pub fn router(state: AppState) -> Router {
    let catalog = Router::new()
        .route("/", get(index::index))
        // Books
        .route("/book/create", get(books::create_form).post(books::create))
        .route("/book/:id/delete", get(books::delete_form).post(books::delete))
        .route("/book/:id/update", get(books::update_form).post(books::update))
        .route("/book/:id", get(books::detail))
        .route("/books", get(books::list))
        // Authors
        .route("/author/create", get(authors::create_form).post(authors::create))
        .route("/author/:id/delete", get(authors::delete_form).post(authors::delete))
        .route("/author/:id/update", get(authors::update_form).post(authors::update))
        .route("/author/:id", get(authors::detail))
        .route("/authors", get(authors::list))
        // Genres
        .route("/genre/create", get(genres::create_form).post(genres::create))
        .route("/genre/:id/delete", get(genres::delete_form).post(genres::delete))
        .route("/genre/:id/update", get(genres::update_form).post(genres::update))
        .route("/genre/:id", get(genres::detail))
        .route("/genres", get(genres::list))
        // Book instances
        .route("/instance/create", get(instances::create_form).post(instances::create))
        .route("/instance/:id/delete", get(instances::delete_form).post(instances::delete))
        .route("/instance/:id/update", get(instances::update_form).post(instances::update))
        .route("/instance/:id", get(instances::detail))
        .route("/instances", get(instances::list));

    Router::new()
        .route("/", get(|| async { Redirect::to("/catalog") }))
        .route("/health", get(health::health_check))
        .nest("/catalog", catalog)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
}
