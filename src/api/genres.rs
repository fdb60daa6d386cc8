//! Genre pages

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use maud::Markup;

use super::{path_id, posted_id, FormBody};
use crate::{
    error::AppResult,
    forms::FormValues,
    services::{DeleteOutcome, FormOutcome},
    views, AppState,
};

const LIST_URL: &str = "/catalog/genres";

pub async fn list(State(state): State<AppState>) -> AppResult<Markup> {
    let genres = state.services.genres.list().await?;
    Ok(views::genres::list(&genres))
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Markup> {
    let id = path_id(&id, "Genre")?;
    let details = state.services.genres.detail(id).await?;
    Ok(views::genres::detail(&details))
}

pub async fn create_form() -> Markup {
    views::genres::form("Create Genre", &FormValues::default(), &[])
}

pub async fn create(
    State(state): State<AppState>,
    FormBody(input): FormBody,
) -> AppResult<Response> {
    Ok(match state.services.genres.create(&input).await? {
        FormOutcome::Saved(genre) => Redirect::to(&genre.url()).into_response(),
        FormOutcome::Rejected(submission) => views::genres::form(
            "Create Genre",
            submission.values(),
            submission.violations(),
        )
        .into_response(),
    })
}

pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Markup> {
    let id = path_id(&id, "Genre")?;
    let genre = state.services.genres.edit(id).await?;
    Ok(views::genres::form("Update Genre", &genre.form_values(), &[]))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    FormBody(input): FormBody,
) -> AppResult<Response> {
    let id = path_id(&id, "Genre")?;
    Ok(match state.services.genres.update(id, &input).await? {
        FormOutcome::Saved(genre) => Redirect::to(&genre.url()).into_response(),
        FormOutcome::Rejected(submission) => views::genres::form(
            "Update Genre",
            submission.values(),
            submission.violations(),
        )
        .into_response(),
    })
}

pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let Ok(id) = path_id(&id, "Genre") else {
        return Ok(Redirect::to(LIST_URL).into_response());
    };
    Ok(match state.services.genres.delete_details(id).await? {
        Some(details) => views::genres::delete(&details).into_response(),
        None => Redirect::to(LIST_URL).into_response(),
    })
}

pub async fn delete(
    State(state): State<AppState>,
    FormBody(input): FormBody,
) -> AppResult<Response> {
    let Some(id) = posted_id(&input, "genreid") else {
        return Ok(Redirect::to(LIST_URL).into_response());
    };
    Ok(match state.services.genres.delete(id).await? {
        DeleteOutcome::Blocked(details) => views::genres::delete(&details).into_response(),
        DeleteOutcome::Deleted | DeleteOutcome::Missing => Redirect::to(LIST_URL).into_response(),
    })
}
