//! Genre management service

use mongodb::bson::oid::ObjectId;

use super::{DeleteOutcome, FormOutcome};
use crate::{
    error::AppResult,
    forms::FormInput,
    models::{Genre, GenreBuilder, GenreDetails, GENRE_FORM},
    repository::Repository,
};

const DUPLICATE_NAME: &str = "A genre with this name already exists";

#[derive(Clone)]
pub struct GenresService {
    repository: Repository,
}

impl GenresService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Genre>> {
        self.repository.genres.list().await
    }

    /// Genre with the books filed under it
    pub async fn detail(&self, id: ObjectId) -> AppResult<GenreDetails> {
        let (genre, books) = tokio::try_join!(
            self.repository.genres.get_by_id(id),
            self.repository.books.by_genre(id),
        )?;
        Ok(GenreDetails { genre, books })
    }

    /// Create a genre. A genre whose name already exists (ignoring case) is
    /// returned instead of inserting a duplicate.
    pub async fn create(&self, input: &FormInput) -> AppResult<FormOutcome<Genre>> {
        let submission = GENRE_FORM.validate(input);
        if !submission.is_valid() {
            return Ok(FormOutcome::Rejected(submission));
        }

        let genre = GenreBuilder::from_submission(&submission).build();
        if let Some(existing) = self.repository.genres.find_by_name(&genre.name).await? {
            tracing::info!("Genre create: '{}' already exists as id={}", genre.name, existing.id);
            return Ok(FormOutcome::Saved(existing));
        }

        self.repository.genres.insert(&genre).await?;
        tracing::info!("Genre created id={}", genre.id);
        Ok(FormOutcome::Saved(genre))
    }

    pub async fn edit(&self, id: ObjectId) -> AppResult<Genre> {
        self.repository.genres.get_by_id(id).await
    }

    /// Rename a genre. The new name may not belong to another genre.
    pub async fn update(&self, id: ObjectId, input: &FormInput) -> AppResult<FormOutcome<Genre>> {
        let mut submission = GENRE_FORM.validate(input);
        if !submission.is_valid() {
            return Ok(FormOutcome::Rejected(submission));
        }

        let genre = GenreBuilder::from_submission(&submission).id(id).build();
        if let Some(existing) = self.repository.genres.find_by_name(&genre.name).await? {
            if existing.id != id {
                tracing::info!(
                    "Genre update rejected: '{}' already exists as id={}",
                    genre.name,
                    existing.id
                );
                submission.reject("name", DUPLICATE_NAME);
                return Ok(FormOutcome::Rejected(submission));
            }
        }

        self.repository.genres.replace(&genre).await?;
        tracing::info!("Genre updated id={}", id);
        Ok(FormOutcome::Saved(genre))
    }

    /// Genre and its books for the delete confirmation page
    pub async fn delete_details(&self, id: ObjectId) -> AppResult<Option<GenreDetails>> {
        let (genre, books) = tokio::try_join!(
            self.repository.genres.find_by_id(id),
            self.repository.books.by_genre(id),
        )?;
        Ok(genre.map(|genre| GenreDetails { genre, books }))
    }

    /// Delete a genre unless books still reference it
    pub async fn delete(&self, id: ObjectId) -> AppResult<DeleteOutcome<GenreDetails>> {
        let Some(details) = self.delete_details(id).await? else {
            return Ok(DeleteOutcome::Missing);
        };
        if !details.books.is_empty() {
            tracing::info!(
                "Genre delete blocked: id={} has {} book(s)",
                id,
                details.books.len()
            );
            return Ok(DeleteOutcome::Blocked(details));
        }

        self.repository.genres.remove_by_id(id).await?;
        tracing::info!("Genre deleted id={}", id);
        Ok(DeleteOutcome::Deleted)
    }
}
