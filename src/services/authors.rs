//! Author management service

use mongodb::bson::oid::ObjectId;

use super::{DeleteOutcome, FormOutcome};
use crate::{
    error::AppResult,
    forms::FormInput,
    models::{Author, AuthorBuilder, AuthorDetails, AUTHOR_FORM},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Author>> {
        self.repository.authors.list().await
    }

    /// Author with their books
    pub async fn detail(&self, id: ObjectId) -> AppResult<AuthorDetails> {
        let (author, books) = tokio::try_join!(
            self.repository.authors.get_by_id(id),
            self.repository.books.by_author(id),
        )?;
        Ok(AuthorDetails { author, books })
    }

    pub async fn create(&self, input: &FormInput) -> AppResult<FormOutcome<Author>> {
        let submission = AUTHOR_FORM.validate(input);
        if !submission.is_valid() {
            return Ok(FormOutcome::Rejected(submission));
        }

        let author = AuthorBuilder::from_submission(&submission).build();
        self.repository.authors.insert(&author).await?;
        tracing::info!("Author created id={}", author.id);
        Ok(FormOutcome::Saved(author))
    }

    pub async fn edit(&self, id: ObjectId) -> AppResult<Author> {
        self.repository.authors.get_by_id(id).await
    }

    pub async fn update(&self, id: ObjectId, input: &FormInput) -> AppResult<FormOutcome<Author>> {
        let submission = AUTHOR_FORM.validate(input);
        if !submission.is_valid() {
            return Ok(FormOutcome::Rejected(submission));
        }

        let author = AuthorBuilder::from_submission(&submission).id(id).build();
        self.repository.authors.replace(&author).await?;
        tracing::info!("Author updated id={}", id);
        Ok(FormOutcome::Saved(author))
    }

    pub async fn delete_details(&self, id: ObjectId) -> AppResult<Option<AuthorDetails>> {
        let (author, books) = tokio::try_join!(
            self.repository.authors.find_by_id(id),
            self.repository.books.by_author(id),
        )?;
        Ok(author.map(|author| AuthorDetails { author, books }))
    }

    /// Delete an author unless books still reference them
    pub async fn delete(&self, id: ObjectId) -> AppResult<DeleteOutcome<AuthorDetails>> {
        let Some(details) = self.delete_details(id).await? else {
            return Ok(DeleteOutcome::Missing);
        };
        if !details.books.is_empty() {
            tracing::info!(
                "Author delete blocked: id={} has {} book(s)",
                id,
                details.books.len()
            );
            return Ok(DeleteOutcome::Blocked(details));
        }

        self.repository.authors.remove_by_id(id).await?;
        tracing::info!("Author deleted id={}", id);
        Ok(DeleteOutcome::Deleted)
    }
}
