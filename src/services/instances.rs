//! Book instance (copy) management service

use std::collections::HashMap;

use mongodb::bson::oid::ObjectId;

use super::FormOutcome;
use crate::{
    error::AppResult,
    forms::FormInput,
    models::{Book, BookInstance, BookInstanceBuilder, BookInstanceDetails, BOOK_INSTANCE_FORM},
    repository::Repository,
};

#[derive(Clone)]
pub struct InstancesService {
    repository: Repository,
}

impl InstancesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All copies with their book resolved
    pub async fn list(&self) -> AppResult<Vec<BookInstanceDetails>> {
        let (instances, books) = tokio::try_join!(
            self.repository.instances.find_all(),
            self.repository.books.find_all(),
        )?;

        let books: HashMap<ObjectId, Book> = books.into_iter().map(|b| (b.id, b)).collect();
        Ok(instances
            .into_iter()
            .map(|instance| BookInstanceDetails {
                book: books.get(&instance.book).cloned(),
                instance,
            })
            .collect())
    }

    pub async fn detail(&self, id: ObjectId) -> AppResult<BookInstanceDetails> {
        let instance = self.repository.instances.get_by_id(id).await?;
        let book = self.repository.books.find_by_id(instance.book).await?;
        Ok(BookInstanceDetails { instance, book })
    }

    /// Books offered by the copy form
    pub async fn choices(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    pub async fn create(&self, input: &FormInput) -> AppResult<FormOutcome<BookInstance>> {
        let submission = BOOK_INSTANCE_FORM.validate(input);
        if !submission.is_valid() {
            return Ok(FormOutcome::Rejected(submission));
        }

        let instance = BookInstanceBuilder::from_submission(&submission).build()?;
        self.repository.instances.insert(&instance).await?;
        tracing::info!("Book instance created id={} book={}", instance.id, instance.book);
        Ok(FormOutcome::Saved(instance))
    }

    /// Copy (with its book) and the book choices, fetched together
    pub async fn edit(&self, id: ObjectId) -> AppResult<(BookInstanceDetails, Vec<Book>)> {
        tokio::try_join!(self.detail(id), self.choices())
    }

    pub async fn update(
        &self,
        id: ObjectId,
        input: &FormInput,
    ) -> AppResult<FormOutcome<BookInstance>> {
        let submission = BOOK_INSTANCE_FORM.validate(input);
        if !submission.is_valid() {
            return Ok(FormOutcome::Rejected(submission));
        }

        let instance = BookInstanceBuilder::from_submission(&submission)
            .id(id)
            .build()?;
        self.repository.instances.replace(&instance).await?;
        tracing::info!("Book instance updated id={}", id);
        Ok(FormOutcome::Saved(instance))
    }

    pub async fn delete_details(&self, id: ObjectId) -> AppResult<Option<BookInstanceDetails>> {
        let Some(instance) = self.repository.instances.find_by_id(id).await? else {
            return Ok(None);
        };
        let book = self.repository.books.find_by_id(instance.book).await?;
        Ok(Some(BookInstanceDetails { instance, book }))
    }

    /// Remove a copy, returning it so the caller can point at its book
    pub async fn delete(&self, id: ObjectId) -> AppResult<Option<BookInstance>> {
        let removed = self.repository.instances.remove_by_id(id).await?;
        if removed.is_some() {
            tracing::info!("Book instance deleted id={}", id);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::AppError,
        models::InstanceStatus,
        services::testing::{form, services},
    };

    #[tokio::test]
    async fn test_create_then_delete() {
        let services = services();
        let book = ObjectId::new().to_hex();
        let outcome = services
            .instances
            .create(&form(&[
                ("book", book.as_str()),
                ("imprint", "First Edition"),
                ("status", "Available"),
                ("due_back", ""),
            ]))
            .await
            .unwrap();
        let FormOutcome::Saved(instance) = outcome else {
            panic!("expected copy to be saved");
        };
        assert_eq!(instance.url(), format!("/catalog/instance/{}", instance.id.to_hex()));

        // dangling book reference is tolerated on display
        let detail = services.instances.detail(instance.id).await.unwrap();
        assert!(detail.book.is_none());
        assert_eq!(detail.instance.status, InstanceStatus::Available);

        let removed = services.instances.delete(instance.id).await.unwrap().unwrap();
        assert_eq!(removed.book.to_hex(), book);
        assert!(matches!(
            services.instances.detail(instance.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(services.instances.delete(instance.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rejected_submission_persists_nothing() {
        let services = services();
        let outcome = services
            .instances
            .create(&form(&[("book", ""), ("imprint", ""), ("status", "Available")]))
            .await
            .unwrap();

        let FormOutcome::Rejected(submission) = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(submission.violations().len(), 2);
        assert!(services.instances.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_overwrites_under_same_id() {
        let services = services();
        let book = ObjectId::new().to_hex();
        let FormOutcome::Saved(instance) = services
            .instances
            .create(&form(&[
                ("book", book.as_str()),
                ("imprint", "First Edition"),
                ("status", "Available"),
            ]))
            .await
            .unwrap()
        else {
            panic!("expected copy to be saved");
        };

        let FormOutcome::Saved(updated) = services
            .instances
            .update(
                instance.id,
                &form(&[
                    ("book", book.as_str()),
                    ("imprint", "Second Edition"),
                    ("status", "Loaned"),
                    ("due_back", "2030-01-15"),
                ]),
            )
            .await
            .unwrap()
        else {
            panic!("expected copy to be updated");
        };

        assert_eq!(updated.id, instance.id);
        let stored = services.instances.detail(instance.id).await.unwrap().instance;
        assert_eq!(stored.imprint.as_str(), "Second Edition");
        assert_eq!(stored.status, InstanceStatus::Loaned);
        assert_eq!(services.instances.list().await.unwrap().len(), 1);
    }
}
