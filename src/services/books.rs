//! Book management service

use std::collections::HashMap;

use mongodb::bson::oid::ObjectId;

use super::{DeleteOutcome, FormOutcome};
use crate::{
    error::AppResult,
    forms::FormInput,
    models::{
        Author, Book, BookBuilder, BookDetails, BookInstance, BookListing, Genre, BOOK_FORM,
    },
    repository::Repository,
};

/// Lookup lists offered by the book form
#[derive(Debug, Clone, Default)]
pub struct BookChoices {
    pub authors: Vec<Author>,
    pub genres: Vec<Genre>,
}

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All books with their authors resolved
    pub async fn list(&self) -> AppResult<Vec<BookListing>> {
        let (books, authors) = tokio::try_join!(
            self.repository.books.list(),
            self.repository.authors.find_all(),
        )?;

        let authors: HashMap<ObjectId, Author> =
            authors.into_iter().map(|a| (a.id, a)).collect();
        Ok(books
            .into_iter()
            .map(|book| BookListing {
                author: authors.get(&book.author).cloned(),
                book,
            })
            .collect())
    }

    /// Book with author, genres and copies
    pub async fn detail(&self, id: ObjectId) -> AppResult<BookDetails> {
        let book = self.repository.books.get_by_id(id).await?;
        let (author, genres, instances) = tokio::try_join!(
            self.repository.authors.find_by_id(book.author),
            self.repository.genres.find_many(&book.genre),
            self.repository.instances.of_book(id),
        )?;

        Ok(BookDetails {
            book,
            author,
            genres,
            instances,
        })
    }

    pub async fn choices(&self) -> AppResult<BookChoices> {
        let (authors, genres) = tokio::try_join!(
            self.repository.authors.list(),
            self.repository.genres.list(),
        )?;
        Ok(BookChoices { authors, genres })
    }

    pub async fn create(&self, input: &FormInput) -> AppResult<FormOutcome<Book>> {
        let submission = BOOK_FORM.validate(input);
        if !submission.is_valid() {
            return Ok(FormOutcome::Rejected(submission));
        }

        let book = BookBuilder::from_submission(&submission).build()?;
        self.repository.books.insert(&book).await?;
        tracing::info!("Book created id={}", book.id);
        Ok(FormOutcome::Saved(book))
    }

    /// Book and the form lookup lists, fetched together
    pub async fn edit(&self, id: ObjectId) -> AppResult<(Book, BookChoices)> {
        tokio::try_join!(self.repository.books.get_by_id(id), self.choices())
    }

    pub async fn update(&self, id: ObjectId, input: &FormInput) -> AppResult<FormOutcome<Book>> {
        let submission = BOOK_FORM.validate(input);
        if !submission.is_valid() {
            return Ok(FormOutcome::Rejected(submission));
        }

        let book = BookBuilder::from_submission(&submission).id(id).build()?;
        self.repository.books.replace(&book).await?;
        tracing::info!("Book updated id={}", id);
        Ok(FormOutcome::Saved(book))
    }

    pub async fn delete_details(
        &self,
        id: ObjectId,
    ) -> AppResult<Option<(Book, Vec<BookInstance>)>> {
        let (book, instances) = tokio::try_join!(
            self.repository.books.find_by_id(id),
            self.repository.instances.of_book(id),
        )?;
        Ok(book.map(|book| (book, instances)))
    }

    /// Delete a book unless copies of it still exist
    pub async fn delete(&self, id: ObjectId) -> AppResult<DeleteOutcome<(Book, Vec<BookInstance>)>> {
        let Some((book, instances)) = self.delete_details(id).await? else {
            return Ok(DeleteOutcome::Missing);
        };
        if !instances.is_empty() {
            tracing::info!(
                "Book delete blocked: id={} has {} copies",
                id,
                instances.len()
            );
            return Ok(DeleteOutcome::Blocked((book, instances)));
        }

        self.repository.books.remove_by_id(id).await?;
        tracing::info!("Book deleted id={}", id);
        Ok(DeleteOutcome::Deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::{AppError, StoreError},
        repository::Repository,
        services::{
            testing::{form, services},
            Services,
        },
        store::MockDocumentStore,
    };
    use std::sync::Arc;

    async fn seed_author(services: &Services) -> Author {
        match services
            .authors
            .create(&form(&[("first_name", "Frank"), ("family_name", "Herbert")]))
            .await
            .unwrap()
        {
            FormOutcome::Saved(author) => author,
            FormOutcome::Rejected(_) => unreachable!(),
        }
    }

    async fn seed_book(services: &Services, author: &Author) -> Book {
        let author = author.id.to_hex();
        match services
            .books
            .create(&form(&[
                ("title", "Dune"),
                ("author", author.as_str()),
                ("summary", "Spice"),
                ("isbn", "9780441013593"),
            ]))
            .await
            .unwrap()
        {
            FormOutcome::Saved(book) => book,
            FormOutcome::Rejected(s) => panic!("rejected: {:?}", s.violations()),
        }
    }

    #[tokio::test]
    async fn test_list_resolves_authors() {
        let services = services();
        let author = seed_author(&services).await;
        seed_book(&services, &author).await;

        let listing = services.books.list().await.unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].author.as_ref().unwrap().id, author.id);
    }

    #[tokio::test]
    async fn test_delete_blocked_by_copies() {
        let services = services();
        let author = seed_author(&services).await;
        let book = seed_book(&services, &author).await;
        let book_id = book.id.to_hex();
        services
            .instances
            .create(&form(&[
                ("book", book_id.as_str()),
                ("imprint", "Chilton, 1965"),
                ("status", "Available"),
            ]))
            .await
            .unwrap();

        let outcome = services.books.delete(book.id).await.unwrap();
        assert!(matches!(outcome, DeleteOutcome::Blocked((_, ref copies)) if copies.len() == 1));
        assert!(services.books.detail(book.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_detail_of_unknown_book_is_not_found() {
        let services = services();
        let result = services.books.detail(ObjectId::new()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_store_failure_is_forwarded() {
        let mut store = MockDocumentStore::new();
        store
            .expect_find()
            .returning(|_, _| Err(StoreError::Malformed("connection reset".into())));
        let services = Services::new(Repository::new(Arc::new(store)));

        let result = services.books.list().await;
        tokio_test::assert_err!(&result);
        assert!(matches!(result, Err(AppError::Database(_))));
    }
}
