//! Business logic services

pub mod authors;
pub mod books;
pub mod catalog;
pub mod genres;
pub mod instances;

use mongodb::bson::oid::ObjectId;

use crate::{forms::Submission, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub books: books::BooksService,
    pub authors: authors::AuthorsService,
    pub genres: genres::GenresService,
    pub instances: instances::InstancesService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            books: books::BooksService::new(repository.clone()),
            authors: authors::AuthorsService::new(repository.clone()),
            genres: genres::GenresService::new(repository.clone()),
            instances: instances::InstancesService::new(repository),
        }
    }
}

/// Result of a create or update submission
#[derive(Debug)]
pub enum FormOutcome<T> {
    /// Record persisted
    Saved(T),
    /// Validation failed; nothing was written
    Rejected(Submission),
}

/// Result of a delete request for a record that may have dependents
#[derive(Debug)]
pub enum DeleteOutcome<T> {
    Deleted,
    /// Dependents still reference the record; nothing was removed
    Blocked(T),
    Missing,
}

/// Identifiers arrive as path segments or form fields. Anything that is not
/// a valid ObjectId cannot name a record.
pub fn parse_id(raw: &str) -> Option<ObjectId> {
    ObjectId::parse_str(raw.trim()).ok()
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use super::Services;
    use crate::{forms::FormInput, repository::Repository, store::MemoryStore};

    pub fn services() -> Services {
        Services::new(Repository::new(Arc::new(MemoryStore::new())))
    }

    pub fn form(pairs: &[(&str, &str)]) -> FormInput {
        pairs.iter().copied().collect()
    }
}
