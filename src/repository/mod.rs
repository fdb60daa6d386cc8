//! Repository layer for document store operations

pub mod authors;
pub mod books;
pub mod genres;
pub mod instances;
pub mod records;

use std::sync::Arc;

use crate::store::DocumentStore;

pub use records::Records;

/// Main repository struct holding one typed handle per collection
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
    pub authors: authors::AuthorsRepository,
    pub genres: genres::GenresRepository,
    pub instances: instances::InstancesRepository,
}

impl Repository {
    /// Create a new repository over the given store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            books: Records::new(store.clone()),
            authors: Records::new(store.clone()),
            genres: Records::new(store.clone()),
            instances: Records::new(store),
        }
    }
}
