//! Catalog overview service

use mongodb::bson::doc;

use crate::{error::AppResult, models::InstanceStatus, repository::Repository};

/// Record counts shown on the catalog home page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogCounts {
    pub books: u64,
    pub instances: u64,
    pub instances_available: u64,
    pub authors: u64,
    pub genres: u64,
}

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn counts(&self) -> AppResult<CatalogCounts> {
        let (books, instances, instances_available, authors, genres) = tokio::try_join!(
            self.repository.books.count_by(doc! {}),
            self.repository.instances.count_by(doc! {}),
            self.repository
                .instances
                .count_with_status(InstanceStatus::Available),
            self.repository.authors.count_by(doc! {}),
            self.repository.genres.count_by(doc! {}),
        )?;

        Ok(CatalogCounts {
            books,
            instances,
            instances_available,
            authors,
            genres,
        })
    }
}
