//! Genre queries

use super::records::Records;
use crate::{
    error::AppResult,
    forms::Escaped,
    models::Genre,
};

pub type GenresRepository = Records<Genre>;

impl Records<Genre> {
    /// All genres sorted by name
    pub async fn list(&self) -> AppResult<Vec<Genre>> {
        let mut genres = self.find_all().await?;
        genres.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(genres)
    }

    /// Find a genre whose name matches ignoring case
    pub async fn find_by_name(&self, name: &Escaped) -> AppResult<Option<Genre>> {
        Ok(self
            .find_all()
            .await?
            .into_iter()
            .find(|genre| genre.same_name(name)))
    }
}
