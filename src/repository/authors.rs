//! Author queries

use super::records::Records;
use crate::{error::AppResult, models::Author};

pub type AuthorsRepository = Records<Author>;

impl Records<Author> {
    /// All authors sorted by family name
    pub async fn list(&self) -> AppResult<Vec<Author>> {
        let mut authors = self.find_all().await?;
        authors.sort_by(|a, b| a.family_name.cmp(&b.family_name));
        Ok(authors)
    }
}
