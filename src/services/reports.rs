//! Reporting service

use crate::{error::AppResult, repository::Repository};

#[derive(Clone)]
pub struct ReportsService {
    repository: Repository,
}

impl ReportsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Most borrowed books of a year, one formatted line per rank
    pub async fn most_borrowed_by_year(&self, year: i32) -> AppResult<Vec<String>> {
        self.repository.reports.most_borrowed_by_year(year).await
    }
}
