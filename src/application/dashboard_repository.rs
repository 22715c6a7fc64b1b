// Repository trait for dashboard storage
use crate::domain::dashboard::{Dashboard, DashboardDraft};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("dashboard {0} not found")]
    NotFound(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardRepository: Send + Sync {
    /// All dashboards in insertion order
    async fn list(&self) -> Vec<Dashboard>;

    /// Look up a dashboard by id; absence is not an error
    async fn get(&self, id: &str) -> Option<Dashboard>;

    /// Store a new dashboard, assigning its id and bucket ids
    async fn create(&self, draft: DashboardDraft) -> Result<Dashboard, RepositoryError>;

    /// Replace the editable fields of an existing dashboard
    async fn update(&self, id: &str, draft: DashboardDraft) -> Result<Dashboard, RepositoryError>;

    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}
