// Port for loading reviews of monitored packages
use crate::domain::review::Review;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Fetch a fresh batch of reviews for the given packages
    async fn fetch_reviews(&self, package_names: &[String]) -> anyhow::Result<Vec<Review>>;
}
