// Dashboard service - Use cases for the list and detail views
use crate::application::dashboard_repository::DashboardRepository;
use crate::application::review_source::ReviewSource;
use crate::domain::analytics::ReviewStats;
use crate::domain::dashboard::Dashboard;
use crate::domain::review::Review;
use std::sync::Arc;

/// Number of reviews shown in the reviews section of the detail view.
pub const RECENT_REVIEW_LIMIT: usize = 20;

#[derive(Debug, Clone)]
pub struct DashboardDetail {
    pub dashboard: Dashboard,
    pub reviews: Vec<Review>,
    pub stats: ReviewStats,
}

impl DashboardDetail {
    pub fn new(dashboard: Dashboard, reviews: Vec<Review>) -> Self {
        let stats = ReviewStats::compute(&reviews, &dashboard.package_names);
        Self {
            dashboard,
            reviews,
            stats,
        }
    }

    pub fn recent_reviews(&self) -> &[Review] {
        let end = self.reviews.len().min(RECENT_REVIEW_LIMIT);
        &self.reviews[..end]
    }
}

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn DashboardRepository>,
    review_source: Arc<dyn ReviewSource>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn DashboardRepository>, review_source: Arc<dyn ReviewSource>) -> Self {
        Self {
            repository,
            review_source,
        }
    }

    pub async fn list_dashboards(&self) -> Vec<Dashboard> {
        self.repository.list().await
    }

    pub async fn find_dashboard(&self, id: &str) -> Option<Dashboard> {
        self.repository.get(id).await
    }

    /// Resolve a dashboard and load its reviews; `None` when the id is unknown.
    pub async fn get_dashboard_detail(&self, id: &str) -> Option<DashboardDetail> {
        let dashboard = self.repository.get(id).await?;
        let reviews = self.load_reviews(&dashboard).await;

        tracing::info!(
            "Loaded {} reviews for dashboard {} ({} packages)",
            reviews.len(),
            dashboard.id,
            dashboard.package_names.len()
        );

        Some(DashboardDetail::new(dashboard, reviews))
    }

    /// Fetch reviews, degrading to an empty batch if the source fails.
    pub async fn load_reviews(&self, dashboard: &Dashboard) -> Vec<Review> {
        match self.review_source.fetch_reviews(&dashboard.package_names).await {
            Ok(reviews) => reviews,
            Err(e) => {
                tracing::error!("Error fetching reviews for dashboard {}: {}", dashboard.id, e);
                Vec::new()
            }
        }
    }
}
