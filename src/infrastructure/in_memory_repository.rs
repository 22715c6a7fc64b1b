// In-memory dashboard repository, the single source of truth for a process
use crate::application::dashboard_repository::{DashboardRepository, RepositoryError};
use crate::domain::dashboard::{Bucket, BucketDraft, Dashboard, DashboardDraft};
use crate::infrastructure::seed::seed_dashboards;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashSet;
use tokio::sync::RwLock;

#[derive(Debug)]
struct Store {
    dashboards: Vec<Dashboard>,
    next_dashboard_id: u64,
    next_bucket_id: u64,
}

impl Store {
    /// Ids are never reused, even after the newest dashboard is deleted.
    fn allocate_dashboard_id(&mut self) -> String {
        let id = self.next_dashboard_id;
        self.next_dashboard_id += 1;
        id.to_string()
    }

    fn allocate_bucket_id(&mut self) -> String {
        let id = self.next_bucket_id;
        self.next_bucket_id += 1;
        id.to_string()
    }

    /// Assign bucket ids. A draft id is kept only when it names one of
    /// `current` and has not already been taken earlier in the same draft;
    /// every other bucket gets a fresh id.
    fn build_buckets(&mut self, drafts: Vec<BucketDraft>, current: &[Bucket]) -> Vec<Bucket> {
        let mut taken = HashSet::new();

        drafts
            .into_iter()
            .map(|draft| {
                let id = match draft.id {
                    Some(id) if current.iter().any(|b| b.id == id) && taken.insert(id.clone()) => id,
                    _ => self.allocate_bucket_id(),
                };
                Bucket::new(id, draft.name, draft.description)
            })
            .collect()
    }
}

fn max_numeric_id<'a>(ids: impl Iterator<Item = &'a str>) -> u64 {
    ids.filter_map(|id| id.parse::<u64>().ok()).max().unwrap_or(0)
}

#[derive(Debug)]
pub struct InMemoryDashboardRepository {
    store: RwLock<Store>,
}

impl InMemoryDashboardRepository {
    pub fn new(dashboards: Vec<Dashboard>) -> Self {
        let next_dashboard_id = max_numeric_id(dashboards.iter().map(|d| d.id.as_str())) + 1;
        let next_bucket_id = max_numeric_id(
            dashboards
                .iter()
                .flat_map(|d| d.buckets.iter())
                .map(|b| b.id.as_str()),
        ) + 1;

        Self {
            store: RwLock::new(Store {
                dashboards,
                next_dashboard_id,
                next_bucket_id,
            }),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_dashboards())
    }
}

#[async_trait]
impl DashboardRepository for InMemoryDashboardRepository {
    async fn list(&self) -> Vec<Dashboard> {
        self.store.read().await.dashboards.clone()
    }

    async fn get(&self, id: &str) -> Option<Dashboard> {
        self.store
            .read()
            .await
            .dashboards
            .iter()
            .find(|d| d.id == id)
            .cloned()
    }

    async fn create(&self, draft: DashboardDraft) -> Result<Dashboard, RepositoryError> {
        let mut store = self.store.write().await;
        let now = Utc::now();

        let dashboard = Dashboard {
            id: store.allocate_dashboard_id(),
            name: draft.name,
            description: draft.description,
            package_names: draft.package_names,
            buckets: store.build_buckets(draft.buckets, &[]),
            reviews: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        store.dashboards.push(dashboard.clone());
        Ok(dashboard)
    }

    async fn update(&self, id: &str, draft: DashboardDraft) -> Result<Dashboard, RepositoryError> {
        let mut store = self.store.write().await;
        let index = store
            .dashboards
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;

        let current = std::mem::take(&mut store.dashboards[index].buckets);
        let buckets = store.build_buckets(draft.buckets, &current);
        let dashboard = &mut store.dashboards[index];
        dashboard.name = draft.name;
        dashboard.description = draft.description;
        dashboard.package_names = draft.package_names;
        dashboard.buckets = buckets;
        dashboard.updated_at = Utc::now();

        Ok(dashboard.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        let before = store.dashboards.len();
        store.dashboards.retain(|d| d.id != id);

        if store.dashboards.len() == before {
            return Err(RepositoryError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
