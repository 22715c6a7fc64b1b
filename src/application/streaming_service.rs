// Streaming dashboard service - Progressive loading of the detail view
use crate::application::dashboard_service::{DashboardService, RECENT_REVIEW_LIMIT};
use crate::domain::analytics::ReviewStats;
use crate::domain::dashboard::Dashboard;
use crate::domain::review::Review;
use std::time::Instant;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum StreamEvent {
    /// Dashboard metadata, sent before any review is loaded
    Skeleton(Dashboard),
    Reviews { total: usize, recent: Vec<Review> },
    Analytics(ReviewStats),
    Complete { duration_ms: i64 },
}

#[derive(Clone)]
pub struct StreamingDashboardService {
    dashboard_service: DashboardService,
}

impl StreamingDashboardService {
    pub fn new(dashboard_service: DashboardService) -> Self {
        Self { dashboard_service }
    }

    /// `None` when the dashboard does not exist; otherwise a receiver that
    /// yields the skeleton immediately and the loaded sections afterwards.
    pub async fn stream_dashboard(&self, id: &str) -> Option<mpsc::Receiver<StreamEvent>> {
        let start_time = Instant::now();
        let dashboard = self.dashboard_service.find_dashboard(id).await?;
        let (tx, rx) = mpsc::channel(8);

        // Capacity is larger than the number of messages, so this cannot block.
        let _ = tx.send(StreamEvent::Skeleton(dashboard.clone())).await;

        let service = self.dashboard_service.clone();
        tokio::spawn(async move {
            let reviews = service.load_reviews(&dashboard).await;
            let stats = ReviewStats::compute(&reviews, &dashboard.package_names);

            let recent = reviews.iter().take(RECENT_REVIEW_LIMIT).cloned().collect();
            let messages = [
                StreamEvent::Reviews {
                    total: reviews.len(),
                    recent,
                },
                StreamEvent::Analytics(stats),
                StreamEvent::Complete {
                    duration_ms: start_time.elapsed().as_millis() as i64,
                },
            ];

            for msg in messages {
                if tx.send(msg).await.is_err() {
                    tracing::debug!("Client for dashboard {} went away, stopping stream", dashboard.id);
                    return;
                }
            }
        });

        Some(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::review_source::MockReviewSource;
    use crate::infrastructure::in_memory_repository::InMemoryDashboardRepository;
    use crate::infrastructure::mock_review_generator::MockReviewGenerator;
    use std::sync::Arc;
    use std::time::Duration;

    fn service() -> StreamingDashboardService {
        let dashboards = DashboardService::new(
            Arc::new(InMemoryDashboardRepository::seeded()),
            Arc::new(MockReviewGenerator::with_seed(7, Duration::ZERO)),
        );
        StreamingDashboardService::new(dashboards)
    }

    #[tokio::test]
    async fn test_unknown_dashboard_has_no_stream() {
        assert!(service().stream_dashboard("nope").await.is_none());
    }

    #[tokio::test]
    async fn test_stream_order() {
        let mut rx = service().stream_dashboard("2").await.unwrap();

        match rx.recv().await {
            Some(StreamEvent::Skeleton(d)) => assert_eq!(d.name, "E-commerce App Monitor"),
            other => panic!("expected skeleton, got {:?}", other),
        }

        let total = match rx.recv().await {
            Some(StreamEvent::Reviews { total, recent }) => {
                assert!((10..=15).contains(&total));
                assert_eq!(recent.len(), total.min(RECENT_REVIEW_LIMIT));
                total
            }
            other => panic!("expected reviews, got {:?}", other),
        };

        match rx.recv().await {
            Some(StreamEvent::Analytics(stats)) => assert_eq!(stats.total_reviews, total),
            other => panic!("expected analytics, got {:?}", other),
        }

        assert!(matches!(rx.recv().await, Some(StreamEvent::Complete { .. })));
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stream_task_stops_when_receiver_dropped() {
        let mut source = MockReviewSource::new();
        source.expect_fetch_reviews().times(1).returning(|_| Ok(Vec::new()));
        let source = Arc::new(source);

        let streaming = StreamingDashboardService::new(DashboardService::new(
            Arc::new(InMemoryDashboardRepository::seeded()),
            source.clone(),
        ));
        let mut rx = streaming.stream_dashboard("1").await.unwrap();
        drop(streaming);

        assert!(matches!(rx.recv().await, Some(StreamEvent::Skeleton(_))));
        drop(rx);

        // The spawned task holds the only other handle to the source
        for _ in 0..10 {
            if Arc::strong_count(&source) == 1 {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert_eq!(Arc::strong_count(&source), 1);
    }
}
