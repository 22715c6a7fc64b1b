// View models serialized for the list, detail and stream endpoints
use crate::application::dashboard_service::DashboardDetail;
use crate::application::streaming_service::StreamEvent;
use crate::domain::analytics::{format_rating, PackagePerformance, RatingCount, ReviewStats};
use crate::domain::dashboard::{package_label, Bucket, Dashboard};
use crate::domain::review::Review;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyState {
    pub title: &'static str,
    pub message: &'static str,
    pub create_href: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardListView {
    pub dashboards: Vec<DashboardCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
    pub create_href: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub package_badges: Vec<String>,
    pub bucket_badges: Vec<String>,
    pub updated_on: String,
    pub view_href: String,
    pub edit_href: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardHeader {
    pub id: String,
    pub name: String,
    pub description: String,
    pub package_names: Vec<String>,
    pub edit_href: String,
    pub back_href: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_reviews: usize,
    pub average_rating: f64,
    pub average_rating_display: String,
    pub package_count: usize,
    pub bucket_count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    pub id: String,
    pub package_name: String,
    pub package_label: String,
    pub rating: u8,
    pub comment: String,
    pub date: DateTime<Utc>,
    pub user_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingRow {
    pub rating: u8,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageRow {
    pub package_name: String,
    pub label: String,
    pub review_count: usize,
    pub average_rating: f64,
    pub average_rating_display: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsView {
    pub rating_distribution: Vec<RatingRow>,
    pub package_performance: Vec<PackageRow>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub hint: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDetailView {
    pub dashboard: DashboardHeader,
    pub overview: Overview,
    pub recent_reviews: Vec<ReviewItem>,
    pub analytics: AnalyticsView,
    pub buckets: Vec<BucketCard>,
}

/// One line of the progressive detail stream.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum StreamMessage {
    Skeleton {
        dashboard: DashboardHeader,
        buckets: Vec<BucketCard>,
    },
    Reviews {
        total_reviews: usize,
        recent_reviews: Vec<ReviewItem>,
    },
    Analytics {
        average_rating: f64,
        average_rating_display: String,
        analytics: AnalyticsView,
    },
    Complete {
        duration_ms: i64,
    },
}

impl DashboardListView {
    pub fn from_dashboards(dashboards: &[Dashboard]) -> Self {
        let empty_state = dashboards.is_empty().then(|| EmptyState {
            title: "No dashboards yet",
            message: "Create your first dashboard to start monitoring app reviews",
            create_href: "/dashboards/new",
        });

        Self {
            dashboards: dashboards.iter().map(DashboardCard::from).collect(),
            empty_state,
            create_href: "/dashboards/new",
        }
    }
}

impl From<&Dashboard> for DashboardCard {
    fn from(dashboard: &Dashboard) -> Self {
        Self {
            id: dashboard.id.clone(),
            name: dashboard.name.clone(),
            description: dashboard.description.clone(),
            package_badges: dashboard
                .package_names
                .iter()
                .map(|p| package_label(p).to_string())
                .collect(),
            bucket_badges: dashboard.buckets.iter().map(|b| b.name.clone()).collect(),
            updated_on: dashboard.updated_at.format("%Y-%m-%d").to_string(),
            view_href: format!("/dashboards/{}", dashboard.id),
            edit_href: format!("/dashboards/{}/edit", dashboard.id),
        }
    }
}

impl From<&Dashboard> for DashboardHeader {
    fn from(dashboard: &Dashboard) -> Self {
        Self {
            id: dashboard.id.clone(),
            name: dashboard.name.clone(),
            description: dashboard.description.clone(),
            package_names: dashboard.package_names.clone(),
            edit_href: format!("/dashboards/{}/edit", dashboard.id),
            back_href: "/",
        }
    }
}

impl From<&Review> for ReviewItem {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id.clone(),
            package_name: review.package_name.clone(),
            package_label: package_label(&review.package_name).to_string(),
            rating: review.rating,
            comment: review.comment.clone(),
            date: review.date,
            user_name: review.user_name.clone(),
        }
    }
}

impl From<&Bucket> for BucketCard {
    fn from(bucket: &Bucket) -> Self {
        Self {
            id: bucket.id.clone(),
            name: bucket.name.clone(),
            description: bucket.description.clone(),
            hint: bucket.usage_hint(),
        }
    }
}

impl From<&PackagePerformance> for PackageRow {
    fn from(perf: &PackagePerformance) -> Self {
        Self {
            package_name: perf.package_name.clone(),
            label: package_label(&perf.package_name).to_string(),
            review_count: perf.review_count,
            average_rating: perf.average_rating,
            average_rating_display: format_rating(perf.average_rating),
        }
    }
}

fn rating_row(count: &RatingCount, total: usize) -> RatingRow {
    RatingRow {
        rating: count.rating,
        count: count.count,
        percentage: count.percentage(total),
    }
}

impl From<&ReviewStats> for AnalyticsView {
    fn from(stats: &ReviewStats) -> Self {
        Self {
            rating_distribution: stats
                .rating_distribution
                .iter()
                .map(|c| rating_row(c, stats.total_reviews))
                .collect(),
            package_performance: stats.package_performance.iter().map(PackageRow::from).collect(),
        }
    }
}

fn bucket_cards(dashboard: &Dashboard) -> Vec<BucketCard> {
    dashboard.buckets.iter().map(BucketCard::from).collect()
}

impl From<&DashboardDetail> for DashboardDetailView {
    fn from(detail: &DashboardDetail) -> Self {
        let dashboard = &detail.dashboard;
        Self {
            dashboard: DashboardHeader::from(dashboard),
            overview: Overview {
                total_reviews: detail.stats.total_reviews,
                average_rating: detail.stats.average_rating,
                average_rating_display: format_rating(detail.stats.average_rating),
                package_count: dashboard.package_names.len(),
                bucket_count: dashboard.buckets.len(),
            },
            recent_reviews: detail.recent_reviews().iter().map(ReviewItem::from).collect(),
            analytics: AnalyticsView::from(&detail.stats),
            buckets: bucket_cards(dashboard),
        }
    }
}

impl From<StreamEvent> for StreamMessage {
    fn from(event: StreamEvent) -> Self {
        match event {
            StreamEvent::Skeleton(dashboard) => StreamMessage::Skeleton {
                dashboard: DashboardHeader::from(&dashboard),
                buckets: bucket_cards(&dashboard),
            },
            StreamEvent::Reviews { total, recent } => StreamMessage::Reviews {
                total_reviews: total,
                recent_reviews: recent.iter().map(ReviewItem::from).collect(),
            },
            StreamEvent::Analytics(stats) => StreamMessage::Analytics {
                average_rating: stats.average_rating,
                average_rating_display: format_rating(stats.average_rating),
                analytics: AnalyticsView::from(&stats),
            },
            StreamEvent::Complete { duration_ms } => StreamMessage::Complete { duration_ms },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::seed::seed_dashboards;

    #[test]
    fn test_card_badges() {
        let dashboards = seed_dashboards();
        let view = DashboardListView::from_dashboards(&dashboards);

        assert!(view.empty_state.is_none());
        let card = &view.dashboards[0];
        assert_eq!(card.package_badges, vec!["clashofclans", "candycrushsaga"]);
        assert_eq!(card.bucket_badges, vec!["User Experience", "Performance"]);
        assert_eq!(card.updated_on, "2024-01-20");
        assert_eq!(card.view_href, "/dashboards/1");
        assert_eq!(card.edit_href, "/dashboards/1/edit");
    }

    #[test]
    fn test_empty_list_has_empty_state() {
        let view = DashboardListView::from_dashboards(&[]);
        assert!(view.dashboards.is_empty());
        assert_eq!(view.empty_state.unwrap().title, "No dashboards yet");
    }

    #[test]
    fn test_detail_view_without_reviews() {
        let dashboard = seed_dashboards().remove(1);
        let view = DashboardDetailView::from(&DashboardDetail::new(dashboard, vec![]));

        assert_eq!(view.overview.total_reviews, 0);
        assert_eq!(view.overview.average_rating_display, "0.0");
        assert_eq!(view.overview.package_count, 1);
        assert_eq!(view.overview.bucket_count, 2);
        assert!(view.analytics.rating_distribution.iter().all(|r| r.percentage == 0.0));
        assert_eq!(view.analytics.package_performance[0].label, "shopping");
        assert_eq!(view.buckets[0].name, "Checkout Process");
    }

    #[test]
    fn test_stream_message_json_shape() {
        let msg = StreamMessage::from(StreamEvent::Complete { duration_ms: 12 });
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json, serde_json::json!({"type": "complete", "durationMs": 12}));
    }
}
