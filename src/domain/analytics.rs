// Review analytics - aggregate statistics over a loaded review batch
use super::review::{Review, MAX_RATING, MIN_RATING};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingCount {
    pub rating: u8,
    pub count: usize,
}

impl RatingCount {
    /// Share of `total` as a percentage, 0 when there is nothing to share.
    pub fn percentage(&self, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            self.count as f64 / total as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PackagePerformance {
    pub package_name: String,
    pub review_count: usize,
    pub average_rating: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewStats {
    pub total_reviews: usize,
    pub average_rating: f64,
    /// Highest rating first.
    pub rating_distribution: Vec<RatingCount>,
    pub package_performance: Vec<PackagePerformance>,
}

impl ReviewStats {
    pub fn compute(reviews: &[Review], package_names: &[String]) -> Self {
        Self {
            total_reviews: reviews.len(),
            average_rating: average_rating(reviews),
            rating_distribution: rating_distribution(reviews),
            package_performance: package_performance(reviews, package_names),
        }
    }
}

/// Arithmetic mean of all ratings; 0 for an empty batch.
pub fn average_rating<'a, I>(reviews: I) -> f64
where
    I: IntoIterator<Item = &'a Review>,
{
    let (sum, count) = reviews
        .into_iter()
        .fold((0u64, 0usize), |(sum, count), r| (sum + r.rating as u64, count + 1));

    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// Count of reviews per exact rating, from 5 down to 1.
pub fn rating_distribution(reviews: &[Review]) -> Vec<RatingCount> {
    (MIN_RATING..=MAX_RATING)
        .rev()
        .map(|rating| RatingCount {
            rating,
            count: reviews.iter().filter(|r| r.rating == rating).count(),
        })
        .collect()
}

pub fn package_performance(reviews: &[Review], package_names: &[String]) -> Vec<PackagePerformance> {
    package_names
        .iter()
        .map(|package_name| {
            let matching: Vec<&Review> = reviews
                .iter()
                .filter(|r| &r.package_name == package_name)
                .collect();

            PackagePerformance {
                package_name: package_name.clone(),
                review_count: matching.len(),
                average_rating: average_rating(matching),
            }
        })
        .collect()
}

/// One-decimal rendering used wherever a rating is shown.
pub fn format_rating(value: f64) -> String {
    format!("{:.1}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn review(id: &str, package_name: &str, rating: u8) -> Review {
        Review::new(
            id.to_string(),
            package_name.to_string(),
            rating,
            "comment".to_string(),
            Utc::now(),
            "User1".to_string(),
        )
    }

    #[test]
    fn test_average_rating_empty_is_zero() {
        assert_eq!(average_rating(&Vec::<Review>::new()), 0.0);
    }

    #[test]
    fn test_average_rating_is_unrounded_mean() {
        let reviews = vec![review("0-0", "a", 5), review("0-1", "a", 4), review("0-2", "a", 4)];
        let avg = average_rating(&reviews);
        assert!((avg - 13.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(format_rating(avg), "4.3");
    }

    #[test]
    fn test_rating_distribution_descending_and_sums_to_total() {
        let reviews = vec![
            review("0-0", "a", 1),
            review("0-1", "a", 5),
            review("0-2", "a", 5),
            review("0-3", "a", 3),
        ];
        let dist = rating_distribution(&reviews);

        let ratings: Vec<u8> = dist.iter().map(|d| d.rating).collect();
        assert_eq!(ratings, vec![5, 4, 3, 2, 1]);
        assert_eq!(dist[0].count, 2);
        assert_eq!(dist[1].count, 0);
        assert_eq!(dist.iter().map(|d| d.count).sum::<usize>(), reviews.len());
        assert_eq!(dist[0].percentage(reviews.len()), 50.0);
    }

    #[test]
    fn test_percentage_of_empty_total() {
        let count = RatingCount { rating: 5, count: 0 };
        assert_eq!(count.percentage(0), 0.0);
    }

    #[test]
    fn test_package_performance_exact_match_only() {
        let packages = vec!["com.a.one".to_string(), "com.a.two".to_string()];
        let reviews = vec![
            review("0-0", "com.a.one", 2),
            review("0-1", "com.a.one", 4),
            review("1-0", "com.a.one.extra", 5),
        ];

        let perf = package_performance(&reviews, &packages);
        assert_eq!(perf.len(), 2);
        assert_eq!(perf[0].review_count, 2);
        assert_eq!(perf[0].average_rating, 3.0);
        assert_eq!(perf[1].review_count, 0);
        assert_eq!(perf[1].average_rating, 0.0);
    }

    #[test]
    fn test_compute_stats() {
        let packages = vec!["com.a.one".to_string()];
        let reviews = vec![review("0-0", "com.a.one", 5), review("0-1", "com.a.one", 2)];
        let stats = ReviewStats::compute(&reviews, &packages);

        assert_eq!(stats.total_reviews, 2);
        assert_eq!(stats.average_rating, 3.5);
        assert_eq!(stats.rating_distribution.len(), 5);
        assert_eq!(stats.package_performance[0].review_count, 2);
    }
}
