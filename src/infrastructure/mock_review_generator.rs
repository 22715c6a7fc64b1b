// Synthetic review source standing in for a Play Store scraper
use crate::application::review_source::ReviewSource;
use crate::domain::review::{Review, MAX_RATING, MIN_RATING};
use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use std::time::Duration;

/// Simulated latency of a review fetch.
pub const FETCH_DELAY: Duration = Duration::from_millis(2000);

const REVIEWS_PER_PACKAGE_MIN: usize = 10;
const REVIEWS_PER_PACKAGE_MAX: usize = 15;
/// Reviews fall within the past three weeks.
const MAX_DAYS_AGO: i64 = 20;
const MAX_USER_NUMBER: u32 = 999;

const COMMENTS: [&str; 8] = [
    "Great app, love the new features!",
    "App crashes frequently, needs fixing",
    "Excellent user interface and smooth performance",
    "Could use more customization options",
    "Fast and reliable, highly recommended",
    "Battery drain issue needs to be addressed",
    "Perfect for daily use, very intuitive",
    "Loading times are too slow",
];

pub struct MockReviewGenerator<R = StdRng> {
    rng: Mutex<R>,
    delay: Duration,
}

impl MockReviewGenerator<StdRng> {
    pub fn from_entropy(delay: Duration) -> Self {
        Self::new(StdRng::from_entropy(), delay)
    }

    pub fn with_seed(seed: u64, delay: Duration) -> Self {
        Self::new(StdRng::seed_from_u64(seed), delay)
    }
}

impl<R: Rng> MockReviewGenerator<R> {
    pub fn new(rng: R, delay: Duration) -> Self {
        Self {
            rng: Mutex::new(rng),
            delay,
        }
    }

    /// Build one batch: 10 to 15 reviews per package, in package order.
    pub fn generate(&self, package_names: &[String], now: DateTime<Utc>) -> Vec<Review> {
        // A poisoned lock only means another generation panicked mid-batch;
        // the RNG state itself is still usable.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let mut reviews = Vec::new();

        for (pkg_index, package_name) in package_names.iter().enumerate() {
            let count = rng.gen_range(REVIEWS_PER_PACKAGE_MIN..=REVIEWS_PER_PACKAGE_MAX);

            for i in 0..count {
                let days_ago = rng.gen_range(0..=MAX_DAYS_AGO);
                let rating = rng.gen_range(MIN_RATING..=MAX_RATING);
                let comment = COMMENTS[rng.gen_range(0..COMMENTS.len())];
                let user_number = rng.gen_range(0..=MAX_USER_NUMBER);

                reviews.push(Review::new(
                    format!("{}-{}", pkg_index, i),
                    package_name.clone(),
                    rating,
                    comment.to_string(),
                    now - ChronoDuration::days(days_ago),
                    format!("User{}", user_number),
                ));
            }
        }

        reviews
    }
}

#[async_trait]
impl<R: Rng + Send> ReviewSource for MockReviewGenerator<R> {
    async fn fetch_reviews(&self, package_names: &[String]) -> anyhow::Result<Vec<Review>> {
        tracing::debug!("Generating reviews for {} packages", package_names.len());
        tokio::time::sleep(self.delay).await;
        Ok(self.generate(package_names, Utc::now()))
    }
}
