// Dashboard domain model
use super::review::Review;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub package_names: Vec<String>,
    pub buckets: Vec<Bucket>,
    /// Never populated in stored records; reviews are regenerated per load.
    #[serde(default)]
    pub reviews: Vec<Review>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl Bucket {
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn usage_hint(&self) -> String {
        format!(
            "This bucket can be used to categorize reviews related to {}. You can manually assign reviews to buckets or set up automated rules.",
            self.name.to_lowercase()
        )
    }
}

/// Validated input for creating or replacing a dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardDraft {
    pub name: String,
    pub description: String,
    pub package_names: Vec<String>,
    pub buckets: Vec<BucketDraft>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketDraft {
    /// Existing bucket id to keep, if the bucket was loaded from a dashboard.
    pub id: Option<String>,
    pub name: String,
    pub description: String,
}

/// Badge label for a package: the last segment of its reverse-DNS name.
pub fn package_label(package_name: &str) -> &str {
    package_name.rsplit('.').next().unwrap_or(package_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_label() {
        assert_eq!(package_label("com.supercell.clashofclans"), "clashofclans");
        assert_eq!(package_label("com.amazon.mShop.android.shopping"), "shopping");
        assert_eq!(package_label("standalone"), "standalone");
        assert_eq!(package_label("trailing."), "");
    }

    #[test]
    fn test_bucket_usage_hint_lowercases_name() {
        let bucket = Bucket::new("1", "User Experience", "");
        assert_eq!(
            bucket.usage_hint(),
            "This bucket can be used to categorize reviews related to user experience. You can manually assign reviews to buckets or set up automated rules."
        );
    }
}
