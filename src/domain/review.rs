// Review domain model
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub package_name: String,
    pub rating: u8,
    pub comment: String,
    pub date: DateTime<Utc>,
    pub user_name: String,
}

impl Review {
    pub fn new(
        id: String,
        package_name: String,
        rating: u8,
        comment: String,
        date: DateTime<Utc>,
        user_name: String,
    ) -> Self {
        Self {
            id,
            package_name,
            rating,
            comment,
            date,
            user_name,
        }
    }
}
