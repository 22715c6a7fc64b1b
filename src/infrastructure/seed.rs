// Dashboards every repository starts out with
use crate::domain::dashboard::{Bucket, Dashboard};
use chrono::{DateTime, TimeZone, Utc};

fn seed_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("seed dates are valid calendar dates")
}

pub fn seed_dashboards() -> Vec<Dashboard> {
    vec![
        Dashboard {
            id: "1".to_string(),
            name: "Mobile Gaming Analytics".to_string(),
            description: "Analytics dashboard for mobile gaming apps".to_string(),
            package_names: vec![
                "com.supercell.clashofclans".to_string(),
                "com.king.candycrushsaga".to_string(),
            ],
            buckets: vec![
                Bucket::new("1", "User Experience", "Reviews about app usability and interface"),
                Bucket::new("2", "Performance", "Reviews about app speed and stability"),
            ],
            reviews: vec![],
            created_at: seed_date(2024, 1, 15),
            updated_at: seed_date(2024, 1, 20),
        },
        Dashboard {
            id: "2".to_string(),
            name: "E-commerce App Monitor".to_string(),
            description: "Monitoring dashboard for e-commerce applications".to_string(),
            package_names: vec!["com.amazon.mShop.android.shopping".to_string()],
            buckets: vec![
                Bucket::new("3", "Checkout Process", "Reviews about payment and checkout experience"),
                Bucket::new("4", "Product Search", "Reviews about search functionality"),
            ],
            reviews: vec![],
            created_at: seed_date(2024, 1, 10),
            updated_at: seed_date(2024, 1, 18),
        },
    ]
}
