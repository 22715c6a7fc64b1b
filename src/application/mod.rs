// Application layer - Use cases and ports
pub mod dashboard_repository;
pub mod dashboard_service;
pub mod edit_service;
pub mod review_source;
pub mod streaming_service;
