// Domain layer - Core business models
pub mod analytics;
pub mod dashboard;
pub mod form;
pub mod review;
