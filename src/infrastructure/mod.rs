// Infrastructure layer - Adapters behind the application ports
pub mod config;
pub mod http_response;
pub mod in_memory_repository;
pub mod mock_review_generator;
pub mod ndjson_stream;
pub mod seed;
