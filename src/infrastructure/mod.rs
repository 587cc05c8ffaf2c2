// Infrastructure layer - Configuration, variables and HTTP encoding
pub mod config;
pub mod http_response;
