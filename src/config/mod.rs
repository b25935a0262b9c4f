mod app_config;
mod s3_config;

pub use app_config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, S3Config, ServerConfig, UpstreamConfig,
};
pub use s3_config::*;
