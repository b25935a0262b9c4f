use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    Router,
};
use aws_sdk_s3::Client as S3Client;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;

use crate::{
    catalog::CatalogCache,
    config::{self, AppConfig},
    database,
    error::Result,
    routes,
    services::upstream_service::UpstreamClient,
};

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub s3_client: S3Client,
    pub s3_bucket: String,
    pub assets_url: String,
    pub admin_password_hash: String,
    pub upstream: UpstreamClient,
    pub catalog: CatalogCache,
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let pool = database::create_pool(&config.database).await?;
    let s3_client = config::load_s3_client().await?;

    let state = AppState {
        db: pool,
        s3_client,
        s3_bucket: config.s3.bucket.clone(),
        assets_url: config.s3.assets_url.clone(),
        admin_password_hash: config.auth.admin_password_hash.clone(),
        upstream: UpstreamClient::new(&config.upstream.base_url),
        catalog: CatalogCache::new(),
    };

    let allowed_origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|_| {
                crate::error::AppError::ConfigError(format!("Invalid CORS origin: {}", origin))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
        .allow_origin(allowed_origins);

    let app = routes::create_router()
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors)
        .with_state(state);

    Ok(app)
}
