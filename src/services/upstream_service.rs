use crate::error::{AppError, Result};

/// Read-only resources exposed by the third-party commerce API.
#[derive(Debug, Clone, Copy)]
pub enum UpstreamResource {
    Products,
    Categories,
    Discounts,
    Billboards,
}

impl UpstreamResource {
    fn path(self) -> &'static str {
        match self {
            UpstreamResource::Products => "products",
            UpstreamResource::Categories => "categories",
            UpstreamResource::Discounts => "discounts",
            UpstreamResource::Billboards => "billboards",
        }
    }
}

/// Thin passthrough client for the upstream catalog API. Responses are
/// forwarded verbatim as JSON; nothing here interprets the payload.
#[derive(Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn fetch(&self, resource: UpstreamResource) -> Result<serde_json::Value> {
        let url = format!("{}/{}", self.base_url, resource.path());

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::InternalError(format!("Upstream API request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Upstream API returned {} for {}", status, url);
            return Err(AppError::InternalError(format!(
                "Upstream API returned {}",
                status
            )));
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            AppError::InternalError(format!("Failed to parse upstream response: {}", e))
        })?;

        Ok(body)
    }
}
