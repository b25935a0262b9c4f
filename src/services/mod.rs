pub mod image_url_service;
pub mod upstream_service;
