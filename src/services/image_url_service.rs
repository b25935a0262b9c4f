use std::time::Duration;

use aws_sdk_s3 as s3;
use aws_sdk_s3::presigning::PresigningConfig;

use crate::error::{AppError, Result};

pub async fn put_object_url(
    client: &s3::Client,
    bucket: &str,
    object: &str,
    content_type: &str,
    expires_in: u64,
) -> Result<String> {
    let presigning = PresigningConfig::expires_in(Duration::from_secs(expires_in))
        .map_err(|e| AppError::InternalError(format!("Invalid presigning window: {}", e)))?;

    let presigned_request = client
        .put_object()
        .bucket(bucket)
        .key(object)
        .content_type(content_type)
        .presigned(presigning)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to presign upload URL: {}", e)))?;

    Ok(presigned_request.uri().into())
}

pub async fn delete_objects_by_prefix(
    client: &s3::Client,
    bucket: &str,
    prefix: &str,
) -> Result<usize> {
    let mut keys = Vec::new();
    let mut continuation_token: Option<String> = None;

    loop {
        let mut list_request = client.list_objects_v2().bucket(bucket).prefix(prefix);

        if let Some(token) = continuation_token {
            list_request = list_request.continuation_token(token);
        }

        let response = list_request
            .send()
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to list objects: {}", e)))?;

        if let Some(contents) = response.contents {
            keys.extend(contents.into_iter().filter_map(|object| object.key));
        }

        if !response.is_truncated.unwrap_or(false) {
            break;
        }

        continuation_token = response.next_continuation_token;
    }

    let deleted = keys.len();

    for key in keys {
        client
            .delete_object()
            .bucket(bucket)
            .key(&key)
            .send()
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to delete object {}: {}", key, e)))?;
    }

    Ok(deleted)
}
