use crate::config::StorageConfig;
use crate::error::Result;
use crate::services::transport::{HttpTransport, TransportRequest, TransportResponse};
use crate::utils::validation::encode_object_path;
use std::sync::Arc;

/// Path prefix of the object endpoints on the storage REST API
pub const OBJECT_ENDPOINT: &str = "storage/v1/object";

/// Header asking the service to overwrite instead of rejecting with 409
pub const UPSERT_HEADER: &str = "x-upsert";

/// Client for the object-storage REST API
pub struct StorageClient {
    config: StorageConfig,
    transport: Arc<dyn HttpTransport>,
}

impl StorageClient {
    pub fn new(config: StorageConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// `{base}/storage/v1/object/{bucket}/{key}`
    pub fn object_url(&self, bucket: &str, key: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.config.base_url,
            OBJECT_ENDPOINT,
            encode_object_path(bucket),
            encode_object_path(key)
        )
    }

    /// `{base}/storage/v1/object/public/{bucket}/{key}`
    pub fn public_url(&self, bucket: &str, key: &str) -> String {
        format!(
            "{}/{}/public/{}/{}",
            self.config.base_url,
            OBJECT_ENDPOINT,
            encode_object_path(bucket),
            encode_object_path(key)
        )
    }

    /// Upload `data` as a single POST. Non-success statuses are returned,
    /// not turned into errors.
    pub async fn upload_object(
        &self,
        bucket: &str,
        key: &str,
        data: Vec<u8>,
        content_type: &mime::Mime,
        upsert: bool,
    ) -> Result<TransportResponse> {
        let url = self.object_url(bucket, key);
        let headers = vec![
            (
                "Authorization".to_string(),
                format!("Bearer {}", self.config.token),
            ),
            ("Content-Type".to_string(), content_type.to_string()),
            (UPSERT_HEADER.to_string(), upsert.to_string()),
        ];

        tracing::debug!("POST {} ({} bytes, upsert={})", url, data.len(), upsert);

        self.transport
            .post(TransportRequest {
                url,
                headers,
                body: data,
            })
            .await
    }
}

/// The storage API answers 200 on overwrite and 201 on create
pub fn is_upload_success(status: u16) -> bool {
    status == 200 || status == 201
}
