pub mod config;
pub mod error;
pub mod services;
pub mod utils;

use crate::config::StorageConfig;
use crate::error::Result;
use crate::services::storage::StorageClient;
use crate::services::transport::ReqwestTransport;
use crate::services::upload_service::{UploadOutcome, Uploader};
use std::sync::Arc;

/// Upload `public/favicon.svg` to `store-assets/favicon.svg` over HTTP
pub async fn upload_favicon(config: StorageConfig) -> Result<UploadOutcome> {
    let client = StorageClient::new(config, Arc::new(ReqwestTransport::new()));
    Uploader::new(client).upload_favicon().await
}
