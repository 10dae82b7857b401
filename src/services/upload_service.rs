use crate::config::UploadTarget;
use crate::error::{Result, UploadError};
use crate::services::storage::{StorageClient, is_upload_success};
use crate::utils::validation::{validate_bucket, validate_object_key};
use std::io::Write;
use tracing::{info, warn};

/// Result of one upload attempt that reached the server
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// Server answered 200 or 201
    Succeeded {
        public_url: String,
        content_type: mime::Mime,
    },
    /// Server answered anything else; body is kept verbatim
    Failed { status: u16, body: String },
}

impl UploadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Succeeded { .. })
    }

    /// Process exit code. Failures only count in strict mode.
    pub fn exit_code(&self, strict: bool) -> i32 {
        match self {
            UploadOutcome::Succeeded { .. } => 0,
            UploadOutcome::Failed { .. } if strict => 1,
            UploadOutcome::Failed { .. } => 0,
        }
    }

    /// Human-readable outcome for the operator
    pub fn write_report<W: Write>(&self, out: &mut W) -> Result<()> {
        match self {
            UploadOutcome::Succeeded {
                public_url,
                content_type,
            } => {
                writeln!(out, "✅ Upload complete!").map_err(UploadError::Report)?;
                writeln!(out, "🔗 Public URL: {}", public_url).map_err(UploadError::Report)?;
                writeln!(out).map_err(UploadError::Report)?;
                writeln!(out, "📋 Add this tag to index.html:").map_err(UploadError::Report)?;
                writeln!(out, "{}", link_tag(content_type, public_url))
                    .map_err(UploadError::Report)?;
            }
            UploadOutcome::Failed { status, body } => {
                writeln!(out, "❌ Error: {}", status).map_err(UploadError::Report)?;
                writeln!(out, "{}", body).map_err(UploadError::Report)?;
            }
        }
        Ok(())
    }
}

/// `<link>` element pointing a page's icon at the uploaded object
pub fn link_tag(content_type: &mime::Mime, public_url: &str) -> String {
    format!(
        r#"<link rel="icon" type="{}" href="{}" />"#,
        content_type, public_url
    )
}

/// Progress line printed before the request goes out
pub fn write_progress<W: Write>(target: &UploadTarget, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "📤 Uploading {} to {}/{}...",
        target.file.display(),
        target.bucket,
        target.object_key
    )
    .map_err(UploadError::Report)
}

pub struct Uploader {
    client: StorageClient,
}

impl Uploader {
    pub fn new(client: StorageClient) -> Self {
        Self { client }
    }

    /// Upload the site favicon to its default location
    pub async fn upload_favicon(&self) -> Result<UploadOutcome> {
        self.upload(&UploadTarget::default()).await
    }

    /// Read `target.file` and send it in one request.
    ///
    /// Validation and read errors are returned before anything touches the
    /// network. A response with a non-success status is an `Ok(Failed)`.
    pub async fn upload(&self, target: &UploadTarget) -> Result<UploadOutcome> {
        validate_bucket(&target.bucket)?;
        validate_object_key(&target.object_key)?;

        let data = tokio::fs::read(&target.file)
            .await
            .map_err(|source| UploadError::ReadFile {
                path: target.file.clone(),
                source,
            })?;

        info!(
            "Read {} bytes from {}",
            data.len(),
            target.file.display()
        );

        let response = self
            .client
            .upload_object(
                &target.bucket,
                &target.object_key,
                data,
                &target.content_type,
                target.upsert,
            )
            .await?;

        if is_upload_success(response.status) {
            let public_url = self.client.public_url(&target.bucket, &target.object_key);
            info!("Stored {}/{} ({})", target.bucket, target.object_key, response.status);
            Ok(UploadOutcome::Succeeded {
                public_url,
                content_type: target.content_type.clone(),
            })
        } else {
            warn!(
                "Storage rejected {}/{} with status {}",
                target.bucket, target.object_key, response.status
            );
            Ok(UploadOutcome::Failed {
                status: response.status,
                body: response.body,
            })
        }
    }
}
