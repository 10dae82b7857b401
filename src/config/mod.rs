use crate::error::{Result, UploadError};
use std::env;
use std::path::PathBuf;

/// Default local file uploaded when nothing else is configured
pub const DEFAULT_FILE: &str = "public/favicon.svg";

/// Default bucket holding the site assets
pub const DEFAULT_BUCKET: &str = "store-assets";

/// Default object key inside the bucket
pub const DEFAULT_OBJECT_KEY: &str = "favicon.svg";

/// Credentials for the storage REST API
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Project base URL, without trailing slash (e.g. "https://xyz.supabase.co")
    pub base_url: String,

    /// Bearer token sent in the Authorization header
    pub token: String,
}

impl StorageConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        let token = token.into().trim().to_string();

        if base_url.is_empty() {
            return Err(UploadError::Config("storage base URL is empty".to_string()));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(UploadError::Config(format!(
                "storage base URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }
        if token.is_empty() {
            return Err(UploadError::Config("storage token is empty".to_string()));
        }

        Ok(Self { base_url, token })
    }

    /// Load credentials from environment variables
    ///
    /// `STORAGE_URL` and `STORAGE_TOKEN` take precedence over the
    /// `SUPABASE_URL` / `SUPABASE_KEY` pair.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = first_set(&lookup, &["STORAGE_URL", "SUPABASE_URL"]).ok_or_else(|| {
            UploadError::Config("STORAGE_URL (or SUPABASE_URL) must be set".to_string())
        })?;
        let token = first_set(&lookup, &["STORAGE_TOKEN", "SUPABASE_KEY"]).ok_or_else(|| {
            UploadError::Config("STORAGE_TOKEN (or SUPABASE_KEY) must be set".to_string())
        })?;

        Self::new(base_url, token)
    }
}

/// What to upload and where
#[derive(Debug, Clone)]
pub struct UploadTarget {
    pub file: PathBuf,
    pub bucket: String,
    pub object_key: String,
    pub content_type: mime::Mime,
    /// Overwrite an existing object instead of failing with a conflict
    pub upsert: bool,
}

impl Default for UploadTarget {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_FILE),
            bucket: DEFAULT_BUCKET.to_string(),
            object_key: DEFAULT_OBJECT_KEY.to_string(),
            content_type: mime::IMAGE_SVG,
            upsert: true,
        }
    }
}

impl UploadTarget {
    /// Load target overrides from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();

        Self {
            file: non_empty(lookup("UPLOAD_FILE"))
                .map(PathBuf::from)
                .unwrap_or(default.file),

            bucket: non_empty(lookup("UPLOAD_BUCKET")).unwrap_or(default.bucket),

            object_key: non_empty(lookup("UPLOAD_KEY")).unwrap_or(default.object_key),

            ..default
        }
    }
}

/// Whether a non-success response should make the process exit non-zero
pub fn strict_from_env() -> bool {
    strict_from_lookup(|name| env::var(name).ok())
}

pub fn strict_from_lookup<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup("UPLOAD_STRICT")
        .map(|v| matches!(v.trim().to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

fn first_set<F>(lookup: &F, names: &[&str]) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    names.iter().find_map(|&name| non_empty(lookup(name)))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
