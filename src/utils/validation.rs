use crate::error::{Result, UploadError};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped inside a single URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Validates a bucket name: one non-empty segment, no separators
pub fn validate_bucket(bucket: &str) -> Result<()> {
    if bucket.trim().is_empty() {
        return Err(UploadError::InvalidPath(
            "bucket name cannot be empty".to_string(),
        ));
    }
    if bucket.contains('/') || bucket.contains('\\') {
        return Err(UploadError::InvalidPath(format!(
            "bucket name '{}' must not contain path separators",
            bucket
        )));
    }
    if bucket == "." || bucket == ".." {
        return Err(UploadError::InvalidPath(format!(
            "bucket name '{}' is not allowed",
            bucket
        )));
    }
    Ok(())
}

/// Validates an object key. Nested keys ("icons/favicon.svg") are allowed,
/// but leading slashes, empty segments and traversal segments are not.
pub fn validate_object_key(key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(UploadError::InvalidPath(
            "object key cannot be empty".to_string(),
        ));
    }
    if key.starts_with('/') {
        return Err(UploadError::InvalidPath(format!(
            "object key '{}' must not start with '/'",
            key
        )));
    }
    if key.contains('\\') {
        return Err(UploadError::InvalidPath(format!(
            "object key '{}' must use '/' as separator",
            key
        )));
    }
    for segment in key.split('/') {
        if segment.is_empty() || segment == "." || segment == ".." {
            tracing::warn!("Rejected object key with bad segment: {}", key);
            return Err(UploadError::InvalidPath(format!(
                "object key '{}' contains an empty or relative segment",
                key
            )));
        }
    }
    Ok(())
}

/// Percent-encodes every segment of `path` while keeping '/' separators
pub fn encode_object_path(path: &str) -> String {
    path.split('/')
        .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_bucket() {
        assert!(validate_bucket("store-assets").is_ok());
        assert!(validate_bucket("").is_err());
        assert!(validate_bucket("a/b").is_err());
        assert!(validate_bucket("..").is_err());
    }

    #[test]
    fn test_validate_object_key() {
        assert!(validate_object_key("favicon.svg").is_ok());
        assert!(validate_object_key("icons/favicon.svg").is_ok());

        assert!(validate_object_key("").is_err());
        assert!(validate_object_key("/favicon.svg").is_err());
        assert!(validate_object_key("icons//favicon.svg").is_err());
        assert!(validate_object_key("../favicon.svg").is_err());
        assert!(validate_object_key("icons\\favicon.svg").is_err());
    }

    #[test]
    fn test_encode_object_path() {
        assert_eq!(encode_object_path("favicon.svg"), "favicon.svg");
        assert_eq!(
            encode_object_path("brand icons/fav#1.svg"),
            "brand%20icons/fav%231.svg"
        );
    }
}
