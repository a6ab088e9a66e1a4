//! Photo Encoding
//!
//! File-to-transport path for photo attachments: read the picked file into
//! the data-URL form a webview reader hands back, then strip the prefix
//! down to the raw base64 payload the gateway expects.

use std::path::Path;

use base64::Engine as _;

/// Read a picked file into a `data:<mime>;base64,...` string
///
/// The read is asynchronous and cannot be aborted once started.
pub async fn read_as_data_url(path: &Path) -> Result<String, String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let mime_type = mime_guess::from_path(path).first_or_octet_stream();
    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
    Ok(format!("data:{};base64,{}", mime_type.as_ref(), encoded))
}

/// Strip a data-URL prefix like `data:image/png;base64,` if present
pub fn strip_data_uri(data: &str) -> &str {
    if data.contains(',') {
        data.split(',').nth(1).unwrap_or(data)
    } else {
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use std::io::Write;

    #[test]
    fn test_strip_data_uri_removes_prefix() {
        assert_eq!(strip_data_uri("data:image/png;base64,aGVsbG8="), "aGVsbG8=");
        assert_eq!(strip_data_uri("aGVsbG8="), "aGVsbG8=");
        assert_eq!(strip_data_uri("data:,"), "");
    }

    #[tokio::test]
    async fn test_read_as_data_url_encodes_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".png")
            .tempfile()
            .expect("Failed to create temp file");
        file.write_all(b"not really a png").expect("Failed to write");

        let data_url = read_as_data_url(file.path()).await.expect("Read failed");
        assert!(data_url.starts_with("data:image/png;base64,"));

        let payload = strip_data_uri(&data_url);
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .expect("Failed to decode");
        assert_eq!(decoded, b"not really a png");
    }

    #[tokio::test]
    async fn test_read_missing_file_errors() {
        let result = read_as_data_url(Path::new("/no/such/photo.jpg")).await;
        assert!(result.expect_err("should fail").contains("Failed to read"));
    }
}
