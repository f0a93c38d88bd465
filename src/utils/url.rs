use ::url::Url;

use crate::error::{ClientError, InputProblem};
use crate::types::{DownloadRequest, Quality};

/// Absolute `http`/`https` URL with a host.
pub fn is_valid_url(input: &str) -> bool {
    match Url::parse(input.trim()) {
        Ok(u) => matches!(u.scheme(), "http" | "https") && u.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}

/// Validates the form input. An `Err` here means no request is sent.
pub fn prepare_submission(raw_url: &str, quality: Quality) -> Result<DownloadRequest, ClientError> {
    let url = raw_url.trim();
    if url.is_empty() {
        return Err(ClientError::InvalidInput(InputProblem::Empty));
    }
    if !is_valid_url(url) {
        return Err(ClientError::InvalidInput(InputProblem::Malformed));
    }
    Ok(DownloadRequest { url: url.to_string(), quality })
}

/// Link served by `GET /get_file/<name>`.
pub fn file_url(endpoint: &str, filename: &str) -> String {
    format!(
        "{}/get_file/{}",
        endpoint.trim_end_matches('/'),
        urlencoding::encode(filename)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(is_valid_url("https://example.com/v"));
        assert!(is_valid_url("http://youtube.com/watch?v=abc"));
        assert!(is_valid_url("  https://youtu.be/xyz  "));
        assert!(is_valid_url("http://127.0.0.1:8080/a"));
    }

    #[test]
    fn rejects_other_schemes_and_garbage() {
        for bad in [
            "",
            "not a url",
            "example.com/v",
            "ftp://example.com/file",
            "javascript:alert(1)",
            "file:///etc/passwd",
            "mailto:someone@example.com",
            "https://",
        ] {
            assert!(!is_valid_url(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn empty_input_is_rejected_before_any_request() {
        assert_eq!(
            prepare_submission("   ", Quality::Best),
            Err(ClientError::InvalidInput(InputProblem::Empty))
        );
        assert_eq!(
            prepare_submission("not a url", Quality::Best),
            Err(ClientError::InvalidInput(InputProblem::Malformed))
        );
    }

    #[test]
    fn submission_is_trimmed() {
        let req = prepare_submission(" https://example.com/v ", Quality::P720).unwrap();
        assert_eq!(req.url, "https://example.com/v");
        assert_eq!(req.quality, Quality::P720);
    }

    #[test]
    fn file_links_are_percent_encoded() {
        assert_eq!(
            file_url("http://localhost:5000", "v.mp4"),
            "http://localhost:5000/get_file/v.mp4"
        );
        assert_eq!(
            file_url("http://localhost:5000/", "My Clip #1.mp4"),
            "http://localhost:5000/get_file/My%20Clip%20%231.mp4"
        );
    }
}
