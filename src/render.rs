use crate::config::Endpoint;
use crate::error::{ClientError, InputProblem};
use crate::types::{format_duration, DownloadResult};
use crate::utils::url::file_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
}

impl NoticeKind {
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
            NoticeKind::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    pub href: String,
    pub filename: String,
}

/// What the message region shows. `text` may contain `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub link: Option<DownloadLink>,
}

impl Notice {
    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into(), link: None }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

pub fn render_outcome(result: &DownloadResult, endpoint: &Endpoint) -> Notice {
    let Some(filename) = result.filename.as_deref().filter(|f| !f.is_empty()) else {
        let text = match result.message.as_deref() {
            Some(m) if !m.is_empty() => format!("✅ {m}"),
            _ => "✅ Video downloaded successfully!".to_string(),
        };
        return Notice { kind: NoticeKind::Success, text, link: None };
    };

    let title = result.title.as_deref().filter(|t| !t.is_empty()).unwrap_or("Video");
    let mut text = format!("✅ {title} is ready!");
    if let Some(d) = result.duration.and_then(format_duration) {
        text.push_str(&format!("\nDuration: {d}"));
    }
    Notice {
        kind: NoticeKind::Success,
        text,
        link: Some(DownloadLink {
            href: file_url(&endpoint.base, filename),
            filename: filename.to_string(),
        }),
    }
}

pub fn error_notice(err: &ClientError, endpoint: &Endpoint) -> Notice {
    let text = match err {
        ClientError::InvalidInput(InputProblem::Empty) => "❌ Please enter a valid video URL".to_string(),
        ClientError::InvalidInput(InputProblem::Malformed) => {
            "❌ Please enter a valid URL (e.g., https://youtube.com/watch?v=...)".to_string()
        }
        ClientError::Timeout { after_ms } => format!(
            "⏱️ Request timed out after {}. The video may be too long or the server is busy. Please try again.",
            timeout_label(*after_ms)
        ),
        ClientError::NetworkUnreachable(_) if endpoint.local => [
            "❌ Connection error. Backend server is not running. Please follow these steps:",
            "",
            "1. Open terminal/command prompt",
            "2. Navigate to project folder",
            "3. Run: pip install -r requirements.txt",
            "4. Run: python api.py",
            "5. Refresh this page",
        ]
        .join("\n"),
        ClientError::NetworkUnreachable(_) => {
            "❌ Connection error. The download server could not be reached. Please try again later.".to_string()
        }
        ClientError::BackendError { message, .. } => format!("❌ {message}"),
    };
    Notice::error(text)
}

fn timeout_label(after_ms: u32) -> String {
    if after_ms < 1000 {
        return format!("{after_ms} ms");
    }
    let secs = after_ms.div_ceil(1000);
    if secs == 1 { "1 second".to_string() } else { format!("{secs} seconds") }
}

/// Non-blocking hint shown when the liveness probe fails.
pub fn probe_advisory() -> Notice {
    Notice {
        kind: NoticeKind::Warning,
        text: "⚠️ Backend server not running. Please start the server with: python api.py".to_string(),
        link: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local() -> Endpoint {
        Endpoint { base: "http://localhost:5000".into(), local: true }
    }

    #[test]
    fn success_with_filename_links_to_get_file() {
        let result = DownloadResult {
            filename: Some("v.mp4".into()),
            title: Some("Demo".into()),
            ..Default::default()
        };
        let n = render_outcome(&result, &local());
        assert_eq!(n.kind, NoticeKind::Success);
        assert!(n.text.contains("Demo"));
        let link = n.link.unwrap();
        assert_eq!(link.href, "http://localhost:5000/get_file/v.mp4");
        assert_eq!(link.filename, "v.mp4");
    }

    #[test]
    fn success_shows_formatted_duration() {
        let result = DownloadResult {
            filename: Some("v.mp4".into()),
            duration: Some(125.0),
            ..Default::default()
        };
        let n = render_outcome(&result, &local());
        assert_eq!(n.lines().collect::<Vec<_>>(), vec!["✅ Video is ready!", "Duration: 2:05"]);
    }

    #[test]
    fn success_without_filename_has_no_link() {
        let n = render_outcome(&DownloadResult::default(), &local());
        assert_eq!(n.kind, NoticeKind::Success);
        assert!(n.link.is_none());
        assert_eq!(n.text, "✅ Video downloaded successfully!");
    }

    #[test]
    fn backend_error_text_is_shown_verbatim() {
        let err = ClientError::BackendError { status: Some(400), message: "bad url".into() };
        let n = error_notice(&err, &local());
        assert_eq!(n.kind, NoticeKind::Error);
        assert!(n.text.contains("bad url"));
    }

    #[test]
    fn timeout_message_differs_from_connection_error() {
        let timeout = error_notice(&ClientError::Timeout { after_ms: 60_000 }, &local());
        let offline = error_notice(&ClientError::NetworkUnreachable("TypeError".into()), &local());
        assert!(timeout.text.contains("timed out after 60 seconds"));
        assert!(!offline.text.contains("timed out"));
        assert!(offline.text.contains("python api.py"));
        assert!(offline.lines().count() > 1);
    }

    #[test]
    fn short_timeouts_are_not_reported_as_zero_seconds() {
        let n = error_notice(&ClientError::Timeout { after_ms: 800 }, &local());
        assert!(n.text.contains("timed out after 800 ms"), "{}", n.text);
        let n = error_notice(&ClientError::Timeout { after_ms: 1500 }, &local());
        assert!(n.text.contains("timed out after 2 seconds"), "{}", n.text);
    }

    #[test]
    fn remote_connection_error_skips_local_setup_steps() {
        let remote = Endpoint { base: "https://api.example.com".into(), local: false };
        let n = error_notice(&ClientError::NetworkUnreachable("TypeError".into()), &remote);
        assert!(!n.text.contains("python api.py"));
    }

    #[test]
    fn invalid_input_mentions_valid_url() {
        let n = error_notice(&ClientError::InvalidInput(InputProblem::Malformed), &local());
        assert!(n.text.contains("valid URL"));
    }
}
