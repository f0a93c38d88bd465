use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Quality {
    #[default]
    #[serde(rename = "best")]
    Best,
    #[serde(rename = "1080")]
    P1080,
    #[serde(rename = "720")]
    P720,
    #[serde(rename = "480")]
    P480,
    #[serde(rename = "360")]
    P360,
}

impl Quality {
    /// Menu order of the quality `<select>`.
    pub const ALL: [Quality; 5] = [
        Quality::Best,
        Quality::P1080,
        Quality::P720,
        Quality::P480,
        Quality::P360,
    ];

    /// Wire value understood by the backend (`height<=N` or `best`).
    pub fn value(&self) -> &'static str {
        match self {
            Quality::Best => "best",
            Quality::P1080 => "1080",
            Quality::P720 => "720",
            Quality::P480 => "480",
            Quality::P360 => "360",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quality::Best => "Best Quality",
            Quality::P1080 => "1080p",
            Quality::P720 => "720p",
            Quality::P480 => "480p",
            Quality::P360 => "360p",
        }
    }

    /// Accepts both `720` and `720p`; anything unknown falls back to `Best`.
    pub fn from_value(value: &str) -> Quality {
        let v = value.trim().trim_end_matches('p');
        Quality::ALL
            .into_iter()
            .find(|q| q.value().eq_ignore_ascii_case(v))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadRequest {
    pub url: String,
    pub quality: Quality,
}

/// Body of `POST /download`, success or failure. Every field is optional.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DownloadResult {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Seconds.
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Optional JSON answered by `GET /`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct BackendInfo {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

pub fn format_duration(seconds: f64) -> Option<String> {
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    let total = seconds.round() as u64;
    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
    if h > 0 {
        Some(format!("{}:{:02}:{:02}", h, m, s))
    } else {
        Some(format!("{}:{:02}", m, s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_backend_shape() {
        let req = DownloadRequest {
            url: "https://example.com/v".into(),
            quality: Quality::P720,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "url": "https://example.com/v", "quality": "720" })
        );
    }

    #[test]
    fn quality_parses_select_values() {
        assert_eq!(Quality::from_value("720"), Quality::P720);
        assert_eq!(Quality::from_value("720p"), Quality::P720);
        assert_eq!(Quality::from_value("BEST"), Quality::Best);
        assert_eq!(Quality::from_value("4k"), Quality::Best);
    }

    #[test]
    fn result_ignores_unknown_fields() {
        let r: DownloadResult = serde_json::from_str(
            r#"{"filename":"v.mp4","title":"Demo","duration":75,"extra":true}"#,
        )
        .unwrap();
        assert_eq!(r.filename.as_deref(), Some("v.mp4"));
        assert_eq!(r.title.as_deref(), Some("Demo"));
        assert_eq!(r.duration, Some(75.0));
        assert!(r.error.is_none());
    }

    #[test]
    fn durations_format_as_clock_time() {
        assert_eq!(format_duration(0.0).as_deref(), Some("0:00"));
        assert_eq!(format_duration(75.4).as_deref(), Some("1:15"));
        assert_eq!(format_duration(3725.0).as_deref(), Some("1:02:05"));
        assert_eq!(format_duration(-1.0), None);
        assert_eq!(format_duration(f64::NAN), None);
    }
}
