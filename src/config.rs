use std::net::IpAddr;

use serde::Deserialize;

pub const DEFAULT_LOCAL_ENDPOINT: &str = "http://localhost:5000";

/// Global object a deployment may define before the wasm bundle loads.
pub const CONFIG_GLOBAL: &str = "__VIDEO_DOWNLOADER_CONFIG__";

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_local_endpoint")]
    pub local_endpoint: String,
    #[serde(default = "default_remote_endpoint")]
    pub remote_endpoint: String,
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_ms: u32,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u32,
    #[serde(default = "default_success_hide")]
    pub success_hide_ms: Option<u32>,
    #[serde(default = "default_error_hide")]
    pub error_hide_ms: Option<u32>,
    /// Show the "backend not running" advisory on non-loopback pages too.
    #[serde(default)]
    pub advise_on_remote: bool,
    #[serde(default)]
    pub debug_logs: bool,
}

fn default_local_endpoint() -> String { DEFAULT_LOCAL_ENDPOINT.to_string() }
fn default_remote_endpoint() -> String {
    option_env!("VIDEO_DOWNLOADER_API_URL")
        .unwrap_or(DEFAULT_LOCAL_ENDPOINT)
        .to_string()
}
fn default_probe_timeout() -> u32 { 5_000 }
fn default_request_timeout() -> u32 { 60_000 }
fn default_success_hide() -> Option<u32> { Some(10_000) }
fn default_error_hide() -> Option<u32> { Some(15_000) }

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            local_endpoint: default_local_endpoint(),
            remote_endpoint: default_remote_endpoint(),
            probe_timeout_ms: default_probe_timeout(),
            request_timeout_ms: default_request_timeout(),
            success_hide_ms: default_success_hide(),
            error_hide_ms: default_error_hide(),
            advise_on_remote: false,
            debug_logs: false,
        }
    }
}

/// Backend base URL chosen once per page load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub base: String,
    /// Page served from a loopback host.
    pub local: bool,
}

impl Endpoint {
    pub fn path(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }
}

pub fn is_loopback_host(hostname: &str) -> bool {
    let host = hostname.trim().trim_start_matches('[').trim_end_matches(']');
    if host.is_empty() {
        // file:// pages have no hostname
        return true;
    }
    let lower = host.to_ascii_lowercase();
    if lower == "localhost" || lower.ends_with(".localhost") {
        return true;
    }
    host.parse::<IpAddr>().map(|ip| ip.is_loopback()).unwrap_or(false)
}

pub fn resolve_endpoint(hostname: &str, config: &AppConfig) -> Endpoint {
    let local = is_loopback_host(hostname);
    let base = if local { &config.local_endpoint } else { &config.remote_endpoint };
    Endpoint {
        base: base.trim().trim_end_matches('/').to_string(),
        local,
    }
}

#[cfg(target_arch = "wasm32")]
pub fn load_from_window() -> AppConfig {
    use wasm_bindgen::JsValue;

    let Some(window) = web_sys::window() else {
        return AppConfig::default();
    };
    let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .unwrap_or(JsValue::UNDEFINED);
    if raw.is_undefined() || raw.is_null() {
        return AppConfig::default();
    }
    match serde_wasm_bindgen::from_value::<AppConfig>(raw) {
        Ok(cfg) => cfg,
        Err(e) => {
            crate::log::warn(
                "config_invalid",
                serde_json::json!({ "global": CONFIG_GLOBAL, "error": e.to_string() }),
            );
            AppConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn current_hostname() -> String {
    web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            remote_endpoint: "https://api.example.com/".into(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn loopback_hosts() {
        for h in ["localhost", "LOCALHOST", "app.localhost", "127.0.0.1", "127.0.1.5", "::1", "[::1]", ""] {
            assert!(is_loopback_host(h), "{h}");
        }
        for h in ["example.com", "192.168.1.10", "localhost.example.com", "10.0.0.1"] {
            assert!(!is_loopback_host(h), "{h}");
        }
    }

    #[test]
    fn local_page_uses_local_endpoint() {
        let ep = resolve_endpoint("localhost", &config());
        assert_eq!(ep.base, "http://localhost:5000");
        assert!(ep.local);
    }

    #[test]
    fn remote_page_uses_remote_endpoint_without_trailing_slash() {
        let ep = resolve_endpoint("videos.example.org", &config());
        assert_eq!(ep.base, "https://api.example.com");
        assert!(!ep.local);
        assert_eq!(ep.path("/download"), "https://api.example.com/download");
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let cfg: AppConfig =
            serde_json::from_str(r#"{"request_timeout_ms": 1000, "error_hide_ms": null}"#).unwrap();
        assert_eq!(cfg.request_timeout_ms, 1000);
        assert_eq!(cfg.error_hide_ms, None);
        assert_eq!(cfg.probe_timeout_ms, 5_000);
        assert_eq!(cfg.success_hide_ms, Some(10_000));
        assert_eq!(cfg.local_endpoint, DEFAULT_LOCAL_ENDPOINT);
    }
}
