use crate::error::ClientError;
use crate::types::DownloadResult;

const DEFAULT_FAILURE: &str = "Download failed. Please try again with a different URL.";

/// Maps a finished `POST /download` exchange onto a result.
pub fn interpret_response(status: u16, body: &str) -> Result<DownloadResult, ClientError> {
    let parsed = serde_json::from_str::<DownloadResult>(body);
    if (200..300).contains(&status) {
        return parsed.map_err(|_| ClientError::BackendError {
            status: Some(status),
            message: "Unexpected response from server".to_string(),
        });
    }
    let message = parsed
        .ok()
        .and_then(|r| r.error)
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FAILURE.to_string());
    Err(ClientError::BackendError { status: Some(status), message })
}

/// A failure after the deadline fired is a timeout, whatever the browser reports.
pub fn classify_failure(deadline_fired: bool, after_ms: u32, failure: ClientError) -> ClientError {
    if deadline_fired {
        ClientError::Timeout { after_ms }
    } else {
        failure
    }
}

#[cfg(target_arch = "wasm32")]
pub use self::fetch::{check_connectivity, submit_download};

#[cfg(target_arch = "wasm32")]
mod fetch {
    use std::cell::Cell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use serde_json::json;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{AbortController, Request, RequestInit, RequestMode, Response};

    use super::{classify_failure, interpret_response};
    use crate::config::Endpoint;
    use crate::error::ClientError;
    use crate::log;
    use crate::types::{BackendInfo, DownloadRequest, DownloadResult};

    /// Aborts the request once `after_ms` elapses. Dropping it cancels the timer.
    struct Deadline {
        controller: AbortController,
        fired: Rc<Cell<bool>>,
        after_ms: u32,
        _timer: Timeout,
    }

    impl Deadline {
        fn start(after_ms: u32) -> Result<Self, ClientError> {
            let controller = AbortController::new().map_err(|e| js_failure(&e))?;
            let fired = Rc::new(Cell::new(false));
            let timer = {
                let controller = controller.clone();
                let fired = fired.clone();
                Timeout::new(after_ms, move || {
                    fired.set(true);
                    controller.abort();
                })
            };
            Ok(Self { controller, fired, after_ms, _timer: timer })
        }

        fn classify(&self, err: &JsValue) -> ClientError {
            classify_failure(self.fired.get(), self.after_ms, js_failure(err))
        }
    }

    fn js_failure(err: &JsValue) -> ClientError {
        let text = match err.dyn_ref::<js_sys::Error>() {
            Some(e) => format!("{}: {}", String::from(e.name()), String::from(e.message())),
            None => err.as_string().unwrap_or_else(|| "network request failed".to_string()),
        };
        ClientError::NetworkUnreachable(text)
    }

    async fn send(request: &Request, deadline: &Deadline) -> Result<(u16, String), ClientError> {
        let window = web_sys::window()
            .ok_or_else(|| ClientError::NetworkUnreachable("no window".to_string()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(request))
            .await
            .map_err(|e| deadline.classify(&e))?;
        let resp: Response = resp_value
            .dyn_into()
            .map_err(|e| deadline.classify(&e))?;
        let text_promise = resp.text().map_err(|e| deadline.classify(&e))?;
        let body = JsFuture::from(text_promise)
            .await
            .map_err(|e| deadline.classify(&e))?
            .as_string()
            .unwrap_or_default();
        Ok((resp.status(), body))
    }

    /// `GET <endpoint>/`. Any HTTP answer counts as reachable.
    pub async fn check_connectivity(endpoint: &Endpoint, timeout_ms: u32) -> Result<Option<BackendInfo>, ClientError> {
        let deadline = Deadline::start(timeout_ms)?;
        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);
        opts.set_signal(Some(&deadline.controller.signal()));
        let request = Request::new_with_str_and_init(&endpoint.path(""), &opts).map_err(|e| js_failure(&e))?;

        let (status, body) = send(&request, &deadline).await?;
        log::debug("probe_response", json!({ "status": status, "bytes": body.len() }));
        Ok(serde_json::from_str::<BackendInfo>(&body).ok())
    }

    /// `POST <endpoint>/download` with a JSON body.
    pub async fn submit_download(
        endpoint: &Endpoint,
        request: &DownloadRequest,
        timeout_ms: u32,
    ) -> Result<DownloadResult, ClientError> {
        let body = serde_json::to_string(request).map_err(|e| ClientError::BackendError {
            status: None,
            message: e.to_string(),
        })?;

        let deadline = Deadline::start(timeout_ms)?;
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body));
        opts.set_signal(Some(&deadline.controller.signal()));

        let url = endpoint.path("download");
        let req = Request::new_with_str_and_init(&url, &opts).map_err(|e| js_failure(&e))?;
        req.headers()
            .set("Content-Type", "application/json")
            .map_err(|e| js_failure(&e))?;

        log::info("download_request", json!({ "url": request.url, "quality": request.quality.value() }));
        let (status, text) = send(&req, &deadline).await?;
        log::debug("download_response", json!({ "status": status, "bytes": text.len() }));
        interpret_response(status, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_response_is_parsed() {
        let r = interpret_response(200, r#"{"filename":"v.mp4","title":"Demo"}"#).unwrap();
        assert_eq!(r.filename.as_deref(), Some("v.mp4"));
    }

    #[test]
    fn error_field_is_surfaced() {
        let err = interpret_response(400, r#"{"error":"bad url"}"#).unwrap_err();
        assert_eq!(
            err,
            ClientError::BackendError { status: Some(400), message: "bad url".into() }
        );
    }

    #[test]
    fn non_json_failure_falls_back_to_default_text() {
        let err = interpret_response(502, "<html>Bad Gateway</html>").unwrap_err();
        match err {
            ClientError::BackendError { status, message } => {
                assert_eq!(status, Some(502));
                assert_eq!(message, DEFAULT_FAILURE);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn abort_after_deadline_is_a_timeout() {
        let aborted = ClientError::NetworkUnreachable("AbortError: The user aborted a request.".into());
        let err = classify_failure(true, 60_000, aborted);
        assert_eq!(err, ClientError::Timeout { after_ms: 60_000 });
        assert!(err.is_timeout());
    }

    #[test]
    fn failure_before_deadline_stays_a_network_error() {
        let offline = ClientError::NetworkUnreachable("TypeError: Failed to fetch".into());
        let err = classify_failure(false, 60_000, offline.clone());
        assert_eq!(err, offline);
        assert!(!err.is_timeout());
    }

    #[test]
    fn garbled_success_body_is_an_error() {
        let err = interpret_response(200, "not json").unwrap_err();
        assert!(matches!(err, ClientError::BackendError { status: Some(200), .. }));
        assert!(!err.is_timeout());
    }
}
