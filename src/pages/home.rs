use gloo_timers::callback::Timeout;
use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_icons::{Icon, IconId};

use crate::api;
use crate::components::message::MessageBox;
use crate::config::{AppConfig, Endpoint};
use crate::log;
use crate::render::{error_notice, probe_advisory, render_outcome};
use crate::state::{UiAction, UiModel};
use crate::types::Quality;
use crate::utils::url::prepare_submission;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub endpoint: Endpoint,
    pub config: AppConfig,
}

#[function_component(HomePage)]
pub fn home_page(props: &Props) -> Html {
    let url_input_ref = use_node_ref();
    let quality_ref = use_node_ref();
    let ui = use_reducer(UiModel::default);

    // Liveness probe, once per load. Never blocks the form.
    {
        let dispatcher = ui.dispatcher();
        let endpoint = props.endpoint.clone();
        let config = props.config.clone();
        use_effect_once(move || {
            spawn_local(async move {
                match api::check_connectivity(&endpoint, config.probe_timeout_ms).await {
                    Ok(info) => log::info(
                        "backend_connected",
                        json!({
                            "endpoint": endpoint.base,
                            "version": info.as_ref().and_then(|i| i.version.clone()),
                            "message": info.and_then(|i| i.message),
                        }),
                    ),
                    Err(err) => {
                        log::warn(
                            "backend_unreachable",
                            json!({ "endpoint": endpoint.base, "error": err.to_string(), "hint": "python api.py" }),
                        );
                        if endpoint.local || config.advise_on_remote {
                            dispatcher.dispatch(UiAction::Advise(probe_advisory()));
                        }
                    }
                }
            });
            || {}
        });
    }

    // Auto-hide. The cleanup drops the timer whenever a newer notice replaces this one.
    {
        let dispatcher = ui.dispatcher();
        let delay = ui.hide_delay(&props.config);
        use_effect_with(ui.generation, move |generation| {
            let generation = *generation;
            let timer = delay.map(|ms| {
                Timeout::new(ms, move || dispatcher.dispatch(UiAction::AutoHide(generation)))
            });
            move || drop(timer)
        });
    }

    let on_input = {
        let ui = ui.clone();
        Callback::from(move |_: InputEvent| ui.dispatch(UiAction::DismissError))
    };

    let on_submit = {
        let ui = ui.clone();
        let url_input_ref = url_input_ref.clone();
        let quality_ref = quality_ref.clone();
        let endpoint = props.endpoint.clone();
        let timeout_ms = props.config.request_timeout_ms;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if ui.is_loading() {
                return;
            }
            let raw = url_input_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let quality = quality_ref
                .cast::<HtmlSelectElement>()
                .map(|s| Quality::from_value(&s.value()))
                .unwrap_or_default();

            let request = match prepare_submission(&raw, quality) {
                Ok(r) => r,
                Err(err) => {
                    log::debug("input_rejected", json!({ "input": raw, "error": err.to_string() }));
                    ui.dispatch(UiAction::Reject(error_notice(&err, &endpoint)));
                    return;
                }
            };

            ui.dispatch(UiAction::Submit);
            let dispatcher = ui.dispatcher();
            let endpoint = endpoint.clone();
            spawn_local(async move {
                let notice = match api::submit_download(&endpoint, &request, timeout_ms).await {
                    Ok(result) => {
                        log::info(
                            "download_ready",
                            json!({ "filename": result.filename, "title": result.title, "duration": result.duration }),
                        );
                        render_outcome(&result, &endpoint)
                    }
                    Err(err) => {
                        log::error(
                            "download_failed",
                            json!({ "url": request.url, "error": err.to_string(), "timeout": err.is_timeout() }),
                        );
                        error_notice(&err, &endpoint)
                    }
                };
                dispatcher.dispatch(UiAction::Finish(notice));
            });
        })
    };

    let loading = ui.is_loading();

    html! {
        <section class="hero" id="download">
            <div class="container">
                <h1>{"🎥 Video Downloader"}</h1>
                <p class="subtitle">{"Paste a link, pick a quality, and grab your video."}</p>
                <form id="downloadForm" class="download-form" onsubmit={on_submit}>
                    <div class="input-group">
                        <label for="videoUrl">{"Video URL"}</label>
                        <input type="text" id="videoUrl" ref={url_input_ref} placeholder="https://youtube.com/watch?v=..." oninput={on_input} />
                    </div>
                    <div class="input-group">
                        <label for="quality">{"Quality"}</label>
                        <select id="quality" ref={quality_ref}>
                            { for Quality::ALL.iter().map(|q| html! {
                                <option value={q.value()} selected={*q == Quality::Best}>{ q.label() }</option>
                            }) }
                        </select>
                    </div>
                    <button type="submit" id="downloadBtn" disabled={loading}>
                        <Icon icon_id={IconId::LucideDownload} width={"22"} height={"22"} />
                        <span class="btn-text">{ if loading { "Downloading..." } else { "Download Video" } }</span>
                    </button>
                </form>
                <div class={classes!("loader", loading.then_some("active"))} id="loader"></div>
                <MessageBox notice={ui.notice().cloned()} />
            </div>
        </section>
    }
}
