#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod api;
mod config;
mod error;
mod render;
mod state;
mod types;
mod utils;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod log;
#[cfg(target_arch = "wasm32")]
mod pages;
#[cfg(target_arch = "wasm32")]
mod theme;

#[cfg(target_arch = "wasm32")]
use app::{App, AppProps};

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();

    let config = config::load_from_window();
    log::set_debug(config.debug_logs);
    let endpoint = config::resolve_endpoint(&config::current_hostname(), &config);

    if let Err(e) = theme::inject_styles() {
        log::warn("style_injection_failed", serde_json::json!({ "error": format!("{e:?}") }));
    }
    log::banner(&endpoint.base, endpoint.local);

    yew::Renderer::<App>::with_props(AppProps { config, endpoint }).render();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This crate targets WebAssembly. Use `trunk serve` to run the frontend. Do not `cargo run` this crate natively."
    );
    std::process::exit(1);
}
