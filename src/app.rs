use yew::prelude::*;

use crate::components::navbar::Navbar;
use crate::config::{AppConfig, Endpoint};
use crate::pages;

/// Everything resolved once at startup and handed down to the pages.
#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: AppConfig,
    pub endpoint: Endpoint,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <>
            <Navbar />
            <main>
                <pages::home::HomePage endpoint={props.endpoint.clone()} config={props.config.clone()} />
                <pages::platforms::PlatformsPage />
                <pages::how_it_works::HowItWorksPage />
            </main>
            <footer class="footer">
                <span>{ format!("Backend: {}", props.endpoint.base) }</span>
                { if props.endpoint.local {
                    html! { <span class="hint">{"Run `python api.py` to start the local server."}</span> }
                } else { html!{} }}
            </footer>
        </>
    }
}
