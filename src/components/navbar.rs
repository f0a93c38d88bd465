use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::log;
use crate::theme;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Download,
    Platforms,
    HowItWorks,
}

impl Section {
    pub fn id(&self) -> &'static str {
        match self {
            Section::Download => "download",
            Section::Platforms => "platforms",
            Section::HowItWorks => "how-it-works",
        }
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let link = |s: Section, label: &'static str, icon: IconId| {
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            log::debug("navigate", serde_json::json!({ "to": s.id() }));
            theme::scroll_to(s.id());
        });
        html! {
            <a class="nav-link" href={format!("#{}", s.id())} {onclick} title={label}>
                <Icon icon_id={icon} width={"20"} height={"20"} />
                <span>{ label }</span>
            </a>
        }
    };

    html! {
        <nav class="navbar">
            <div class="brand">
                <Icon icon_id={IconId::LucideVideo} width={"28"} height={"28"} />
                <span>{"Video Downloader"}</span>
            </div>
            <div class="nav-links">
                { link(Section::Download, "Download", IconId::LucideDownload) }
                { link(Section::Platforms, "Platforms", IconId::LucideGlobe) }
                { link(Section::HowItWorks, "How it works", IconId::LucideInfo) }
            </div>
        </nav>
    }
}
