use yew::prelude::*;

const PLATFORMS: &[(&str, &str)] = &[
    ("YouTube", "Videos, shorts and live replays"),
    ("Vimeo", "Public and unlisted uploads"),
    ("Twitter/X", "Videos attached to posts"),
    ("And many more!", "Anything the backend's extractor understands"),
];

#[function_component(PlatformsPage)]
pub fn platforms_page() -> Html {
    html! {
        <section class="platforms" id="platforms">
            <div class="container">
                <h2>{"Supported platforms"}</h2>
                <ul class="platform-list">
                    { for PLATFORMS.iter().map(|(name, blurb)| html! {
                        <li class="platform-item">
                            <strong>{ *name }</strong>
                            <span>{ *blurb }</span>
                        </li>
                    }) }
                </ul>
            </div>
        </section>
    }
}
