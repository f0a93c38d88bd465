use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::render::Notice;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub notice: Option<Notice>,
}

#[function_component(MessageBox)]
pub fn message_box(props: &Props) -> Html {
    let Some(notice) = props.notice.as_ref() else {
        return html! { <div class="message" id="message"></div> };
    };

    let lines = notice.lines().collect::<Vec<_>>();
    let last = lines.len().saturating_sub(1);
    html! {
        <div class={classes!("message", notice.kind.class(), "active")} id="message">
            <div>
                { for lines.into_iter().enumerate().map(|(i, l)| html! {
                    <>
                        { if i == 0 && notice.link.is_some() { html!{ <strong>{ l.to_string() }</strong> } } else { html!{ { l.to_string() } } } }
                        { if i < last { html!{ <br /> } } else { html!{} } }
                    </>
                }) }
            </div>
            { if let Some(link) = notice.link.as_ref() {
                html! {
                    <>
                        <br />
                        <a class="download-link" href={link.href.clone()} download={link.filename.clone()} target="_blank">
                            <Icon icon_id={IconId::LucideDownload} width={"18"} height={"18"} />
                            {"Click here to download your video"}
                        </a>
                    </>
                }
            } else { html!{} }}
        </div>
    }
}
