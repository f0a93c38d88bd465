use yew::prelude::*;

#[function_component(HowItWorksPage)]
pub fn how_it_works_page() -> Html {
    html! {
        <section class="how-it-works" id="how-it-works">
            <div class="container">
                <h2>{"How it works"}</h2>
                <ol class="steps">
                    <li>{"Paste the link of the video you want to keep."}</li>
                    <li>{"Choose a quality. \"Best\" lets the server pick the highest available."}</li>
                    <li>{"Press Download and wait while the server fetches the file."}</li>
                    <li>{"Use the green button to save the file to your device."}</li>
                </ol>
            </div>
        </section>
    }
}
