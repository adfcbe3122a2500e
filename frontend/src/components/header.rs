use shared::banner::{CONTAINER_CLASS, HEADER_CLASS, SUBTITLE, SUBTITLE_CLASS, TITLE, TITLE_CLASS};
use yew::prelude::*;

/// Renders the application header. Takes no properties and holds no state,
/// so every render yields the same markup.
#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class={HEADER_CLASS}>
            <div class={CONTAINER_CLASS}>
                <h1 class={TITLE_CLASS}>{ TITLE }</h1>
                <p class={SUBTITLE_CLASS}>{ SUBTITLE }</p>
            </div>
        </header>
    }
}
