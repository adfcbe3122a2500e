mod components;

use components::header::Header;
use components::page_view::render_page;
use shared::Page;
use shared::banner::{APP_NAME, TITLE};
use yew::prelude::*;

fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[function_component(App)]
fn app() -> Html {
    let page = Page::from_path(&current_path());

    use_effect_with(page, |page| {
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            let title = match page {
                Some(page) => format!("{} | {}", page.title(), TITLE),
                None => TITLE.to_string(),
            };
            document.set_title(&title);
        }
        || ()
    });

    html! {
        <>
            <Header />
            { render_page(page) }
            <footer class="app-footer">
                <p>{ APP_NAME }</p>
            </footer>
        </>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting at {}", current_path());
    yew::Renderer::<App>::new().render();
}
