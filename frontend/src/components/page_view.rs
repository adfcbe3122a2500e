use super::log_viewer::LogViewer;
use shared::Page;
use yew::prelude::*;

/// Body of the page below the header.
pub fn render_page(page: Option<Page>) -> Html {
    match page {
        Some(Page::Admin) => html! {
            <main class="container">
                <h2>{ Page::Admin.title() }</h2>
                <LogViewer />
            </main>
        },
        Some(page) => html! {
            <main class="container">
                <h2>{ page.title() }</h2>
            </main>
        },
        None => html! {
            <main class="container">
                <p class="text-muted">{"Page not found"}</p>
            </main>
        },
    }
}
