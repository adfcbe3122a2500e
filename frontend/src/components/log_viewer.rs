use gloo_console::error;
use gloo_net::http::Request;
use shared::LogEntry;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const LOGS_ENDPOINT: &str = "/api/logs";

async fn fetch_logs() -> Result<Vec<LogEntry>, String> {
    let resp = Request::get(LOGS_ENDPOINT)
        .send()
        .await
        .map_err(|err| format!("Fetch error: {:?}", err))?;

    if !resp.ok() {
        return Err(format!("Failed to load logs (HTTP {})", resp.status()));
    }

    resp.json::<Vec<LogEntry>>()
        .await
        .map_err(|err| format!("Invalid log payload: {:?}", err))
}

async fn clear_logs() -> Result<(), String> {
    let resp = Request::delete(LOGS_ENDPOINT)
        .send()
        .await
        .map_err(|err| format!("Fetch error: {:?}", err))?;

    if resp.ok() {
        Ok(())
    } else {
        Err(format!("Failed to clear logs (HTTP {})", resp.status()))
    }
}

/// Bootstrap text class for a log level.
pub fn level_class(level: &str) -> &'static str {
    match level.to_ascii_uppercase().as_str() {
        "ERROR" => "text-danger",
        "WARN" | "WARNING" => "text-warning",
        "DEBUG" | "TRACE" => "text-secondary",
        _ => "text-body",
    }
}

/// Server log table for the admin page.
#[function_component(LogViewer)]
pub fn log_viewer() -> Html {
    let entries = use_state(|| None::<Vec<LogEntry>>);
    let fetch_error = use_state(|| None::<String>);
    let generation = use_state(|| 0u32);

    {
        let entries = entries.clone();
        let fetch_error = fetch_error.clone();
        use_effect_with(*generation, move |_| {
            spawn_local(async move {
                match fetch_logs().await {
                    Ok(fetched) => {
                        fetch_error.set(None);
                        entries.set(Some(fetched));
                    }
                    Err(err) => {
                        error!(err.clone());
                        fetch_error.set(Some(err));
                    }
                }
            });
            || ()
        });
    }

    let on_clear = {
        let generation = generation.clone();
        let fetch_error = fetch_error.clone();
        Callback::from(move |_: MouseEvent| {
            let generation = generation.clone();
            let fetch_error = fetch_error.clone();
            spawn_local(async move {
                match clear_logs().await {
                    Ok(()) => generation.set(generation.wrapping_add(1)),
                    Err(err) => {
                        error!(err.clone());
                        fetch_error.set(Some(err));
                    }
                }
            });
        })
    };

    let render_entry = |entry: &LogEntry| {
        html! {
            <tr>
                <td>{ &entry.timestamp }</td>
                <td class={level_class(&entry.level)}>{ &entry.level }</td>
                <td>{ &entry.service }</td>
                <td>{ &entry.message }</td>
            </tr>
        }
    };

    html! {
        <section class="log-viewer">
            <div class="d-flex justify-content-between align-items-center mb-2">
                <h3>{"Server log"}</h3>
                <button class="btn btn-outline-danger btn-sm" onclick={on_clear}>{"Clear logs"}</button>
            </div>
            {
                if let Some(err) = &*fetch_error {
                    html! { <div class="alert alert-danger">{ err }</div> }
                } else {
                    html! {}
                }
            }
            {
                match &*entries {
                    None => html! { <p>{"Loading logs..."}</p> },
                    Some(list) if list.is_empty() => html! { <p class="text-muted">{"Log is empty."}</p> },
                    Some(list) => html! {
                        <table class="table table-sm log-table">
                            <thead>
                                <tr>
                                    <th>{"Time"}</th>
                                    <th>{"Level"}</th>
                                    <th>{"Service"}</th>
                                    <th>{"Message"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for list.iter().map(render_entry) }
                            </tbody>
                        </table>
                    },
                }
            }
        </section>
    }
}
