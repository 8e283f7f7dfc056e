//! Recent Log Panel Component
//!
//! Collapsible footer listing the lines retained by the rolling logger,
//! so failed fetches can be inspected without opening devtools.

use leptos::prelude::*;

/// Lines retained by the installed logger, oldest first
fn retained_lines() -> Vec<String> {
    rolling_logger::global().map(|logger| logger.recent()).unwrap_or_default()
}

#[component]
pub fn RecentLogPanel() -> impl IntoView {
    let open = RwSignal::new(false);
    let lines = RwSignal::new(Vec::<String>::new());

    let on_toggle = move |_: web_sys::MouseEvent| {
        if !open.get_untracked() {
            lines.set(retained_lines());
        }
        open.update(|o| *o = !*o);
    };

    let on_clear = move |_: web_sys::MouseEvent| {
        if let Some(logger) = rolling_logger::global() {
            logger.clear();
        }
        lines.set(Vec::new());
    };

    view! {
        <footer class="recent-log">
            <button type="button" class="recent-log-toggle" on:click=on_toggle>
                {move || if open.get() { "Hide log" } else { "Show log" }}
            </button>
            <Show when=move || open.get()>
                <div class="recent-log-actions">
                    <button type="button" on:click=move |_| lines.set(retained_lines())>"Refresh"</button>
                    <button type="button" on:click=on_clear>"Clear"</button>
                </div>
                <pre class="recent-log-lines">
                    {move || {
                        let lines = lines.get();
                        if lines.is_empty() { "No log lines yet".to_string() } else { lines.join("\n") }
                    }}
                </pre>
            </Show>
        </footer>
    }
}
