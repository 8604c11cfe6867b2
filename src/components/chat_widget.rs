//! Floating assistant launcher and the conversation it owns.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each mounted widget owns one `RwSignal<ChatState>` and one assistant
//! client. A submit applies the guard synchronously, then spawns the single
//! network call; its outcome is written back to the same signal.
//!
//! TRADE-OFFS
//! ==========
//! Unmounting does not abort the fetch itself. The `alive` flag is cleared
//! in `on_cleanup` and a reply arriving afterwards is dropped instead of
//! being written to disposed state.

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::config::WidgetConfig;
use crate::net::assistant::{AssistantClient, HttpAssistant};
use crate::net::types::AskRequest;
use crate::state::chat::ChatState;

/// Floating toggle button plus the conversation panel.
///
/// Without a `config`, the endpoint comes from the build environment.
/// Without a `client`, requests go to `config.endpoint` over HTTP.
#[component]
pub fn ChatWidget(
    #[prop(optional)] config: Option<WidgetConfig>,
    #[prop(optional)] client: Option<Arc<dyn AssistantClient>>,
) -> impl IntoView {
    let config = config.unwrap_or_else(WidgetConfig::from_build_env);
    let client: Arc<dyn AssistantClient> =
        client.unwrap_or_else(|| Arc::new(HttpAssistant::new(config.endpoint.clone())));

    let chat = RwSignal::new(ChatState::new(config.greeting.clone()));
    let client = StoredValue::new(client);

    let alive = Arc::new(AtomicBool::new(true));
    let alive_slot = StoredValue::new(alive.clone());
    on_cleanup(move || alive.store(false, Ordering::Relaxed));

    let do_send = move || {
        let Some(request) = start_submit(chat) else {
            return;
        };
        leptos::task::spawn_local(complete_submit(chat, client.get_value(), request, alive_slot.get_value()));
    };
    let on_send = Callback::new(move |()| do_send());

    let launcher_label = config.launcher_label.clone();
    let is_open = move || chat.with(|c| c.open);

    view! {
        <div class="chat-widget">
            <button
                class="chat-widget__launcher"
                aria-label=move || launcher_aria_label(is_open())
                aria-expanded=move || is_open().to_string()
                on:click=move |_| chat.update(ChatState::toggle)
            >
                {move || launcher_text(is_open(), &launcher_label)}
            </button>

            <Show when=is_open>
                <ChatPanel chat=chat config=config.clone() on_send=on_send/>
            </Show>
        </div>
    }
}

/// Run the submit guard against `chat` and return the request to send.
///
/// Ignored submits leave the signal untouched so nothing re-renders.
pub(crate) fn start_submit(chat: RwSignal<ChatState>) -> Option<AskRequest> {
    if !chat.with_untracked(ChatState::can_send) {
        return None;
    }
    let request = chat.try_update(ChatState::begin_submit).flatten()?;
    leptos::logging::log!("assistant request sent with {} history messages", request.history.len());
    Some(request)
}

/// Await the endpoint and write its outcome back, unless the widget has
/// been unmounted in the meantime.
pub(crate) async fn complete_submit(
    chat: RwSignal<ChatState>,
    client: Arc<dyn AssistantClient>,
    request: AskRequest,
    alive: Arc<AtomicBool>,
) {
    let result = client.ask(&request).await;
    if !alive.load(Ordering::Relaxed) {
        leptos::logging::log!("assistant reply discarded: widget unmounted");
        return;
    }
    chat.update(|c| c.finish_submit(result));
}

fn launcher_text(open: bool, label: &str) -> String {
    if open { "Close".to_owned() } else { label.to_owned() }
}

fn launcher_aria_label(open: bool) -> &'static str {
    if open { "Close AI assistant" } else { "Open AI assistant" }
}
