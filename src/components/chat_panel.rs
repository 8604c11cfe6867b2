//! Conversation panel: header, message log, and prompt input.

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::state::chat::{ChatState, Message, Role};
use crate::util::markdown::render_markdown_html;

/// Panel shown while the widget is open.
///
/// Reads and edits `chat` directly; `on_send` runs a submit.
#[component]
pub fn ChatPanel(chat: RwSignal<ChatState>, config: WidgetConfig, on_send: Callback<()>) -> impl IntoView {
    let WidgetConfig { title, subtitle, placeholder, render_markdown, .. } = config;
    let dialog_label = title.clone();
    let bottom_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view; also runs once when the panel opens.
    Effect::new(move || {
        let _ = chat.with(|c| (c.messages().len(), c.loading));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = bottom_ref.get() {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                el.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            on_send.run(());
        }
    };

    view! {
        <div class="chat-widget__panel" role="dialog" aria-label=dialog_label>
            <div class="chat-widget__header">
                <div>
                    <div class="chat-widget__title">{title}</div>
                    <div class="chat-widget__subtitle">{subtitle}</div>
                </div>
                <button
                    class="chat-widget__close"
                    aria-label="Close AI assistant"
                    on:click=move |_| chat.update(ChatState::close)
                >
                    "✕"
                </button>
            </div>

            <div class="chat-widget__messages">
                {move || {
                    chat.with(|c| {
                        c.messages()
                            .iter()
                            .map(|msg| message_view(msg, render_markdown))
                            .collect::<Vec<_>>()
                    })
                }}
                {move || {
                    chat.with(|c| c.loading)
                        .then(|| {
                            view! {
                                <div class="chat-widget__message chat-widget__message--assistant chat-widget__message--pending">
                                    "Thinking…"
                                </div>
                            }
                        })
                }}
                <div class="chat-widget__bottom" node_ref=bottom_ref></div>
            </div>

            <div class="chat-widget__input-row">
                <input
                    class="chat-widget__input"
                    type="text"
                    placeholder=placeholder
                    prop:value=move || chat.with(|c| c.input.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        chat.update(|c| c.set_input(value));
                    }
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary chat-widget__send"
                    on:click=move |_| on_send.run(())
                    disabled=move || chat.with(|c| c.loading)
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}

fn message_view(msg: &Message, render_markdown: bool) -> AnyView {
    let is_user = msg.role == Role::User;
    let is_assistant = !is_user;
    let content = msg.content.clone();

    let body = if render_markdown && is_assistant {
        let rendered = render_markdown_html(&content);
        view! { <div class="chat-widget__markdown" inner_html=rendered></div> }.into_any()
    } else {
        view! { <span>{content}</span> }.into_any()
    };

    view! {
        <div
            class="chat-widget__message"
            class:chat-widget__message--user=is_user
            class:chat-widget__message--assistant=is_assistant
        >
            {body}
        </div>
    }
    .into_any()
}
