//! Chat panel: transcript, provenance metadata, and the send pipeline.
//!
//! DESIGN
//! ======
//! The transcript reactively renders the bounded window from
//! [`ChatState::visible`]; message text is emitted as text nodes, never as
//! markup. The send pipeline is Idle -> Sending -> (Success | Failure) ->
//! Idle: submitting appends the user entry and the "Thinking..." placeholder,
//! disables the controls, performs the single `/chat` call, then settles the
//! state and returns focus to the input. There is no timeout, abort, or
//! client-side retry; a failed turn is resubmitted manually.

use leptos::prelude::*;

use crate::net::api;
use crate::state::chat::{ChatState, DisplayMessage, Role};

/// Chat panel showing the transcript and an input row for new messages.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let transcript_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Keep the latest message visible whenever the transcript changes.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = transcript_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let message = input.get().trim().to_owned();

        // State rejects blank input and double-sends; no request either way.
        let started = chat
            .try_update(|c| c.begin_exchange(&message))
            .unwrap_or(false);
        if !started {
            return;
        }
        input.set(String::new());

        leptos::task::spawn_local(async move {
            let history = chat.get_untracked().history.clone();
            match api::send_chat(&message, &history).await {
                Ok(response) => chat.update(|c| c.complete(response)),
                Err(_) => chat.update(ChatState::fail),
            }

            #[cfg(feature = "csr")]
            {
                if let Some(el) = input_ref.get_untracked() {
                    let _ = el.focus();
                }
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    let sending = move || chat.get().sending;

    view! {
        <div class="chat-panel">
            <div class="chat-panel__transcript" node_ref=transcript_ref>
                {move || {
                    chat.get()
                        .visible()
                        .iter()
                        .cloned()
                        .map(message_bubble)
                        .collect::<Vec<_>>()
                }}
            </div>

            <form class="chat-panel__input-row" on:submit=on_submit>
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Ask a question..."
                    node_ref=input_ref
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    disabled=sending
                />
                <button type="submit" class="chat-panel__send" disabled=sending>
                    "Send"
                </button>
            </form>
        </div>
    }
}

/// One message bubble; assistant bubbles get a metadata block.
fn message_bubble(msg: DisplayMessage) -> impl IntoView {
    let role_class = match msg.role {
        Role::User => "message-bubble message-bubble--user",
        Role::Assistant => "message-bubble message-bubble--assistant",
    };
    let metadata = (msg.role == Role::Assistant).then(|| metadata_block(&msg));

    view! {
        <div class=role_class class:message-bubble--error=msg.is_error>
            <p class="message-bubble__content">{msg.content.clone()}</p>
            {metadata}
        </div>
    }
}

/// Metadata for an assistant bubble: memory badge, sources, or the
/// "No grounded source" notice. None when nothing applies (placeholder and
/// error entries).
fn metadata_block(msg: &DisplayMessage) -> Option<impl IntoView + use<>> {
    let badge = msg
        .memory_used
        .then(|| view! { <span class="memory-badge">"Memory Used"</span> });
    let sources = (!msg.sources.is_empty()).then(|| sources_list(msg));
    let notice = msg
        .shows_no_source_notice()
        .then(|| view! { <p class="no-source">"No grounded source"</p> });

    if badge.is_none() && sources.is_none() && notice.is_none() {
        return None;
    }

    Some(view! {
        <div class="metadata">
            {badge}
            {sources}
            {notice}
        </div>
    })
}

/// Sources header and list. Each source links to the message's url when one
/// is present, in a new browsing context with an opener-safe rel.
fn sources_list(msg: &DisplayMessage) -> impl IntoView + use<> {
    let url = msg.url.clone();
    let items = msg
        .sources
        .iter()
        .map(|source| {
            let text = source.clone();
            match url.clone() {
                Some(href) => view! {
                    <li>
                        <a href=href target="_blank" rel="noopener noreferrer">{text}</a>
                    </li>
                }
                .into_any(),
                None => view! { <li>{text}</li> }.into_any(),
            }
        })
        .collect::<Vec<_>>();

    view! {
        <p class="sources-header">"Sources:"</p>
        <ul class="sources-list">{items}</ul>
    }
}
