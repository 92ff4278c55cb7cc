//! Root application component and context providers.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::state::chat::ChatState;

/// Root application component.
///
/// Owns the chat session state and provides it as a reactive context for
/// the panel.
#[component]
pub fn App() -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    provide_context(chat);

    view! {
        <main class="app">
            <header class="app__header">
                <h1>"FAQ Desk"</h1>
                <p class="app__tagline">"Ask a question, get a grounded answer."</p>
            </header>
            <ChatPanel/>
        </main>
    }
}
