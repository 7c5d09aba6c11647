use crate::api::{BackendStatus, HttpBackend, QueryBackend};
use crate::dispatcher::QueryDispatcher;
use crate::render::{ExpandedSources, SCROLL_ANCHOR_ID, transcript};
use crate::store::Session;
use crate::suggestions::{SUGGESTED_QUESTIONS, show_suggestions};
use crate::theme::APP_CSS;
use crate::types::MessageId;
use crate::views::{Composer, MessageList, WelcomeScreen};
use dioxus::prelude::*;
use std::rc::Rc;

#[component]
pub fn App() -> Element {
    let backend = use_context::<HttpBackend>();
    let session = use_signal(Session::new);
    let mut expanded = use_signal(ExpandedSources::default);

    let dispatcher = use_hook(|| {
        let backend: Rc<dyn QueryBackend> = Rc::new(backend.clone());
        QueryDispatcher::new(session, backend)
    });

    let health = use_resource(move || {
        let backend = backend.clone();
        async move { BackendStatus::from_probe(&backend.health().await) }
    });

    let submit = {
        let dispatcher = dispatcher.clone();
        use_callback(move |text: String| {
            if let Some(pending) = dispatcher.begin(&text) {
                let dispatcher = dispatcher.clone();
                spawn(async move {
                    dispatcher.complete(pending).await;
                });
            }
        })
    };

    use_scroll_to_latest(session);

    let (rows, loading, empty) = {
        let snapshot = session.read();
        (
            transcript(&snapshot, &expanded.read()),
            snapshot.is_loading(),
            show_suggestions(&snapshot),
        )
    };
    let status = health.cloned().unwrap_or_default();

    rsx! {
        style { dangerous_inner_html: APP_CSS }
        div { class: "app",
            AppHeader {
                has_messages: !empty,
                status,
                on_clear: move |_: ()| {
                    dispatcher.reset();
                    expanded.write().clear();
                },
            }
            div { class: "chat-body",
                if empty {
                    WelcomeScreen {
                        suggestions: SUGGESTED_QUESTIONS,
                        on_suggest: move |question: String| submit.call(question),
                    }
                } else {
                    MessageList {
                        rows,
                        on_toggle: move |id: MessageId| expanded.write().toggle(id),
                    }
                }
                div { id: SCROLL_ANCHOR_ID }
            }
            Composer {
                loading,
                on_send: move |text: String| submit.call(text),
            }
        }
    }
}

/// Keep the newest row in view whenever messages or `loading` change.
fn use_scroll_to_latest(session: Signal<Session>) {
    use_effect(move || {
        let _ = session.read();
        let _ = document::eval(&format!(
            "document.getElementById('{SCROLL_ANCHOR_ID}')?.scrollIntoView({{ behavior: 'smooth', block: 'end' }});"
        ));
    });
}

#[component]
fn AppHeader(has_messages: bool, status: BackendStatus, on_clear: EventHandler<()>) -> Element {
    rsx! {
        header { class: "header",
            div { class: "header-brand",
                div { class: "header-logo", "IIIT Kota" }
                div { class: "header-tagline", "Placement Help Cell" }
            }
            div { class: "header-actions",
                span {
                    class: format_args!("status-badge {}", status.label()),
                    title: "Backend status",
                    "{status.label()}"
                }
                if has_messages {
                    button {
                        class: "btn-clear",
                        r#type: "button",
                        onclick: move |_| on_clear.call(()),
                        "New Chat"
                    }
                }
            }
        }
    }
}
