use crate::render::{AnswerRow, FailureRow, SourcesPanel, TranscriptRow, UserRow};
use crate::types::MessageId;
use dioxus::prelude::*;

#[component]
pub fn MessageList(rows: Vec<TranscriptRow>, on_toggle: EventHandler<MessageId>) -> Element {
    rsx! {
        div { id: "chat-list", class: "messages-list",
            for row in rows.iter() {
                TranscriptRowView { key: "{row.key()}", row: row.clone(), on_toggle }
            }
        }
    }
}

#[component]
fn TranscriptRowView(row: TranscriptRow, on_toggle: EventHandler<MessageId>) -> Element {
    match row {
        TranscriptRow::User(UserRow { text, timestamp, .. }) => rsx! {
            div { class: "message-row user",
                div { class: "avatar user", "👤" }
                div { class: "bubble-wrap",
                    div { class: "bubble user", "{text}" }
                    if let Some(ts) = timestamp {
                        span { class: "message-timestamp", "{ts}" }
                    }
                }
            }
        },
        TranscriptRow::Answer(AnswerRow {
            id,
            html,
            sources,
            timestamp,
        }) => rsx! {
            div { class: "message-row assistant",
                div { class: "avatar bot", "TP" }
                div { class: "bubble-wrap",
                    div { class: "bubble bot",
                        div { class: "md", dangerous_inner_html: "{html}" }
                    }
                    if let Some(panel) = sources {
                        SourcesPanelView { panel, on_toggle: move |_: ()| on_toggle.call(id) }
                    }
                    if let Some(ts) = timestamp {
                        span { class: "message-timestamp", "{ts}" }
                    }
                }
            }
        },
        TranscriptRow::Failure(FailureRow { text, timestamp, .. }) => rsx! {
            div { class: "message-row assistant",
                div { class: "avatar bot", "TP" }
                div { class: "bubble-wrap",
                    div { class: "bubble bot error", role: "alert", "{text}" }
                    if let Some(ts) = timestamp {
                        span { class: "message-timestamp", "{ts}" }
                    }
                }
            }
        },
        TranscriptRow::Typing => rsx! {
            TypingIndicator {}
        },
    }
}

#[component]
fn SourcesPanelView(panel: SourcesPanel, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        div { class: "sources-section",
            button {
                class: "sources-toggle",
                r#type: "button",
                aria_expanded: panel.expanded.to_string(),
                onclick: move |_| on_toggle.call(()),
                "{panel.glyph()} {panel.label()}"
            }
            if panel.expanded {
                div { class: "sources-list",
                    for (i, chip) in panel.chips.iter().enumerate() {
                        div { key: "{i}", class: "source-chip",
                            span { class: "source-score", "{chip.percent}%" }
                            "{chip.preview}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TypingIndicator() -> Element {
    rsx! {
        div { class: "message-row assistant",
            div { class: "avatar bot", "TP" }
            div { class: "typing-indicator", aria_label: "Assistant is typing",
                div { class: "typing-dot" }
                div { class: "typing-dot" }
                div { class: "typing-dot" }
            }
        }
    }
}
