use crate::suggestions::can_submit;
use dioxus::events::Key;
use dioxus::prelude::*;

/// Text entry. Blank text and submissions while `loading` never reach `on_send`.
#[component]
pub fn Composer(loading: bool, on_send: EventHandler<String>) -> Element {
    let mut input = use_signal(String::new);

    let mut submit = move || {
        let text = input();
        if !can_submit(&text, loading) {
            return;
        }
        on_send.call(text);
        input.set(String::new());
    };

    rsx! {
        div { class: "input-area",
            div { class: "input-wrap",
                textarea {
                    id: "chat-input",
                    class: "chat-input",
                    rows: "1",
                    placeholder: "Ask about placement policies...",
                    value: "{input}",
                    disabled: loading,
                    oninput: move |ev| input.set(ev.value()),
                    onkeydown: move |ev| {
                        if ev.key() == Key::Enter && !ev.modifiers().shift() {
                            ev.prevent_default();
                            submit();
                        }
                    },
                }
                button {
                    id: "send-button",
                    class: "send-btn",
                    r#type: "button",
                    title: "Send (Enter)",
                    disabled: !can_submit(&input(), loading),
                    onclick: move |_| submit(),
                    "Send"
                }
            }
            p { class: "input-hint", "Press Enter to send · Shift+Enter for new line" }
        }
    }
}
