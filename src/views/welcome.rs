use dioxus::prelude::*;

#[component]
pub fn WelcomeScreen(
    suggestions: &'static [&'static str],
    on_suggest: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "welcome",
            div { class: "welcome-icon", "💬" }
            h2 { "How can I help you today?" }
            p { "Ask me anything about placement policies, eligibility, rules, and procedures." }
            div { class: "suggestions-label", "Try asking" }
            div { class: "suggestions-grid",
                for question in suggestions.iter().copied() {
                    button {
                        key: "{question}",
                        class: "suggestion-card",
                        r#type: "button",
                        onclick: move |_| on_suggest.call(question.to_string()),
                        "{question}"
                    }
                }
            }
        }
    }
}
