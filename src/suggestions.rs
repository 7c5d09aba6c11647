//! Entry surface: canned questions and the submit guard for the composer.

use crate::store::Session;

pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "What are the eligibility criteria for placements?",
    "What is the minimum CGPA required to sit for a company?",
    "Can I apply to another company after receiving an offer?",
    "What happens if I decline a job offer?",
    "How does the one-student-one-job policy work?",
    "What is the policy on internship-to-PPO conversions?",
];

/// Suggestions are offered only on an empty conversation.
pub fn show_suggestions(session: &Session) -> bool {
    session.is_empty()
}

/// Mirrors the dispatcher's no-op rules so the send button can be disabled.
pub fn can_submit(text: &str, loading: bool) -> bool {
    !loading && !text.trim().is_empty()
}
