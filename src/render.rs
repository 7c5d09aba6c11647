//! Maps session state to the rows of the visible transcript.

use crate::store::Session;
use crate::types::{Message, MessageId, MessageKind, Source};
use comrak::plugins::syntect::SyntectAdapter;
use comrak::{ComrakOptions, ComrakPlugins, markdown_to_html_with_plugins};
use once_cell::sync::Lazy;
use std::collections::BTreeSet;
use std::fmt;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

/// Element id the transcript scrolls to after every change.
pub const SCROLL_ANCHOR_ID: &str = "chat-end";

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    // Raw HTML from the backend is never passed through.
    options.render.unsafe_ = false;
    options
});

static HIGHLIGHTER: Lazy<SyntectAdapter> =
    Lazy::new(|| SyntectAdapter::new(Some("base16-ocean.dark")));

pub fn markdown_to_html(md: &str) -> String {
    let mut plugins = ComrakPlugins::default();
    plugins.render.codefence_syntax_highlighter = Some(&*HIGHLIGHTER);
    markdown_to_html_with_plugins(md, &MARKDOWN_OPTIONS, &plugins)
}

/// Which answers currently have their sources panel open.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpandedSources(BTreeSet<MessageId>);

impl ExpandedSources {
    pub fn toggle(&mut self, id: MessageId) {
        if !self.0.remove(&id) {
            self.0.insert(id);
        }
    }

    pub fn is_expanded(&self, id: MessageId) -> bool {
        self.0.contains(&id)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SourceChip {
    pub percent: i64,
    pub preview: String,
}

impl fmt::Display for SourceChip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% {}", self.percent, self.preview)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SourcesPanel {
    pub count: usize,
    pub expanded: bool,
    /// Empty while collapsed; backend order otherwise.
    pub chips: Vec<SourceChip>,
}

impl SourcesPanel {
    pub fn label(&self) -> String {
        let noun = if self.count == 1 { "source" } else { "sources" };
        format!("{} {noun} used", self.count)
    }

    pub fn glyph(&self) -> &'static str {
        if self.expanded { "▾" } else { "▸" }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UserRow {
    pub id: MessageId,
    pub text: String,
    pub timestamp: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnswerRow {
    pub id: MessageId,
    pub html: String,
    pub sources: Option<SourcesPanel>,
    pub timestamp: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FailureRow {
    pub id: MessageId,
    pub text: String,
    pub timestamp: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TranscriptRow {
    /// Plain text; never interpreted as markup.
    User(UserRow),
    Answer(AnswerRow),
    Failure(FailureRow),
    /// Transient "typing" indicator, only while a query is in flight.
    Typing,
}

impl TranscriptRow {
    pub fn key(&self) -> String {
        match self {
            TranscriptRow::User(row) => row.id.to_string(),
            TranscriptRow::Answer(row) => row.id.to_string(),
            TranscriptRow::Failure(row) => row.id.to_string(),
            TranscriptRow::Typing => "typing".to_string(),
        }
    }
}

pub fn transcript(session: &Session, expanded: &ExpandedSources) -> Vec<TranscriptRow> {
    let mut rows: Vec<TranscriptRow> = session
        .messages()
        .iter()
        .map(|msg| message_row(msg, expanded))
        .collect();
    if session.is_loading() {
        rows.push(TranscriptRow::Typing);
    }
    rows
}

pub fn message_row(msg: &Message, expanded: &ExpandedSources) -> TranscriptRow {
    let id = msg.id();
    let timestamp = format_message_timestamp(msg.created_at());
    match msg.kind() {
        MessageKind::User { content } => TranscriptRow::User(UserRow {
            id,
            text: content.to_string(),
            timestamp,
        }),
        MessageKind::Answer { content, sources } => TranscriptRow::Answer(AnswerRow {
            id,
            html: markdown_to_html(content),
            sources: sources_panel(sources, expanded.is_expanded(id)),
            timestamp,
        }),
        MessageKind::Error { content } => TranscriptRow::Failure(FailureRow {
            id,
            text: content.to_string(),
            timestamp,
        }),
    }
}

fn sources_panel(sources: &[Source], expanded: bool) -> Option<SourcesPanel> {
    if sources.is_empty() {
        return None;
    }
    let chips = if expanded {
        sources
            .iter()
            .map(|src| SourceChip {
                percent: score_percent(src.score),
                preview: src.text_preview.clone(),
            })
            .collect()
    } else {
        Vec::new()
    };
    Some(SourcesPanel {
        count: sources.len(),
        expanded,
        chips,
    })
}

/// Relevance as a whole percentage. Out-of-range scores are shown as given.
pub fn score_percent(score: f64) -> i64 {
    if !score.is_finite() {
        return 0;
    }
    (score * 100.0).round() as i64
}

pub fn format_message_timestamp(timestamp: OffsetDateTime) -> Option<String> {
    let mut datetime = timestamp;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}
