use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

/// Shown in place of an answer when a query could not be completed.
pub const FAILURE_APOLOGY: &str =
    "Sorry, I could not reach the server. Please check your connection and try again.";

/// Per-session, monotonically increasing message identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "msg-{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// A retrieved passage backing an answer, in backend rank order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Source {
    #[serde(alias = "text")]
    pub text_preview: String,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_id: Option<String>,
}

impl Source {
    pub fn new(text_preview: impl Into<String>, score: f64) -> Self {
        Self {
            text_preview: text_preview.into(),
            score,
            chunk_id: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum MessageBody {
    User(String),
    Answer { content: String, sources: Vec<Source> },
    Failure(String),
}

/// One turn of the conversation. Immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    id: MessageId,
    created_at: OffsetDateTime,
    body: MessageBody,
}

/// Borrowed, exhaustive view of a message for rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MessageKind<'a> {
    User { content: &'a str },
    Answer { content: &'a str, sources: &'a [Source] },
    Error { content: &'a str },
}

impl Message {
    pub fn user(id: MessageId, content: impl Into<String>) -> Self {
        Self::with_body(id, MessageBody::User(content.into()))
    }

    pub fn answer(id: MessageId, content: impl Into<String>, sources: Vec<Source>) -> Self {
        Self::with_body(
            id,
            MessageBody::Answer {
                content: content.into(),
                sources,
            },
        )
    }

    pub fn failure(id: MessageId) -> Self {
        Self::with_body(id, MessageBody::Failure(FAILURE_APOLOGY.to_string()))
    }

    fn with_body(id: MessageId, body: MessageBody) -> Self {
        Self {
            id,
            created_at: OffsetDateTime::now_utc(),
            body,
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    pub fn role(&self) -> Role {
        match self.body {
            MessageBody::User(_) => Role::User,
            MessageBody::Answer { .. } | MessageBody::Failure(_) => Role::Assistant,
        }
    }

    pub fn content(&self) -> &str {
        match &self.body {
            MessageBody::User(content)
            | MessageBody::Failure(content)
            | MessageBody::Answer { content, .. } => content,
        }
    }

    /// Sources are only ever present on successful answers.
    pub fn sources(&self) -> Option<&[Source]> {
        match &self.body {
            MessageBody::Answer { sources, .. } => Some(sources),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.body, MessageBody::Failure(_))
    }

    pub fn kind(&self) -> MessageKind<'_> {
        match &self.body {
            MessageBody::User(content) => MessageKind::User { content },
            MessageBody::Answer { content, sources } => MessageKind::Answer { content, sources },
            MessageBody::Failure(content) => MessageKind::Error { content },
        }
    }
}
