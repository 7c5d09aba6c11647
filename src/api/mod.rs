/// Backend contract for the placement assistant
///
/// The retrieval-and-answer service is an external collaborator. This module owns the
/// request/response wire format it speaks and the transport used to reach it.
///
/// # Architecture
///
/// - `wire` - JSON request/response shapes for the chat and health endpoints
/// - `http` - reqwest-backed implementation of [`QueryBackend`]
///
/// # Usage
///
/// ```rust,no_run
/// use placement_assistant::api::{HttpBackend, QueryBackend, QueryRequest};
/// use placement_assistant::config::Config;
///
/// # async fn example() -> anyhow::Result<()> {
/// let backend = HttpBackend::new(&Config::from_env()?)?;
/// let answer = backend.ask(&QueryRequest::new("Who is eligible for placements?")).await?;
/// println!("{}", answer.answer);
/// # Ok(())
/// # }
/// ```
mod http;
mod wire;

use async_trait::async_trait;

pub use http::HttpBackend;
pub use wire::{BackendStatus, DEFAULT_TOP_K, HealthReport, QueryAnswer, QueryRequest};

/// Why a query did not produce an answer. Only ever logged; users see one apology.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type QueryResult<T> = Result<T, QueryError>;

/// Anything that can turn a question into an answer with sources.
#[async_trait(?Send)]
pub trait QueryBackend {
    async fn ask(&self, request: &QueryRequest) -> QueryResult<QueryAnswer>;
}
