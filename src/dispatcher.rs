//! Query dispatcher: one request/response cycle per accepted question.
//!
//! `begin` runs synchronously (validate, append the user turn, raise `loading`),
//! `complete` awaits the backend and `settle`s exactly one assistant turn. A
//! result whose session generation was retired by `reset` is dropped.

use crate::api::{QueryAnswer, QueryBackend, QueryError, QueryRequest};
use crate::store::{Generation, SessionStore};
use crate::types::{Message, MessageId};
use std::rc::Rc;
use tracing::{debug, info, warn};

/// An accepted query that has not settled yet.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingQuery {
    request: QueryRequest,
    user_message: MessageId,
    generation: Generation,
}

impl PendingQuery {
    pub fn request(&self) -> &QueryRequest {
        &self.request
    }

    pub fn user_message(&self) -> MessageId {
        self.user_message
    }
}

/// How a pending query ended up in the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settlement {
    Answered(MessageId),
    Failed(MessageId),
    /// The conversation was reset while the request was in flight.
    Discarded,
}

pub struct QueryDispatcher<S> {
    store: S,
    backend: Rc<dyn QueryBackend>,
}

impl<S: Clone> Clone for QueryDispatcher<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            backend: Rc::clone(&self.backend),
        }
    }
}

impl<S: SessionStore> QueryDispatcher<S> {
    pub fn new(store: S, backend: Rc<dyn QueryBackend>) -> Self {
        Self { store, backend }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Submit `text`. Returns `None` when the submission was a no-op.
    pub async fn send(&self, text: &str) -> Option<Settlement> {
        let pending = self.begin(text)?;
        Some(self.complete(pending).await)
    }

    /// Accept a query if it is non-empty and nothing is in flight.
    pub fn begin(&self, text: &str) -> Option<PendingQuery> {
        let query = text.trim();
        if query.is_empty() {
            debug!("ignoring empty submission");
            return None;
        }

        self.store.update(|session| {
            if session.is_loading() {
                debug!("ignoring submission while a query is in flight");
                return None;
            }
            let id = session.next_id();
            session.append(Message::user(id, query));
            session.set_loading(true);
            debug!(msg_id = %id, "query dispatched");
            Some(PendingQuery {
                request: QueryRequest::new(query),
                user_message: id,
                generation: session.generation(),
            })
        })
    }

    pub async fn complete(&self, pending: PendingQuery) -> Settlement {
        let outcome = self.backend.ask(&pending.request).await;
        self.settle(pending, outcome)
    }

    /// Append the single assistant turn for `pending`, then lower `loading`.
    pub fn settle(
        &self,
        pending: PendingQuery,
        outcome: Result<QueryAnswer, QueryError>,
    ) -> Settlement {
        self.store.update(|session| {
            if session.generation() != pending.generation {
                debug!(
                    msg_id = %pending.user_message,
                    "dropping result for a conversation that was reset"
                );
                return Settlement::Discarded;
            }

            let id = session.next_id();
            let settlement = match outcome {
                Ok(answer) => {
                    info!(
                        msg_id = %id,
                        sources = answer.sources.len(),
                        "answer received"
                    );
                    session.append(Message::answer(id, answer.answer, answer.sources));
                    Settlement::Answered(id)
                }
                Err(err) => {
                    warn!(msg_id = %id, error = %err, "query failed");
                    session.append(Message::failure(id));
                    Settlement::Failed(id)
                }
            };
            session.set_loading(false);
            settlement
        })
    }

    /// Start a new conversation. In-flight results are discarded when they land.
    pub fn reset(&self) {
        self.store.update(|session| session.clear());
    }
}
