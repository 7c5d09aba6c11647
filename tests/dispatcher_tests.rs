//! Request lifecycle tests for the query dispatcher
//!
//! Backends here are in-process fakes that record what the session looked like
//! at the moment the request was issued.

use async_trait::async_trait;
use placement_assistant::api::{QueryAnswer, QueryBackend, QueryError, QueryRequest, QueryResult};
use placement_assistant::dispatcher::{QueryDispatcher, Settlement};
use placement_assistant::render::{ExpandedSources, TranscriptRow, transcript};
use placement_assistant::store::{SessionStore, SharedSession};
use placement_assistant::suggestions::SUGGESTED_QUESTIONS;
use placement_assistant::types::{FAILURE_APOLOGY, Role, Source};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tokio::sync::oneshot;

/// Replies from a queue and records the session state seen at call time.
struct ScriptedBackend {
    session: SharedSession,
    replies: RefCell<VecDeque<QueryResult<QueryAnswer>>>,
    requests: RefCell<Vec<QueryRequest>>,
    loading_at_call: RefCell<Vec<bool>>,
}

impl ScriptedBackend {
    fn new(session: SharedSession, replies: Vec<QueryResult<QueryAnswer>>) -> Rc<Self> {
        Rc::new(Self {
            session,
            replies: RefCell::new(replies.into()),
            requests: RefCell::new(Vec::new()),
            loading_at_call: RefCell::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl QueryBackend for ScriptedBackend {
    async fn ask(&self, request: &QueryRequest) -> QueryResult<QueryAnswer> {
        self.requests.borrow_mut().push(request.clone());
        let loading = self.session.view(|s| s.is_loading());
        self.loading_at_call.borrow_mut().push(loading);
        self.replies
            .borrow_mut()
            .pop_front()
            .expect("no scripted reply left")
    }
}

/// Holds each request open until the test releases it.
struct GatedBackend {
    gate: RefCell<Option<oneshot::Receiver<QueryResult<QueryAnswer>>>>,
    calls: RefCell<usize>,
}

impl GatedBackend {
    fn new() -> (Rc<Self>, oneshot::Sender<QueryResult<QueryAnswer>>) {
        let (tx, rx) = oneshot::channel();
        let backend = Rc::new(Self {
            gate: RefCell::new(Some(rx)),
            calls: RefCell::new(0),
        });
        (backend, tx)
    }
}

#[async_trait(?Send)]
impl QueryBackend for GatedBackend {
    async fn ask(&self, _request: &QueryRequest) -> QueryResult<QueryAnswer> {
        *self.calls.borrow_mut() += 1;
        let rx = self.gate.borrow_mut().take().expect("gate used twice");
        rx.await.expect("gate sender dropped")
    }
}

fn answer(text: &str, sources: Vec<Source>) -> QueryResult<QueryAnswer> {
    Ok(QueryAnswer {
        answer: text.to_string(),
        sources,
    })
}

fn server_error() -> QueryResult<QueryAnswer> {
    Err(QueryError::Status {
        status: 500,
        body: "Chat processing failed: index offline".to_string(),
    })
}

#[tokio::test]
async fn successful_round_trip() {
    let session = SharedSession::new();
    let backend = ScriptedBackend::new(
        session.clone(),
        vec![answer("X", vec![Source::new("A", 0.92)])],
    );
    let dispatcher = QueryDispatcher::new(session.clone(), backend.clone());

    let settlement = dispatcher.send("  Who can sit for placements?  ").await;
    assert!(matches!(settlement, Some(Settlement::Answered(_))));

    assert_eq!(
        backend.requests.borrow()[0],
        QueryRequest {
            query: "Who can sit for placements?".to_string(),
            top_k: 3
        }
    );
    assert_eq!(*backend.loading_at_call.borrow(), vec![true]);

    let snapshot = session.snapshot();
    assert!(!snapshot.is_loading());
    let messages = snapshot.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role(), Role::User);
    assert_eq!(messages[1].role(), Role::Assistant);
    assert_eq!(messages[1].content(), "X");
    assert!(!messages[1].is_error());
    assert_eq!(messages[1].sources(), Some(&[Source::new("A", 0.92)][..]));

    let mut expanded = ExpandedSources::default();
    let rows = transcript(&snapshot, &expanded);
    let TranscriptRow::Answer(row) = &rows[1] else {
        panic!("expected an answer row");
    };
    let panel = row.sources.as_ref().expect("sources panel");
    assert_eq!(panel.label(), "1 source used");
    assert!(!panel.expanded);

    expanded.toggle(messages[1].id());
    let rows = transcript(&snapshot, &expanded);
    let TranscriptRow::Answer(row) = &rows[1] else {
        panic!("expected an answer row");
    };
    let chips = &row.sources.as_ref().unwrap().chips;
    assert_eq!(chips.len(), 1);
    assert_eq!(chips[0].to_string(), "92% A");
}

#[tokio::test]
async fn server_error_becomes_apology() {
    let session = SharedSession::new();
    let backend = ScriptedBackend::new(session.clone(), vec![server_error()]);
    let dispatcher = QueryDispatcher::new(session.clone(), backend.clone());

    let settlement = dispatcher.send("What is the grading policy?").await;
    assert!(matches!(settlement, Some(Settlement::Failed(_))));
    assert_eq!(*backend.loading_at_call.borrow(), vec![true]);

    let snapshot = session.snapshot();
    assert!(!snapshot.is_loading());
    let reply = &snapshot.messages()[1];
    assert!(reply.is_error());
    assert_eq!(reply.content(), FAILURE_APOLOGY);
    assert!(reply.sources().is_none());

    let rows = transcript(&snapshot, &ExpandedSources::default());
    assert!(matches!(rows[1], TranscriptRow::Failure(_)));
    assert!(!rows.iter().any(|r| matches!(r, TranscriptRow::Answer(_))));
}

#[tokio::test]
async fn blank_input_issues_no_request() {
    let session = SharedSession::new();
    let backend = ScriptedBackend::new(session.clone(), Vec::new());
    let dispatcher = QueryDispatcher::new(session.clone(), backend.clone());

    for blank in ["", "   ", "\n\t "] {
        assert_eq!(dispatcher.send(blank).await, None);
    }
    assert_eq!(backend.calls(), 0);
    assert!(session.snapshot().is_empty());
}

#[tokio::test]
async fn only_one_query_in_flight() {
    let session = SharedSession::new();
    let (backend, release) = GatedBackend::new();
    let dispatcher = QueryDispatcher::new(session.clone(), backend.clone());

    let (first, ()) = tokio::join!(dispatcher.send("first question"), async {
        assert!(session.view(|s| s.is_loading()));
        assert_eq!(dispatcher.send("second question").await, None);
        assert_eq!(session.view(|s| s.messages().len()), 1);
        release
            .send(answer("done", Vec::new()))
            .expect("dispatcher is waiting");
    });

    assert!(matches!(first, Some(Settlement::Answered(_))));
    assert_eq!(*backend.calls.borrow(), 1);
    let snapshot = session.snapshot();
    assert_eq!(snapshot.messages().len(), 2);
    assert!(!snapshot.is_loading());
}

#[tokio::test]
async fn reset_during_flight_discards_late_result() {
    let session = SharedSession::new();
    let (backend, release) = GatedBackend::new();
    let dispatcher = QueryDispatcher::new(session.clone(), backend);

    let (settlement, ()) = tokio::join!(dispatcher.send("before reset"), async {
        dispatcher.reset();
        assert!(session.snapshot().is_empty());
        assert!(!session.view(|s| s.is_loading()));
        release
            .send(answer("stale", Vec::new()))
            .expect("dispatcher is waiting");
    });

    assert_eq!(settlement, Some(Settlement::Discarded));
    let snapshot = session.snapshot();
    assert!(snapshot.is_empty());
    assert!(!snapshot.is_loading());
}

#[tokio::test]
async fn conversation_alternates_turns() {
    let session = SharedSession::new();
    let backend = ScriptedBackend::new(
        session.clone(),
        vec![
            answer("one", Vec::new()),
            server_error(),
            answer("three", vec![Source::new("c", 0.3), Source::new("d", 0.8)]),
        ],
    );
    let dispatcher = QueryDispatcher::new(session.clone(), backend);

    for question in ["q1", "q2", "q3"] {
        assert!(dispatcher.send(question).await.is_some());
    }

    let snapshot = session.snapshot();
    let roles: Vec<_> = snapshot.messages().iter().map(|m| m.role()).collect();
    assert_eq!(
        roles,
        vec![
            Role::User,
            Role::Assistant,
            Role::User,
            Role::Assistant,
            Role::User,
            Role::Assistant
        ]
    );
    assert!(snapshot.messages()[3].is_error());
    assert!(!snapshot.messages()[1].is_error());

    let ids: Vec<_> = snapshot.messages().iter().map(|m| m.id()).collect();
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[tokio::test]
async fn suggestion_matches_typed_question() {
    let question = SUGGESTED_QUESTIONS[0];

    let picked = SharedSession::new();
    let backend = ScriptedBackend::new(picked.clone(), vec![answer("ok", Vec::new())]);
    QueryDispatcher::new(picked.clone(), backend.clone())
        .send(question)
        .await;

    let typed = SharedSession::new();
    let typed_backend = ScriptedBackend::new(typed.clone(), vec![answer("ok", Vec::new())]);
    QueryDispatcher::new(typed.clone(), typed_backend.clone())
        .send(&format!("{question}\n"))
        .await;

    assert_eq!(
        picked.snapshot().messages()[0].content(),
        typed.snapshot().messages()[0].content()
    );
    assert_eq!(*backend.requests.borrow(), *typed_backend.requests.borrow());
}

#[tokio::test]
async fn clear_brings_back_suggestions() {
    let session = SharedSession::new();
    let backend = ScriptedBackend::new(session.clone(), vec![answer("ok", Vec::new())]);
    let dispatcher = QueryDispatcher::new(session.clone(), backend);

    dispatcher.send("hello").await;
    assert!(!placement_assistant::suggestions::show_suggestions(
        &session.snapshot()
    ));

    dispatcher.reset();
    let snapshot = session.snapshot();
    assert!(snapshot.is_empty());
    assert!(!snapshot.is_loading());
    assert!(placement_assistant::suggestions::show_suggestions(&snapshot));
}
