//! Message store: the append-only conversation plus the in-flight flag.

use crate::types::{Message, MessageId};
use std::cell::RefCell;
use std::rc::Rc;

/// Identifies one lifetime of the conversation; bumped by every `clear`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Generation(u64);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    messages: Vec<Message>,
    loading: bool,
    generation: Generation,
    last_id: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Ids keep counting across `clear` so render keys never repeat.
    pub fn next_id(&mut self) -> MessageId {
        self.last_id += 1;
        MessageId(self.last_id)
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.loading = false;
        self.generation.0 += 1;
    }
}

/// Handle through which the session is read and mutated.
///
/// Each `update` is a single atomic step from a reader's point of view.
pub trait SessionStore {
    fn view<R>(&self, f: impl FnOnce(&Session) -> R) -> R;
    fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R;
}

/// Single-threaded shared session, used outside of a component tree.
#[derive(Clone, Debug, Default)]
pub struct SharedSession(Rc<RefCell<Session>>);

impl SharedSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Session {
        self.0.borrow().clone()
    }
}

impl SessionStore for SharedSession {
    fn view<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        f(&self.0.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }
}

#[cfg(feature = "dioxus")]
impl SessionStore for dioxus::prelude::Signal<Session> {
    fn view<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        use dioxus::prelude::Readable;
        self.with(f)
    }

    fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        use dioxus::prelude::Writable;
        let mut signal = *self;
        signal.with_mut(f)
    }
}
