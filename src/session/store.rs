use std::{collections::HashMap, sync::Arc};

use parking_lot::Mutex;

use crate::{
    foundation::{
        core::{ChatId, UserId},
        error::{CartelloError, CartelloResult},
    },
    session::model::Session,
};

/// Handle to one user's session. All mutations for that user serialize on
/// this mutex, so two concurrent events can never race on the same session
/// or its scratch files.
pub type SessionHandle = Arc<Mutex<Session>>;

/// Holds at most one live session per user id.
///
/// The map lock is held only for lookup, insert and remove; renders and
/// other long operations run under the per-session mutex instead, so
/// cross-user events proceed in parallel.
#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<UserId, SessionHandle>>,
}

impl SessionStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for `user`. A live session for the same user id
    /// rejects the request instead of queueing a second one.
    pub fn open(&self, user: UserId, chat: ChatId) -> CartelloResult<SessionHandle> {
        let mut sessions = self.sessions.lock();
        if sessions.contains_key(&user) {
            return Err(CartelloError::SessionConflict);
        }
        let handle = Arc::new(Mutex::new(Session::new(user, chat)));
        sessions.insert(user, handle.clone());
        Ok(handle)
    }

    /// The user's live session, if any.
    pub fn get(&self, user: UserId) -> Option<SessionHandle> {
        self.sessions.lock().get(&user).cloned()
    }

    /// Whether the user currently has a live session.
    pub fn is_active(&self, user: UserId) -> bool {
        self.sessions.lock().contains_key(&user)
    }

    /// Drop the user's session. Idempotent: removing an absent session is
    /// not an error. An event still holding the session handle finishes its
    /// work on the detached session harmlessly.
    pub fn remove(&self, user: UserId) {
        self.sessions.lock().remove(&user);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/store.rs"]
mod tests;
