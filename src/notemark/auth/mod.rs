//! # Auth Provider
//!
//! Accounts live in an external identity service. The crate only needs to
//! know who is signed in, so [`AuthProvider`] is the narrow interface over
//! that service and [`Session`] is the local view of its state.
//!
//! Session changes arrive the same way note snapshots do: through a queue
//! ([`SessionListener`]) the caller drains, never through a callback that
//! runs inside the provider.

use crate::error::{AuthError, NotemarkError, Result};
use crate::model::UserId;
use std::sync::mpsc::Receiver;

#[cfg(any(test, feature = "test_utils"))]
pub mod memory;

pub trait AuthProvider {
    fn sign_in(&self, email: &str, password: &str) -> Result<UserId>;

    /// Create an account and sign into it.
    fn sign_up(&self, email: &str, password: &str) -> Result<UserId>;

    fn sign_out(&self) -> Result<()>;

    fn current_user(&self) -> Option<UserId>;

    /// Queue of session states; the current one is queued first.
    fn on_session_change(&self) -> SessionListener;
}

pub struct SessionListener {
    receiver: Receiver<Option<UserId>>,
}

impl SessionListener {
    pub fn new(receiver: Receiver<Option<UserId>>) -> Self {
        Self { receiver }
    }

    pub fn try_next(&self) -> Option<Option<UserId>> {
        self.receiver.try_recv().ok()
    }
}

/// Who is signed in, as last reported by the provider.
#[derive(Default)]
pub struct Session {
    user: Option<UserId>,
    listener: Option<SessionListener>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start following `provider`. Call [`Session::poll`] to pick up changes.
    pub fn listen<P: AuthProvider + ?Sized>(&mut self, provider: &P) {
        self.listener = Some(provider.on_session_change());
        self.poll();
    }

    /// Apply queued session changes. Returns whether the user changed.
    pub fn poll(&mut self) -> bool {
        let Some(listener) = &self.listener else {
            return false;
        };
        let before = self.user.clone();
        while let Some(state) = listener.try_next() {
            self.user = state;
        }
        if before != self.user {
            tracing::debug!(user = ?self.user, "session changed");
            true
        } else {
            false
        }
    }

    pub fn user(&self) -> Option<&UserId> {
        self.user.as_ref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.user.is_none()
    }

    /// The signed-in user, or [`AuthError::NotSignedIn`].
    pub fn require_user(&self) -> Result<&UserId> {
        self.user
            .as_ref()
            .ok_or(NotemarkError::Auth(AuthError::NotSignedIn))
    }

    /// Sign out through `provider`. The local state is cleared even when
    /// the provider reports a failure; the failure is logged and returned.
    pub fn sign_out<P: AuthProvider + ?Sized>(&mut self, provider: &P) -> Result<()> {
        let outcome = provider.sign_out();
        if let Err(e) = &outcome {
            tracing::warn!(error = %e, "sign out failed");
        }
        self.user = None;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::memory::InMemoryAuth;
    use super::*;

    #[test]
    fn session_starts_anonymous() {
        let session = Session::new();
        assert!(session.is_anonymous());
        assert!(matches!(
            session.require_user(),
            Err(NotemarkError::Auth(AuthError::NotSignedIn))
        ));
    }

    #[test]
    fn session_follows_provider() {
        let auth = InMemoryAuth::new();
        let mut session = Session::new();
        session.listen(&auth);
        assert!(session.is_anonymous());

        let uid = auth.sign_up("ann@example.com", "secret1").unwrap();
        assert!(session.poll());
        assert_eq!(session.user(), Some(&uid));

        auth.sign_out().unwrap();
        assert!(session.poll());
        assert!(session.is_anonymous());
        assert!(!session.poll());
    }

    #[test]
    fn listen_picks_up_existing_session() {
        let auth = InMemoryAuth::new();
        let uid = auth.sign_up("ann@example.com", "secret1").unwrap();

        let mut session = Session::new();
        session.listen(&auth);
        assert_eq!(session.user(), Some(&uid));
    }

    #[test]
    fn failed_sign_out_still_clears_local_state() {
        let auth = InMemoryAuth::new();
        auth.sign_up("ann@example.com", "secret1").unwrap();
        let mut session = Session::new();
        session.listen(&auth);

        auth.set_fail_sign_out(true);
        assert!(session.sign_out(&auth).is_err());
        assert!(session.is_anonymous());
    }
}
