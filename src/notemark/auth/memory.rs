use super::{AuthProvider, SessionListener};
use crate::error::{AuthError, Result};
use crate::model::UserId;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::sync::mpsc::{self, Sender};
use uuid::Uuid;

/// Stand-in identity service for tests. Passwords are kept in plain memory.
#[derive(Default)]
pub struct InMemoryAuth {
    accounts: RefCell<HashMap<String, (String, UserId)>>,
    current: RefCell<Option<UserId>>,
    listeners: RefCell<Vec<Sender<Option<UserId>>>>,
    fail_sign_out: Cell<bool>,
}

impl InMemoryAuth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_sign_out(&self, fail: bool) {
        self.fail_sign_out.set(fail);
    }

    fn set_current(&self, user: Option<UserId>) {
        *self.current.borrow_mut() = user.clone();
        self.listeners
            .borrow_mut()
            .retain(|tx| tx.send(user.clone()).is_ok());
    }
}

fn validate(email: &str, password: &str) -> Result<()> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AuthError::InvalidCredentials.into());
    }
    Ok(())
}

impl AuthProvider for InMemoryAuth {
    fn sign_in(&self, email: &str, password: &str) -> Result<UserId> {
        validate(email, password)?;
        let uid = {
            let accounts = self.accounts.borrow();
            let (stored, uid) = accounts
                .get(email)
                .ok_or_else(|| AuthError::UnknownAccount(email.to_string()))?;
            if stored != password {
                return Err(AuthError::InvalidCredentials.into());
            }
            uid.clone()
        };
        self.set_current(Some(uid.clone()));
        Ok(uid)
    }

    fn sign_up(&self, email: &str, password: &str) -> Result<UserId> {
        validate(email, password)?;
        let uid = {
            let mut accounts = self.accounts.borrow_mut();
            if accounts.contains_key(email) {
                return Err(AuthError::AccountExists(email.to_string()).into());
            }
            let uid = UserId::new(Uuid::new_v4().to_string());
            accounts.insert(email.to_string(), (password.to_string(), uid.clone()));
            uid
        };
        self.set_current(Some(uid.clone()));
        Ok(uid)
    }

    fn sign_out(&self) -> Result<()> {
        if self.fail_sign_out.get() {
            return Err(AuthError::Provider("sign out rejected".to_string()).into());
        }
        self.set_current(None);
        Ok(())
    }

    fn current_user(&self) -> Option<UserId> {
        self.current.borrow().clone()
    }

    fn on_session_change(&self) -> SessionListener {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(self.current_user());
        self.listeners.borrow_mut().push(tx);
        SessionListener::new(rx)
    }
}
