use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum NotemarkError {
    #[error("Note not found: {0}")]
    NoteNotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

/// Failures reported by an [`AuthProvider`](crate::auth::AuthProvider).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("an account already exists for {0}")]
    AccountExists(String),

    #[error("no account for {0}")]
    UnknownAccount(String),

    #[error("not signed in")]
    NotSignedIn,

    #[error("provider failure: {0}")]
    Provider(String),
}

pub type Result<T> = std::result::Result<T, NotemarkError>;
