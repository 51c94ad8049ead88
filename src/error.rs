use crate::domain::{BoardId, ItemId, ListId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CardboardError>;

#[derive(Debug, Error)]
pub enum CardboardError {
    #[error("Board not found: {0}")]
    BoardNotFound(BoardId),

    #[error("List not found: {0}")]
    ListNotFound(ListId),

    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("User already exists: {0}")]
    UserExists(String),

    #[error("Invalid user name or password")]
    InvalidCredentials,

    #[error("No user is logged in")]
    NotLoggedIn,

    #[error("{0} name must not be empty")]
    EmptyName(&'static str),

    #[error("Invalid priority: {0}")]
    InvalidPriority(String),

    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    #[error("Invalid list color: {0}")]
    InvalidColor(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
