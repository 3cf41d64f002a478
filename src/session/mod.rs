//! # Session Module
//!
//! Client-held authentication state:
//! - Session, user and role models
//! - Key/value client storage (file or memory)
//! - The persisted `SessionStore` shared by the API client and services

pub mod models;
pub mod storage;
pub mod store;


pub use models::{Role, Session, SessionUser};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
pub use store::{SessionStore, SESSION_STORAGE_KEY};
