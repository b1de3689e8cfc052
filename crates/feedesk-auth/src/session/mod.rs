//! The process-wide session: an observable token slot backed by durable storage.

pub mod observable;
pub mod storage;
pub mod store;

pub use observable::{Observable, Subscription};
pub use storage::{FileTokenStorage, MemoryTokenStorage};
pub use store::SessionStore;
