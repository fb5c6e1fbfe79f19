//! Persistence: the flat snapshot format, save slots and autosaving sessions.

mod session;
mod snapshot;
mod store;

pub use session::Session;
pub use snapshot::{PlayerSnapshot, Snapshot};
pub use store::{MemoryStore, SnapshotStore};
