//! Snapshot storage.
//!
//! A `SnapshotStore` is a single save slot. Browsers back it with local
//! storage, native front ends with a file or a database row; the engine
//! only needs save, load and clear.

use super::snapshot::Snapshot;
use crate::error::SnapshotError;

/// A single persisted save slot.
pub trait SnapshotStore {
    /// Overwrite the slot.
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError>;

    /// Read the slot. `Ok(None)` when nothing has been saved.
    fn load(&self) -> Result<Option<Snapshot>, SnapshotError>;

    /// Empty the slot.
    fn clear(&mut self);
}

/// In-memory save slot holding encoded bytes.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Option<Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with raw bytes, e.g. from a previous process.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { slot: Some(bytes) }
    }

    /// Raw encoded contents of the slot.
    #[must_use]
    pub fn bytes(&self) -> Option<&[u8]> {
        self.slot.as_deref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}

impl SnapshotStore for MemoryStore {
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        self.slot = Some(snapshot.to_bytes()?);
        Ok(())
    }

    fn load(&self) -> Result<Option<Snapshot>, SnapshotError> {
        self.slot.as_deref().map(Snapshot::from_bytes).transpose()
    }

    fn clear(&mut self) {
        self.slot = None;
    }
}
