//! Autosaving session: an engine paired with a save slot.
//!
//! The slot is written after every accepted roll and emptied on reset,
//! so reopening a session resumes exactly where the last roll left it.
//! A roll that cannot be saved is undone.

use tracing::{debug, warn};

use super::store::SnapshotStore;
use crate::core::DiceSource;
use crate::error::{SessionError, SnapshotError};
use crate::rules::{GameEngine, MoveOutcome};

/// A game engine that persists itself.
#[derive(Debug)]
pub struct Session<S: SnapshotStore> {
    engine: GameEngine,
    store: S,
}

impl<S: SnapshotStore> Session<S> {
    /// Wrap `engine`, restoring it from `store` if the slot holds a save.
    ///
    /// A slot that fails to decode or restore is an error; the caller
    /// decides whether to clear it and start over.
    pub fn open(mut engine: GameEngine, store: S) -> Result<Self, SnapshotError> {
        if let Some(snapshot) = store.load()? {
            engine.restore(&snapshot)?;
        }
        Ok(Self { engine, store })
    }

    /// Get the engine.
    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Get the store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Roll and save. If the save fails the engine is left as it was
    /// before the roll.
    pub fn roll(&mut self, die: u8) -> Result<MoveOutcome, SessionError> {
        let before = self.engine.clone();
        let outcome = self.engine.roll(die)?;
        self.commit(before)?;
        Ok(outcome)
    }

    /// Roll from a die source and save. The die value drawn is not
    /// returned to the source if the save fails.
    pub fn roll_with<D: DiceSource + ?Sized>(&mut self, dice: &mut D) -> Result<MoveOutcome, SessionError> {
        let before = self.engine.clone();
        let outcome = self.engine.roll_with(dice)?;
        self.commit(before)?;
        Ok(outcome)
    }

    /// Reset the game and empty the slot.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.store.clear();
    }

    /// Split the session back into its parts.
    pub fn into_parts(self) -> (GameEngine, S) {
        (self.engine, self.store)
    }

    fn commit(&mut self, before: GameEngine) -> Result<(), SnapshotError> {
        if let Err(err) = self.store.save(&self.engine.snapshot()) {
            warn!(%err, "save failed, roll undone");
            self.engine = before;
            return Err(err);
        }
        debug!(turn = self.engine.state().turn_number(), "game saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedDice;
    use crate::persist::{MemoryStore, Snapshot};

    /// Slot that refuses every write.
    struct FullDisk;

    impl SnapshotStore for FullDisk {
        fn save(&mut self, _snapshot: &Snapshot) -> Result<(), SnapshotError> {
            Err(SnapshotError::Encode("disk full".into()))
        }

        fn load(&self) -> Result<Option<Snapshot>, SnapshotError> {
            Ok(None)
        }

        fn clear(&mut self) {}
    }

    #[test]
    fn test_open_empty_store_starts_fresh() {
        let session = Session::open(GameEngine::classic(), MemoryStore::new()).unwrap();
        assert_eq!(session.engine().snapshot(), GameEngine::classic().snapshot());
    }

    #[test]
    fn test_roll_saves() {
        let mut session = Session::open(GameEngine::classic(), MemoryStore::new()).unwrap();
        session.roll(4).unwrap();

        let saved = session.store().load().unwrap().unwrap();
        assert_eq!(saved.players[0].position, 14);
        assert_eq!(saved.active_player, 1);
    }

    #[test]
    fn test_rejected_roll_does_not_save() {
        let mut session = Session::open(GameEngine::classic(), MemoryStore::new()).unwrap();
        let err = session.roll(0).unwrap_err();

        assert!(matches!(err, SessionError::Roll(_)));
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_reset_clears_store() {
        let mut session = Session::open(GameEngine::classic(), MemoryStore::new()).unwrap();
        session.roll(3).unwrap();
        session.reset();

        assert!(session.store().is_empty());
        assert_eq!(session.engine().state().players()[0].position, 0);
    }

    #[test]
    fn test_failed_save_undoes_roll() {
        let mut session = Session::open(GameEngine::classic(), FullDisk).unwrap();

        assert_eq!(
            session.roll(4),
            Err(SessionError::Snapshot(SnapshotError::Encode("disk full".into())))
        );
        assert_eq!(session.engine().snapshot(), GameEngine::classic().snapshot());
        assert_eq!(session.engine().state().turn_number(), 0);
        assert!(session.engine().state().history().is_empty());

        let mut dice = ScriptedDice::new(vec![3]);
        assert!(matches!(session.roll_with(&mut dice), Err(SessionError::Snapshot(_))));
        assert_eq!(session.engine().current_player().id, crate::core::PlayerId::new(0));
        assert_eq!(session.engine().state().players()[0].position, 0);
    }
}
