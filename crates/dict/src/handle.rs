//! Process-wide dictionary slot with atomic hot-swap.
//!
//! Invariant: `current` is only ever replaced as a whole `Arc`, never mutated in place.
//! A reader that obtained an `Arc` keeps a consistent trie even while a reload runs, and
//! a failed reload leaves the previous dictionary active.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{Dictionary, DictionaryError, DictionaryPayload};

/// Lifecycle of the dictionary slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Unloaded,
    Loading,
    Loaded { version: String },
    LoadFailed,
}

#[derive(Debug)]
struct Slot {
    current: Option<Arc<Dictionary>>,
    state: LoadState,
    last_error: Option<DictionaryError>,
}

#[derive(Debug)]
pub struct DictionaryHandle {
    slot: RwLock<Slot>,
}

impl Default for DictionaryHandle {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: DictionaryHandle = DictionaryHandle::new();

impl DictionaryHandle {
    pub const fn new() -> Self {
        Self {
            slot: RwLock::new(Slot {
                current: None,
                state: LoadState::Unloaded,
                last_error: None,
            }),
        }
    }

    /// The process-wide handle.
    pub fn global() -> &'static DictionaryHandle {
        &GLOBAL
    }

    // The slot holds plain data, so a panic elsewhere cannot leave it inconsistent.
    fn read(&self) -> RwLockReadGuard<'_, Slot> {
        self.slot.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Slot> {
        self.slot.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Decode `payload` and make it the active dictionary.
    ///
    /// Decoding happens outside the lock. On failure the previous dictionary (if any)
    /// stays active and the error is kept in [`last_error`](Self::last_error).
    pub fn load(&self, payload: &DictionaryPayload) -> Result<Arc<Dictionary>, DictionaryError> {
        self.write().state = LoadState::Loading;

        match Dictionary::load(payload) {
            Ok(dictionary) => Ok(self.install(dictionary)),
            Err(err) => {
                let mut slot = self.write();
                slot.state = match &slot.current {
                    Some(active) => LoadState::Loaded {
                        version: active.version().to_string(),
                    },
                    None => LoadState::LoadFailed,
                };
                slot.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Make an already-built dictionary the active one.
    pub fn install(&self, dictionary: Dictionary) -> Arc<Dictionary> {
        let dictionary = Arc::new(dictionary);
        let mut slot = self.write();
        slot.state = LoadState::Loaded {
            version: dictionary.version().to_string(),
        };
        slot.current = Some(Arc::clone(&dictionary));
        slot.last_error = None;
        dictionary
    }

    /// The active dictionary, if one is loaded.
    pub fn current(&self) -> Option<Arc<Dictionary>> {
        self.read().current.clone()
    }

    pub fn state(&self) -> LoadState {
        self.read().state.clone()
    }

    /// Error of the most recent failed load, cleared by the next successful one.
    pub fn last_error(&self) -> Option<DictionaryError> {
        self.read().last_error.clone()
    }

    pub fn version(&self) -> Option<String> {
        self.read().current.as_ref().map(|d| d.version().to_string())
    }
}
