// Session persistence module.
// Stores the login flag so it survives process restarts within one user session.

pub mod paths;
pub mod storage;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use storage::{FileSessionStorage, MemorySessionStorage, SessionStorage};

/// Storage key the persisted state lives under.
pub const TOKEN_KEY: &str = "token";

/// The subset of store state written to session storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    pub token: bool,
}

/// Read the persisted state. `None` when nothing has been stored yet.
pub fn restore(storage: &impl SessionStorage) -> Result<Option<PersistedState>> {
    match storage.get_item(TOKEN_KEY)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// Write the persisted state.
pub fn persist(storage: &impl SessionStorage, state: PersistedState) -> Result<()> {
    let json = serde_json::to_string(&state)?;
    storage.set_item(TOKEN_KEY, &json)
}
