use crate::storage::{DARK_MODE_KEY, KeyValueStore};
use std::io;
use tracing::warn;

pub fn load_dark_mode(store: &dyn KeyValueStore) -> bool {
    match store.get(DARK_MODE_KEY) {
        Ok(Some(bytes)) => serde_json::from_slice(&bytes).unwrap_or_else(|err| {
            warn!("ignoring unreadable theme preference: {err}");
            false
        }),
        Ok(None) => false,
        Err(err) => {
            warn!("failed to read theme preference: {err}");
            false
        }
    }
}

pub fn store_dark_mode(store: &dyn KeyValueStore, dark_mode: bool) -> io::Result<()> {
    let payload = serde_json::to_vec(&dark_mode)?;
    store.set(DARK_MODE_KEY, &payload)
}
