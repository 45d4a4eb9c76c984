use anyhow;

use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use folio_common::theme::PreferenceStore;

// values are stored raw rather than json-encoded so that a stored theme reads
// back as plain "dark" / "light"
pub fn set_local_storage(key: &str, value: &str) -> () {
    LocalStorage::raw()
        .set_item(key, value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err:?}")))
}

pub fn get_local_storage(key: &str) -> anyhow::Result<Option<String>> {
    LocalStorage::raw().get_item(key).map_err(|err| {
        console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalPreferenceStore;

impl PreferenceStore for LocalPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        set_local_storage(key, value)
    }
}
