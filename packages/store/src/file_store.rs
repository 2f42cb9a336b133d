//! # Filesystem-backed token store
//!
//! [`FileStore`] is a [`TokenStore`] implementation that keeps one file per key
//! under a base directory. Native builds use it so a session survives an app
//! restart, mirroring what `localStorage` gives the browser build.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <key>        # raw value, e.g. the bearer token under `jwt`
//! ```
//!
//! Use [`dirs::data_dir()`] joined with `insureportal` for a platform-appropriate
//! base directory.

use std::path::PathBuf;

use crate::token::TokenStore;

/// Filesystem-backed TokenStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        // Keys are flat names; strip separators so a key can't escape the base.
        let flat: String = key
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        self.base.join(flat)
    }
}

impl TokenStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.key_path(key), value);
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.key_path(key));
    }
}
