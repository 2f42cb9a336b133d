//! Platform-specific pieces: where the session token and the config file
//! live, and how to sleep.
//!
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageStore`]
//! - **WASM without `web`**: in-memory, lost on reload
//! - **Desktop / Mobile** (native): filesystem via [`store::FileStore`] under
//!   `<data_dir>/insureportal/`, config read from
//!   `<config_dir>/insureportal/insureportal.toml`

use std::time::Duration;

use store::ClientConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

/// Create the platform-appropriate token store.
pub fn make_token_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("insureportal");
        store::FileStore::new(base)
    }
}

/// Load the client configuration. The web build has no config file and uses
/// the defaults.
pub fn load_config() -> ClientConfig {
    #[cfg(target_arch = "wasm32")]
    {
        ClientConfig::default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        match dirs::config_dir() {
            Some(dir) => load_config_from(&dir.join("insureportal").join(ClientConfig::filename())),
            None => ClientConfig::default(),
        }
    }
}

/// Read `path` as an `insureportal.toml`. A missing file is the default
/// config; an unreadable or invalid one is logged and also the default.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_config_from(path: &std::path::Path) -> ClientConfig {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return ClientConfig::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), "Could not read config: {}", e);
            return ClientConfig::default();
        }
    };
    ClientConfig::from_toml(&text).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), "Invalid config, using defaults: {}", e);
        ClientConfig::default()
    })
}

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
