//! # Token storage: the persistence seam for the client session
//!
//! [`TokenStore`] is a small synchronous key/value interface. The session layer
//! in the `api` crate only ever talks to this trait, so the browser build can
//! back it with `window.localStorage` ([`crate::LocalStorageStore`]), native
//! builds with files on disk ([`crate::FileStore`]), and tests with
//! [`crate::MemoryStore`].
//!
//! Writes never fail the caller. A backend that cannot persist a value simply
//! behaves as if the value was never stored.

/// Key/value storage for client-side session state.
pub trait TokenStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove `key`. Removing a missing key is a no-op.
    fn remove(&self, key: &str);
}

impl<T: TokenStore + ?Sized> TokenStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
