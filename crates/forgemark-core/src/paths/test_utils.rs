//! Helpers for tests that point the data root somewhere else.

use std::env;
use std::ffi::OsString;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Serializes every test that touches `FORGEMARK_DATA_DIR`.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Take `ENV_LOCK`, recovering it if a previous test panicked while holding it.
pub fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Sets a variable for the lifetime of the guard, then puts back whatever was there.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<OsString>,
}

impl EnvVarGuard {
    #[allow(unsafe_code)]
    pub fn set(key: &'static str, value: impl AsRef<Path>) -> Self {
        let previous = env::var_os(key);
        // Callers hold ENV_LOCK, so no other test thread reads the environment.
        unsafe { env::set_var(key, value.as_ref()) };
        Self { key, previous }
    }
}

impl Drop for EnvVarGuard {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        match self.previous.take() {
            Some(value) => unsafe { env::set_var(self.key, value) },
            None => unsafe { env::remove_var(self.key) },
        }
    }
}
