
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Clear every TITLER_* variable for the duration of a test
pub(crate) fn clean_env() -> Vec<EnvGuard> {
    [
        crate::ENV_CONFIG_DIR,
        crate::ENV_LOG_LEVEL,
        crate::ENV_LOG_COLORED,
        crate::ENV_LOG_FILE,
    ]
    .into_iter()
    .map(EnvGuard::remove)
    .collect()
}

/// Create a temp config directory and set TITLER_CONFIG_DIR
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let mut guards = clean_env();
    guards.retain(|guard| guard.key != crate::ENV_CONFIG_DIR);
    guards.push(EnvGuard::set(
        crate::ENV_CONFIG_DIR,
        temp.path().to_str().unwrap(),
    ));
    (temp, guards)
}
