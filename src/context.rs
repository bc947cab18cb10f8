//! State directory resolution for docketpost.
//!
//! All state lives in one directory:
//!
//! ```text
//! .docketpost/
//!   config.yaml          optional configuration
//!   subscriptions.json   tracked cases
//!   events.ndjson        append-only event log
//!   dockets/             saved CourtListener docket records, `<id>.json`
//! ```
//!
//! The directory is chosen from, in order: an explicit `--state-dir`, the
//! `DOCKETPOST_HOME` environment variable, or `.docketpost` under the
//! current working directory.

use crate::error::{DocketPostError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Default state directory name under the working directory.
pub const DEFAULT_STATE_DIR: &str = ".docketpost";

/// Environment variable overriding the state directory.
pub const STATE_DIR_ENV: &str = "DOCKETPOST_HOME";

/// Resolved state paths. All paths are absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    pub state_dir: PathBuf,
}

impl AppContext {
    /// Resolve the state directory from an explicit path, the environment,
    /// or the current working directory.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            DocketPostError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        let from_env = env::var_os(STATE_DIR_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let state_dir = match (explicit, from_env) {
            (Some(dir), _) => dir.to_path_buf(),
            (None, Some(dir)) => dir,
            (None, None) => PathBuf::from(DEFAULT_STATE_DIR),
        };

        Ok(Self::at(cwd.join(state_dir)))
    }

    /// Context rooted at a known state directory.
    pub fn at(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.state_dir.join("config.yaml")
    }

    pub fn subscriptions_path(&self) -> PathBuf {
        self.state_dir.join("subscriptions.json")
    }

    pub fn events_file(&self) -> PathBuf {
        self.state_dir.join("events.ndjson")
    }

    pub fn dockets_dir(&self) -> PathBuf {
        self.state_dir.join("dockets")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::DirGuard;
    use serial_test::serial;
    use tempfile::TempDir;

    /// Restores `DOCKETPOST_HOME` when dropped.
    struct EnvGuard(Option<std::ffi::OsString>);

    impl EnvGuard {
        fn set(value: Option<&Path>) -> Self {
            let previous = env::var_os(STATE_DIR_ENV);
            // SAFETY: tests touching the environment are #[serial].
            unsafe {
                match value {
                    Some(v) => env::set_var(STATE_DIR_ENV, v),
                    None => env::remove_var(STATE_DIR_ENV),
                }
            }
            Self(previous)
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            // SAFETY: see EnvGuard::set.
            unsafe {
                match &self.0 {
                    Some(v) => env::set_var(STATE_DIR_ENV, v),
                    None => env::remove_var(STATE_DIR_ENV),
                }
            }
        }
    }

    #[test]
    fn test_paths_under_state_dir() {
        let ctx = AppContext::at("/srv/docketpost");
        assert_eq!(ctx.config_path(), PathBuf::from("/srv/docketpost/config.yaml"));
        assert_eq!(
            ctx.subscriptions_path(),
            PathBuf::from("/srv/docketpost/subscriptions.json")
        );
        assert_eq!(ctx.events_file(), PathBuf::from("/srv/docketpost/events.ndjson"));
        assert_eq!(ctx.dockets_dir(), PathBuf::from("/srv/docketpost/dockets"));
    }

    #[test]
    #[serial]
    fn test_resolve_defaults_to_cwd() {
        let temp_dir = TempDir::new().unwrap();
        let _env = EnvGuard::set(None);
        let _cwd = DirGuard::new(temp_dir.path());

        let ctx = AppContext::resolve(None).unwrap();

        assert!(ctx.state_dir.ends_with(DEFAULT_STATE_DIR));
        assert!(ctx.state_dir.is_absolute());
    }

    #[test]
    #[serial]
    fn test_resolve_prefers_env_over_cwd() {
        let temp_dir = TempDir::new().unwrap();
        let home = temp_dir.path().join("home");
        let _env = EnvGuard::set(Some(&home));

        let ctx = AppContext::resolve(None).unwrap();

        assert_eq!(ctx.state_dir, home);
    }

    #[test]
    #[serial]
    fn test_resolve_prefers_explicit_over_env() {
        let temp_dir = TempDir::new().unwrap();
        let explicit = temp_dir.path().join("explicit");
        let _env = EnvGuard::set(Some(&temp_dir.path().join("env")));

        let ctx = AppContext::resolve(Some(&explicit)).unwrap();

        assert_eq!(ctx.state_dir, explicit);
    }
}
