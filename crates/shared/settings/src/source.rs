//! Environment snapshots read by the settings loader.
//!
//! An [`EnvSource`] is an immutable map of key/value pairs. It is built once
//! from the process environment, optionally layered on top of a `.env` file,
//! so the loader itself never touches global state.
//!
//! Precedence: process environment variables win over `.env` entries. The
//! file only fills in keys that are not already set.
//!
//! `.env` values go through `dotenvy` substitution: `$NAME` and `${NAME}` in
//! unquoted or double-quoted values are replaced, looking first at the real
//! process environment and then at earlier entries of the same file. This
//! happens even when explicit overrides are supplied. Values that contain a
//! literal `$` (API keys often do) must be single-quoted:
//!
//! ```text
//! GROQ_API_KEY='gsk_ab$cd12'
//! ```

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::constants::ENV_FILE_NAME;
use crate::error::{ConfigError, ConfigResult};

/// Immutable snapshot of configuration variables.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EnvSource {
    vars: HashMap<String, String>,
    env_file: Option<PathBuf>,
}

// Values are secrets more often than not; only keys are printed.
impl fmt::Debug for EnvSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.vars.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("EnvSource")
            .field("keys", &keys)
            .field("env_file", &self.env_file)
            .finish()
    }
}

impl EnvSource {
    /// Snapshot the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        Self::from_pairs(process_vars())
    }

    /// Build a snapshot from explicit pairs. Later duplicates win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            env_file: None,
        }
    }

    /// Read `path` as an env file and overlay the process environment on it.
    pub fn from_env_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        Self::from_env_file_with(path, process_vars())
    }

    /// Read `path` as an env file and overlay `overrides` on it.
    pub fn from_env_file_with<I, K, V>(path: impl AsRef<Path>, overrides: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let path = path.as_ref();
        let mut vars = read_env_file(path)?;
        tracing::debug!(path = %path.display(), entries = vars.len(), "Loaded env file");

        vars.extend(overrides.into_iter().map(|(k, v)| (k.into(), v.into())));

        Ok(Self {
            vars,
            env_file: Some(path.to_path_buf()),
        })
    }

    /// Snapshot the process environment, layered over the nearest `.env`
    /// in the working directory or one of its parents.
    ///
    /// A missing `.env` is not an error; a malformed one is.
    pub fn discover() -> ConfigResult<Self> {
        match std::env::current_dir() {
            Ok(dir) => Self::discover_from(dir, process_vars()),
            Err(e) => {
                tracing::debug!("Cannot resolve working directory ({}), skipping env file", e);
                Ok(Self::from_process())
            }
        }
    }

    /// Same as [`EnvSource::discover`], starting the search at `start` and
    /// using `overrides` in place of the process environment.
    pub fn discover_from<I, K, V>(start: impl AsRef<Path>, overrides: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        match find_env_file(start.as_ref()) {
            Some(path) => Self::from_env_file_with(path, overrides),
            None => {
                tracing::debug!("No {} file found, using process environment only", ENV_FILE_NAME);
                Ok(Self::from_pairs(overrides))
            }
        }
    }

    /// Raw value for `key`, including empty strings.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Value for `key`, treating empty and whitespace-only values as absent.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.trim().is_empty())
    }

    /// Env file this snapshot was layered on, if any.
    pub fn env_file(&self) -> Option<&Path> {
        self.env_file.as_deref()
    }
}

fn process_vars() -> impl Iterator<Item = (String, String)> {
    std::env::vars_os().filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
}

fn find_env_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(ENV_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

fn read_env_file(path: &Path) -> ConfigResult<HashMap<String, String>> {
    let iter = dotenvy::from_path_iter(path).map_err(|e| ConfigError::env_file(path, e))?;

    iter.map(|item| item.map_err(|e| ConfigError::env_file(path, e)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use uuid::Uuid;

    use super::*;

    /// Scratch directory removed on drop
    struct ScratchDir(PathBuf);

    impl ScratchDir {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!("settings-source-{}", Uuid::new_v4()));
            fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }

        fn write(&self, name: &str, contents: &str) -> PathBuf {
            let path = self.0.join(name);
            fs::write(&path, contents).unwrap();
            path
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    const NO_OVERRIDES: [(&str, &str); 0] = [];

    #[test]
    fn test_from_pairs_lookup() {
        let source = EnvSource::from_pairs([("A", "1"), ("B", "")]);

        assert_eq!(source.get("A"), Some("1"));
        assert_eq!(source.get("B"), Some(""));
        assert_eq!(source.get("C"), None);
        assert!(source.env_file().is_none());
    }

    #[test]
    fn test_non_empty_filters_blank_values() {
        let source = EnvSource::from_pairs([("EMPTY", ""), ("BLANK", "   "), ("SET", "x")]);

        assert_eq!(source.non_empty("EMPTY"), None);
        assert_eq!(source.non_empty("BLANK"), None);
        assert_eq!(source.non_empty("SET"), Some("x"));
    }

    #[test]
    fn test_env_file_entries_are_read() {
        let dir = ScratchDir::new();
        let path = dir.write(".env", "# comment\nAWS_REGION=eu-west-1\nDEBUG=\"true\"\n");

        let source = EnvSource::from_env_file_with(&path, NO_OVERRIDES).unwrap();

        assert_eq!(source.get("AWS_REGION"), Some("eu-west-1"));
        assert_eq!(source.get("DEBUG"), Some("true"));
        assert_eq!(source.env_file(), Some(path.as_path()));
    }

    #[test]
    fn test_process_environment_wins_over_env_file() {
        let dir = ScratchDir::new();
        let path = dir.write(".env", "AWS_REGION=eu-west-1\nAPP_ENV=staging\n");

        let source =
            EnvSource::from_env_file_with(&path, [("AWS_REGION", "ap-south-1")]).unwrap();

        assert_eq!(source.get("AWS_REGION"), Some("ap-south-1"));
        assert_eq!(source.get("APP_ENV"), Some("staging"));
    }

    #[test]
    fn test_single_quoted_values_keep_dollar_signs() {
        let dir = ScratchDir::new();
        let path = dir.write(".env", "GROQ_API_KEY='gsk_ab$cd12'\n");

        let source = EnvSource::from_env_file_with(&path, NO_OVERRIDES).unwrap();

        assert_eq!(source.get("GROQ_API_KEY"), Some("gsk_ab$cd12"));
    }

    #[test]
    fn test_unquoted_values_are_substituted() {
        let dir = ScratchDir::new();
        // Unique name so nothing in the process environment shadows it
        let name = format!("SETTINGS_PREFIX_{}", Uuid::new_v4().simple());
        let contents = format!("{name}=expanded\nHUGGINGFACE_API_KEY=hf_${name}\n");
        let path = dir.write(".env", &contents);

        let source = EnvSource::from_env_file_with(&path, NO_OVERRIDES).unwrap();

        assert_eq!(source.get("HUGGINGFACE_API_KEY"), Some("hf_expanded"));
    }

    #[test]
    fn test_from_process_sees_cargo_variables() {
        let source = EnvSource::from_process();

        assert_eq!(source.get("CARGO_PKG_NAME"), Some("settings"));
        assert!(source.env_file().is_none());
    }

    #[test]
    fn test_malformed_env_file_is_an_error() {
        let dir = ScratchDir::new();
        let path = dir.write(".env", "BAD LINE WITH SPACES\n");

        let err = EnvSource::from_env_file_with(&path, NO_OVERRIDES).unwrap_err();

        assert!(matches!(err, ConfigError::EnvFile { .. }));
        assert_eq!(err.code(), "ENV_FILE_ERROR");
    }

    #[test]
    fn test_explicit_missing_env_file_is_an_error() {
        let dir = ScratchDir::new();

        let result = EnvSource::from_env_file_with(dir.0.join("absent.env"), NO_OVERRIDES);

        assert!(matches!(result, Err(ConfigError::EnvFile { .. })));
    }

    #[test]
    fn test_discover_finds_env_file_in_parent() {
        let dir = ScratchDir::new();
        let path = dir.write(".env", "GROQ_API_KEY=from-file\n");
        let nested = dir.0.join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let source = EnvSource::discover_from(&nested, NO_OVERRIDES).unwrap();

        assert_eq!(source.get("GROQ_API_KEY"), Some("from-file"));
        assert_eq!(source.env_file(), Some(path.as_path()));
    }

    #[test]
    fn test_discover_without_env_file_uses_overrides_only() {
        let dir = ScratchDir::new();

        let source = EnvSource::discover_from(&dir.0, [("APP_ENV", "production")]).unwrap();

        assert_eq!(source.get("APP_ENV"), Some("production"));
        assert!(source.env_file().is_none());
    }

    #[test]
    fn test_debug_output_hides_values() {
        let source = EnvSource::from_pairs([("GROQ_API_KEY", "gsk-secret-value")]);
        let printed = format!("{:?}", source);

        assert!(printed.contains("GROQ_API_KEY"));
        assert!(!printed.contains("gsk-secret-value"));
    }
}
