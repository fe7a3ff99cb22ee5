//! Credential loading.
//!
//! Lookup order for each variable:
//! 1. The process environment
//! 2. `.env` in the current directory or a parent
//! 3. `~/.scriberc`
//!
//! Dotfiles are read, never exported into the process environment.

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::llm::Provider;

/// Name of the project-local dotenv file.
pub const ENV_FILE_NAME: &str = ".env";

/// Name of the per-user dotfile in the home directory.
pub const DOTFILE_NAME: &str = ".scriberc";

/// Resolved credentials and endpoints for every supported provider.
///
/// Built once at startup and passed by reference to whatever needs it.
#[derive(Debug, Clone, Default)]
pub struct Config {
    api_keys: HashMap<Provider, String>,
    base_urls: HashMap<Provider, String>,
}

impl Config {
    /// Read the environment, falling back to `.env` and `~/.scriberc`.
    pub fn load() -> Result<Self, ConfigError> {
        let env_file = env::current_dir()
            .ok()
            .and_then(|dir| find_env_file(&dir));
        Self::load_with(env_file.as_deref(), dotfile_path().as_deref())
    }

    /// Like [`Config::load`], with explicit dotfile locations.
    ///
    /// Missing files are skipped. Lines that do not parse are logged and
    /// skipped; only I/O failures are errors.
    pub fn load_with(env_file: Option<&Path>, dotfile: Option<&Path>) -> Result<Self, ConfigError> {
        let mut file_vars = HashMap::new();
        for path in [env_file, dotfile].into_iter().flatten() {
            if path.is_file() {
                read_file(path, &mut file_vars)?;
            }
        }

        Ok(Self::from_lookup(|name| {
            env::var(name).ok().or_else(|| file_vars.get(name).cloned())
        }))
    }

    /// Read credentials from the process environment only.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        for provider in Provider::ALL {
            if let Some(key) = get(provider.api_key_var()) {
                config.api_keys.insert(provider, key);
            }
            if let Some(url) = provider.base_url_var().and_then(get) {
                config.base_urls.insert(provider, url);
            }
        }
        config
    }

    /// Set an API key directly.
    pub fn with_api_key(mut self, provider: Provider, key: impl Into<String>) -> Self {
        self.api_keys.insert(provider, key.into());
        self
    }

    /// Override a provider's endpoint.
    pub fn with_base_url(mut self, provider: Provider, url: impl Into<String>) -> Self {
        self.base_urls.insert(provider, url.into());
        self
    }

    /// The API key for `provider`, or `MissingCredential`.
    pub fn api_key(&self, provider: Provider) -> Result<&str, ConfigError> {
        self.api_keys
            .get(&provider)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::MissingCredential {
                provider: provider.to_string(),
                env_var: provider.api_key_var(),
            })
    }

    /// The configured endpoint base, falling back to the provider default.
    pub fn base_url(&self, provider: Provider) -> &str {
        self.base_urls
            .get(&provider)
            .map(String::as_str)
            .unwrap_or_else(|| provider.default_base_url())
    }
}

/// Path of the per-user dotfile, if a home directory is known.
pub fn dotfile_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DOTFILE_NAME))
}

/// Nearest `.env` file in `start` or one of its parents.
pub fn find_env_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(ENV_FILE_NAME))
        .find(|path| path.is_file())
}

/// Add the assignments in `path` to `vars`. Earlier values win.
fn read_file(path: &Path, vars: &mut HashMap<String, String>) -> Result<(), ConfigError> {
    let failed = |source| ConfigError::DotfileFailed {
        path: path.to_path_buf(),
        source,
    };

    let mut loaded = 0usize;
    for entry in dotenvy::from_path_iter(path).map_err(failed)? {
        match entry {
            Ok((key, value)) => {
                vars.entry(key).or_insert(value);
                loaded += 1;
            }
            Err(dotenvy::Error::Io(e)) => return Err(failed(dotenvy::Error::Io(e))),
            Err(e) => warn!("Skipping line in {}: {}", path.display(), e),
        }
    }

    debug!("Loaded {} variables from {}", loaded, path.display());
    Ok(())
}
