use crate::utils::error::{ImportError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML settings file. Everything in it is optional; CLI flags take
/// precedence over file values, and built-in defaults fill the rest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub source: Option<SourceSettings>,
    pub store: Option<StoreSettings>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceSettings {
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSettings {
    pub path: Option<String>,
}

impl Settings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);
        toml::from_str(&processed)
            .map_err(|e| ImportError::config("settings", format!("TOML parsing error: {}", e)))
    }

    pub fn timeout_seconds(&self) -> Option<u64> {
        self.source.as_ref().and_then(|s| s.timeout_seconds)
    }

    pub fn store_path(&self) -> Option<&str> {
        self.store.as_ref().and_then(|s| s.path.as_deref())
    }
}

/// Replaces `${VAR_NAME}` placeholders with environment values. Unset
/// variables are left as-is so the error surfaces where the value is used.
fn substitute_env_vars(content: &str) -> String {
    use regex::Regex;
    let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}
