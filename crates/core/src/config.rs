use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::settings::{BionicIntensity, ChunkSize, ReaderSettings};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

/// Parse a profiled env var, logging and ignoring values that don't parse.
fn profiled_env_parse<T: FromStr>(profile: &str, key: &str) -> Option<T> {
    let raw = profiled_env_opt(profile, key)?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable config value");
            None
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// ── Top-level config ──────────────────────────────────────────

/// Reader settings overridden from the environment.
///
/// Every field is optional so callers can layer it over file-based or default
/// settings with [`Config::apply_to`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub chunk_size: Option<ChunkSize>,
    pub bionic_intensity: Option<BionicIntensity>,
    pub bionic_enabled: Option<bool>,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `FOCUS_PROFILE`. When set (e.g. `WORK`), every key
    /// is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("FOCUS_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        let bionic_enabled = profiled_env_opt(p, "FOCUS_BIONIC_ENABLED").and_then(|raw| {
            let parsed = parse_bool(&raw);
            if parsed.is_none() {
                tracing::warn!(key = "FOCUS_BIONIC_ENABLED", value = %raw, "ignoring unparseable config value");
            }
            parsed
        });
        Self {
            profile: p.to_string(),
            chunk_size: profiled_env_parse(p, "FOCUS_CHUNK_SIZE"),
            bionic_intensity: profiled_env_parse(p, "FOCUS_BIONIC_INTENSITY"),
            bionic_enabled,
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Overlay the values present in the environment onto `base`.
    pub fn apply_to(&self, base: ReaderSettings) -> ReaderSettings {
        ReaderSettings {
            chunk_size: self.chunk_size.unwrap_or(base.chunk_size),
            bionic_intensity: self.bionic_intensity.unwrap_or(base.bionic_intensity),
            bionic_enabled: self.bionic_enabled.unwrap_or(base.bionic_enabled),
        }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::debug!(
            profile = self.profile_label(),
            chunk_size = ?self.chunk_size,
            bionic_intensity = ?self.bionic_intensity,
            bionic_enabled = ?self.bionic_enabled,
            "env config loaded"
        );
    }
}
