//! Client configuration.
//!
//! The pages carry settings as `<meta name="rede:KEY" content="...">`
//! tags. Missing keys use defaults, bad values log a warning and fall back.

use std::{fmt::Display, str::FromStr};

use log::{debug, warn, LevelFilter};

pub const META_PREFIX: &str = "rede:";

const DEFAULT_POST_FADE_MS: u32 = 400;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// prefix for every endpoint path, empty for same origin
    pub api_base: String,
    /// fade before a deleted post leaves the page, 0 removes it at once
    pub post_fade_ms: u32,
    /// navigate home after a post edit instead of staying on the page
    pub edit_post_redirect: bool,
    pub log_level: LevelFilter,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            post_fade_ms: DEFAULT_POST_FADE_MS,
            edit_post_redirect: false,
            log_level: LevelFilter::Info,
        }
    }
}

impl ClientConfig {
    /// Builds the config from a key lookup (keys without the meta prefix).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            api_base: lookup("api-base").unwrap_or(defaults.api_base),
            post_fade_ms: try_load(&lookup, "post-fade-ms", defaults.post_fade_ms),
            edit_post_redirect: try_load(&lookup, "edit-post-redirect", defaults.edit_post_redirect),
            log_level: try_load(&lookup, "log-level", defaults.log_level),
        }
    }
}

fn try_load<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        debug!("{key} not set, using default: {default}");
        return default;
    };

    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.post_fade_ms, 400);
    }

    #[test]
    fn test_values_are_parsed() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("api-base", "https://rede.example"),
            ("post-fade-ms", " 0 "),
            ("edit-post-redirect", "true"),
            ("log-level", "debug"),
        ]));
        assert_eq!(config.api_base, "https://rede.example");
        assert_eq!(config.post_fade_ms, 0);
        assert!(config.edit_post_redirect);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("post-fade-ms", "slow"),
            ("edit-post-redirect", "sim"),
            ("log-level", "loud"),
        ]));
        assert_eq!(config.post_fade_ms, 400);
        assert!(!config.edit_post_redirect);
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
