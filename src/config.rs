use std::path::PathBuf;

pub const SEED_VAR: &str = "BERLIN_PRACTICE_SEED";
pub const SHUFFLE_OPTIONS_VAR: &str = "BERLIN_PRACTICE_SHUFFLE_OPTIONS";
pub const LOG_VAR: &str = "BERLIN_PRACTICE_LOG";
pub const DEFAULT_LOG_FILE: &str = "practice_debug.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeConfig {
    /// Fixed seed for reproducible shuffles; entropy when unset.
    pub seed: Option<u64>,
    pub shuffle_options: bool,
    /// None disables the debug log.
    pub log_path: Option<PathBuf>,
    /// Values that could not be parsed, reported once the logger is up.
    pub warnings: Vec<String>,
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            shuffle_options: false,
            log_path: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            warnings: Vec::new(),
        }
    }
}

impl PracticeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => config
                    .warnings
                    .push(format!("ignoring {}={:?}: not a u64", SEED_VAR, raw)),
            }
        }

        if let Some(raw) = lookup(SHUFFLE_OPTIONS_VAR) {
            match parse_flag(&raw) {
                Some(flag) => config.shuffle_options = flag,
                None => config
                    .warnings
                    .push(format!("ignoring {}={:?}: not a boolean", SHUFFLE_OPTIONS_VAR, raw)),
            }
        }

        if let Some(raw) = lookup(LOG_VAR) {
            let raw = raw.trim();
            config.log_path = if raw.is_empty() || raw.eq_ignore_ascii_case("off") {
                None
            } else {
                Some(PathBuf::from(raw))
            };
        }

        config
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
