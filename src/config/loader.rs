//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PruneError, PruneResult};

use super::types::{Config, Verbosity};

pub const STEP_DELAY_ENV: &str = "MODTRIM_STEP_DELAY_MS";
pub const VERBOSITY_ENV: &str = "MODTRIM_VERBOSITY";
pub const DESCRIPTOR_EXTENSION_ENV: &str = "MODTRIM_DESCRIPTOR_EXTENSION";

/// Non-fatal configuration problem surfaced to CLI users.
///
/// Loading runs before logging is set up, so problems are collected here and
/// reported by the caller instead of being logged on the spot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Key the config schema does not know
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },
    /// Config file that exists but could not be loaded; it was skipped
    SkippedFile { file: PathBuf, message: String },
    /// `MODTRIM_*` variable with a value that was ignored
    InvalidEnv { name: &'static str, value: String },
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "unknown config key '{}' in {}", key, file.display())?;
                if let Some(line) = line {
                    write!(f, ":{}", line)?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{}'?)", suggestion)?;
                }
                Ok(())
            }
            ConfigWarning::SkippedFile { file, message } => {
                write!(f, "ignoring config {}: {}", file.display(), message)
            }
            ConfigWarning::InvalidEnv { name, value } => {
                write!(f, "ignoring {}={:?}: invalid value", name, value)
            }
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PruneResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PruneError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults, then apply `MODTRIM_*`.
///
/// A config file that exists but fails to parse is skipped with a warning so
/// a broken user config never blocks a run.
pub fn load_or_default(project_root: Option<&Path>) -> (Config, Vec<ConfigWarning>) {
    let mut candidates = Vec::new();
    if let Some(root) = project_root {
        candidates.push(root.join(".modtrim/config.toml"));
    }
    if let Some(user_config_dir) = dirs_config_dir() {
        candidates.push(user_config_dir.join("modtrim/config.toml"));
    }

    let mut warnings = Vec::new();
    let mut loaded = None;
    for candidate in candidates {
        if !candidate.exists() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, unknown)) => {
                warnings.extend(unknown);
                loaded = Some(config);
                break;
            }
            Err(e) => warnings.push(ConfigWarning::SkippedFile {
                file: candidate,
                message: e.to_string(),
            }),
        }
    }

    let (config, env_warnings) = with_env_overrides(loaded.unwrap_or_default());
    warnings.extend(env_warnings);
    (config, warnings)
}

/// Apply environment variable overrides (MODTRIM_* prefix)
pub fn with_env_overrides(config: Config) -> (Config, Vec<ConfigWarning>) {
    apply_overrides(config, |name| std::env::var(name).ok())
}

pub(crate) fn apply_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> (Config, Vec<ConfigWarning>) {
    let mut warnings = Vec::new();
    let mut invalid = |name: &'static str, value: String| {
        warnings.push(ConfigWarning::InvalidEnv { name, value });
    };

    // MODTRIM_STEP_DELAY_MS
    if let Some(delay) = lookup(STEP_DELAY_ENV) {
        match delay.trim().parse::<u64>() {
            Ok(ms) => config.removal.step_delay_ms = ms,
            Err(_) => invalid(STEP_DELAY_ENV, delay),
        }
    }

    // MODTRIM_VERBOSITY
    if let Some(verbosity) = lookup(VERBOSITY_ENV) {
        match verbosity.trim().to_lowercase().as_str() {
            "quiet" => config.output.verbosity = Verbosity::Quiet,
            "normal" => config.output.verbosity = Verbosity::Normal,
            "verbose" => config.output.verbosity = Verbosity::Verbose,
            "debug" => config.output.verbosity = Verbosity::Debug,
            _ => invalid(VERBOSITY_ENV, verbosity),
        }
    }

    // MODTRIM_DESCRIPTOR_EXTENSION
    if let Some(ext) = lookup(DESCRIPTOR_EXTENSION_ENV) {
        let trimmed = ext.trim().trim_start_matches('.');
        if trimmed.is_empty() {
            invalid(DESCRIPTOR_EXTENSION_ENV, ext);
        } else {
            config.removal.descriptor_extension = trimmed.to_string();
        }
    }

    (config, warnings)
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "removal",
        "step_delay_ms",
        "descriptor_extension",
        "protection",
        "workspace_dirs",
        "workspace_extensions",
        "workspace_files",
        "output",
        "verbosity",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
