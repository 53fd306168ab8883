//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::value_objects::Track;

use super::types::{ColorMode, Config};

/// Config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "playdeploy.toml";

const USER_CONFIG_DIR: &str = "playdeploy";
const USER_CONFIG_FILE: &str = "config.toml";

/// Configuration file could not be used
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
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
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick the config file for this run
///
/// An explicit path is returned as-is even if missing, so that loading it
/// reports the problem. Otherwise the first existing candidate wins.
pub fn discover_config_path(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let project = cwd.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Some(project);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE))
        .filter(|path| path.is_file())
}

/// Load from the discovered config file or defaults, then apply env overrides
pub fn load_or_default(
    explicit: Option<&Path>,
    cwd: &Path,
) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let (config, warnings) = match discover_config_path(explicit, cwd) {
        Some(path) => load_with_warnings(&path)?,
        None => (Config::default(), Vec::new()),
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (PLAYDEPLOY_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable source
///
/// Values that do not parse are ignored with a warning.
pub fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // PLAYDEPLOY_TRACK
    if let Some(track) = get_env("PLAYDEPLOY_TRACK") {
        match track.parse::<Track>() {
            Ok(track) => config.deploy.track = track,
            Err(e) => warn!("ignoring PLAYDEPLOY_TRACK: {e}"),
        }
    }

    // PLAYDEPLOY_API_BASE_URL
    if let Some(url) = get_env("PLAYDEPLOY_API_BASE_URL").filter(|v| !v.trim().is_empty()) {
        config.api.base_url = url.trim().to_string();
    }

    // PLAYDEPLOY_TOKEN_URI
    if let Some(uri) = get_env("PLAYDEPLOY_TOKEN_URI").filter(|v| !v.trim().is_empty()) {
        config.api.token_uri = uri.trim().to_string();
    }

    // PLAYDEPLOY_COLOR
    if let Some(color) = get_env("PLAYDEPLOY_COLOR") {
        match ColorMode::parse(&color) {
            Some(mode) => config.output.color = mode,
            None => warn!("ignoring PLAYDEPLOY_COLOR: unknown mode '{color}'"),
        }
    }

    // PLAYDEPLOY_GITHUB_ANNOTATIONS
    if let Some(val) = get_env("PLAYDEPLOY_GITHUB_ANNOTATIONS") {
        config.output.github_annotations = val.to_lowercase() != "false" && val != "0";
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "deploy",
        "track",
        "api",
        "base_url",
        "token_uri",
        "output",
        "color",
        "unicode",
        "github_annotations",
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
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
