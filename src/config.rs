//! Runtime settings and application paths.
//!
//! Nothing here is persisted: settings come from the command line each run.
//! Paths are only used to place the optional log file.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::core::font_cache::DEFAULT_CAPACITY;
use crate::core::CanvasSize;

/// Default distance of glyphs from the running origin
pub const DEFAULT_SPREAD: i32 = 250;

/// Environment variable overriding the data directory
pub const CONFIG_DIR_ENV: &str = "SIGILTRON_CONFIG_DIR";

/// Settings for one application run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub canvas: CanvasSize,
    pub base_spread: i32,
    pub font_cache_capacity: usize,
    /// Seed for every random generator (None = entropy)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::default(),
            base_spread: DEFAULT_SPREAD,
            font_cache_capacity: DEFAULT_CAPACITY,
            seed: None,
        }
    }
}

impl Settings {
    /// Settings from CLI arguments; unset options keep their defaults.
    pub fn from_args(args: &Args) -> Self {
        let defaults = Self::default();
        Self {
            canvas: CanvasSize::new(
                args.width.unwrap_or(defaults.canvas.width),
                args.height.unwrap_or(defaults.canvas.height),
            ),
            base_spread: args.spread.unwrap_or(defaults.base_spread),
            font_cache_capacity: args.font_cache.unwrap_or(defaults.font_cache_capacity),
            seed: args.seed,
        }
    }
}

/// Configuration for overriding default application paths
#[derive(Debug, Clone)]
pub struct PathConfig {
    /// Custom data directory (from CLI or ENV)
    pub config_dir: Option<PathBuf>,
}

impl PathConfig {
    /// Priority: CLI args → ENV var (SIGILTRON_CONFIG_DIR) → None (use defaults)
    pub fn from_env_and_cli(cli_dir: Option<PathBuf>) -> Self {
        let config_dir = cli_dir.or_else(|| std::env::var(CONFIG_DIR_ENV).ok().map(PathBuf::from));
        Self { config_dir }
    }
}

/// Get path to a data file (logs)
///
/// Platform paths:
/// - Linux: ~/.local/share/sigiltron/{name}
/// - macOS: ~/Library/Application Support/sigiltron/{name}
/// - Windows: %APPDATA%\sigiltron\{name}
pub fn data_file(name: &str, config: &PathConfig) -> PathBuf {
    data_dir(config).join(name)
}

/// Create the parent directory of `path` if missing.
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && !dir.exists()
    {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(())
}

fn data_dir(config: &PathConfig) -> PathBuf {
    if let Some(dir) = &config.config_dir {
        return dir.clone();
    }

    if let Some(dir) = dirs_next::data_dir() {
        return dir.join("sigiltron");
    }

    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_data_file_with_custom_dir() {
        let config = PathConfig {
            config_dir: Some(PathBuf::from("/custom")),
        };

        let path = data_file("sigiltron.log", &config);
        assert_eq!(path, PathBuf::from("/custom/sigiltron.log"));
    }

    #[test]
    fn test_cli_dir_wins() {
        let config = PathConfig::from_env_and_cli(Some(PathBuf::from("/from/cli")));
        assert_eq!(config.config_dir, Some(PathBuf::from("/from/cli")));
    }

    #[test]
    fn test_settings_defaults() {
        let args = Args::parse_from(["sigiltron"]);
        let settings = Settings::from_args(&args);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.base_spread, 250);
        assert_eq!(settings.canvas, CanvasSize::new(640, 480));
    }

    #[test]
    fn test_settings_overrides() {
        let args = Args::parse_from([
            "sigiltron", "--spread", "90", "--width", "800", "--height", "600", "--seed", "4",
        ]);
        let settings = Settings::from_args(&args);
        assert_eq!(settings.base_spread, 90);
        assert_eq!(settings.canvas, CanvasSize::new(800, 600));
        assert_eq!(settings.seed, Some(4));
    }
}
