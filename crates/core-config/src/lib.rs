//! Configuration loading: a small TOML file overriding the scroll
//! half-page amount and the terminal-size fallback, discovered the way the
//! teacher's config crate discovers its own file (local working directory
//! first, then the platform config dir).

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct ScrollConfig {
    /// Overrides `view_rows / 2` as the half-page scroll amount (spec.md
    /// §4.3). `0` means "unset, use the default".
    #[serde(default)]
    pub half_page: usize,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { half_page: 0 }
    }
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct TerminalConfig {
    #[serde(default = "TerminalConfig::default_fallback_cols")]
    pub fallback_cols: u16,
    #[serde(default = "TerminalConfig::default_fallback_rows")]
    pub fallback_rows: u16,
}

impl TerminalConfig {
    const fn default_fallback_cols() -> u16 {
        190
    }

    const fn default_fallback_rows() -> u16 {
        80
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            fallback_cols: Self::default_fallback_cols(),
            fallback_rows: Self::default_fallback_rows(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub terminal: TerminalConfig,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    pub file: ConfigFile,
}

impl Config {
    /// The configured half-page scroll amount, or `view_rows / 2` when
    /// unset.
    pub fn half_page(&self, view_rows: usize) -> usize {
        if self.file.scroll.half_page > 0 {
            self.file.scroll.half_page
        } else {
            view_rows / 2
        }
    }
}

/// Best-effort config path: a local `gridvi.toml` takes priority over the
/// platform config dir, mirroring the teacher's own discovery order.
pub fn discover() -> PathBuf {
    let local = PathBuf::from("gridvi.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("gridvi").join("gridvi.toml");
    }
    PathBuf::from("gridvi.toml")
}

fn parse(content: &str) -> Result<ConfigFile, ConfigError> {
    toml::from_str(content).map_err(ConfigError::from)
}

/// Load configuration from `path` (or the discovered default). A missing
/// file is silent (defaults apply); a present-but-malformed file falls
/// back to defaults too, but logs the parse error — never silently
/// discarded.
pub fn load_from(path: Option<PathBuf>) -> Config {
    let path = path.unwrap_or_else(discover);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    match parse(&content) {
        Ok(file) => Config { file },
        Err(err) => {
            tracing::warn!(target: "config", path = %path.display(), error = %err, "malformed config file, using defaults");
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_on_missing_file() {
        let cfg = load_from(Some(PathBuf::from("__gridvi_missing__.toml")));
        assert_eq!(cfg.file.scroll.half_page, 0);
        assert_eq!(cfg.file.terminal.fallback_cols, 190);
        assert_eq!(cfg.file.terminal.fallback_rows, 80);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let err = parse("[scroll\nhalf_page = 5").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "[scroll\nhalf_page = 5").unwrap();
        let cfg = load_from(Some(tmp.path().to_path_buf()));
        assert_eq!(cfg.file.scroll.half_page, 0);
    }

    #[test]
    fn round_trip_written_toml_fixture() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            tmp.path(),
            "[scroll]\nhalf_page = 7\n[terminal]\nfallback_cols = 120\nfallback_rows = 40\n",
        )
        .unwrap();
        let cfg = load_from(Some(tmp.path().to_path_buf()));
        assert_eq!(cfg.file.scroll.half_page, 7);
        assert_eq!(cfg.file.terminal.fallback_cols, 120);
        assert_eq!(cfg.file.terminal.fallback_rows, 40);
        assert_eq!(cfg.half_page(20), 7);
    }

    #[test]
    fn half_page_defaults_to_half_view_rows_when_unset() {
        let cfg = Config::default();
        assert_eq!(cfg.half_page(10), 5);
    }
}
