//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files.  Every struct is
//! `#[serde(default)]`, so a settings file only needs the keys it changes.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// TransformKind
// ---------------------------------------------------------------------------

/// Selects the text transformation run by the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransformKind {
    /// Reverse the text, then Base64-encode it.
    ReverseBase64,
    /// Copy the input unchanged.
    Identity,
}

impl Default for TransformKind {
    fn default() -> Self {
        Self::ReverseBase64
    }
}

// ---------------------------------------------------------------------------
// TransformConfig
// ---------------------------------------------------------------------------

/// Settings for the background transformation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Which transformation to run.
    pub kind: TransformKind,
    /// Artificial latency added before each transformation, in milliseconds.
    /// `0` disables the delay.
    pub delay_ms: u64,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            kind: TransformKind::default(),
            delay_ms: 50,
        }
    }
}

// ---------------------------------------------------------------------------
// UiConfig
// ---------------------------------------------------------------------------

/// Window and editor appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Window title.
    pub title: String,
    /// Initial inner size `(width, height)` in logical pixels.
    pub window_size: (f32, f32),
    /// Last saved window position `(x, y)`.  `None` centres the window.
    pub window_position: Option<(f32, f32)>,
    /// Monospace font size for both panes.
    pub font_size: f32,
    /// Wrap long lines instead of scrolling horizontally.
    pub line_wrap: bool,
    /// Heading above the editable pane.
    pub input_title: String,
    /// Heading above the read-only pane.
    pub output_title: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Async Encryption".into(),
            window_size: (800.0, 500.0),
            window_position: None,
            font_size: 14.0,
            line_wrap: true,
            input_title: "Input (type here)".into(),
            output_title: "Output (encrypted text)".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use cipher_pad::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Background transformation settings.
    pub transform: TransformConfig,
    /// Window settings.
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn round_trip_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let original = AppConfig::default();
        original.save_to(&path).expect("save");

        let loaded = AppConfig::load_from(&path).expect("load");
        assert_eq!(original, loaded);
    }

    /// `load_from` on a non-existent path must return `Default` without error.
    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn default_values() {
        let cfg = AppConfig::default();

        assert_eq!(cfg.transform.kind, TransformKind::ReverseBase64);
        assert_eq!(cfg.transform.delay_ms, 50);
        assert_eq!(cfg.ui.window_size, (800.0, 500.0));
        assert!(cfg.ui.window_position.is_none());
        assert_eq!(cfg.ui.font_size, 14.0);
        assert!(cfg.ui.line_wrap);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "[transform]\ndelay_ms = 0\n").expect("write");

        let cfg = AppConfig::load_from(&path).expect("load");
        assert_eq!(cfg.transform.delay_ms, 0);
        assert_eq!(cfg.transform.kind, TransformKind::ReverseBase64);
        assert_eq!(cfg.ui, UiConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "transform = 12").expect("write");

        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn round_trip_modified_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("modified.toml");

        let mut cfg = AppConfig::default();
        cfg.transform.kind = TransformKind::Identity;
        cfg.transform.delay_ms = 250;
        cfg.ui.window_position = Some((100.0, 200.0));
        cfg.ui.font_size = 18.0;
        cfg.ui.line_wrap = false;

        cfg.save_to(&path).expect("save");
        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(loaded.transform.kind, TransformKind::Identity);
        assert_eq!(loaded.transform.delay_ms, 250);
        assert_eq!(loaded.ui.window_position, Some((100.0, 200.0)));
        assert_eq!(loaded.ui.font_size, 18.0);
        assert!(!loaded.ui.line_wrap);
    }
}
