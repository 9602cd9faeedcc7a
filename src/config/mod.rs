//! Configuration module for cipher-pad.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for the transform
//! and the window, `AppPaths` for the platform config directory, and TOML
//! persistence via `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, TransformConfig, TransformKind, UiConfig};
