//! Configuration module for docdiff.
//!
//! Provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//!
//! # Quick Start
//!
//! ```rust
//! use docdiff::config::{AppConfig, ConfigPreset};
//!
//! // Use defaults
//! let config = AppConfig::default();
//!
//! // Use a preset
//! let config = AppConfig::from_preset(ConfigPreset::Ci);
//!
//! // Use the builder
//! let config = AppConfig::builder()
//!     .max_diff_lines(20)
//!     .fail_on_diff(true)
//!     .build();
//! ```
//!
//! # Configuration File
//!
//! Place a `.docdiff.yaml` file in your project root or
//! `~/.config/docdiff/`:
//!
//! ```yaml
//! compare:
//!   algorithm: lexical
//!   mode: line
//! behavior:
//!   fail_on_diff: true
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

// Re-export main types
pub use defaults::{ConfigPreset, DEFAULT_MAX_DIFF_LINES};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, CompareConfig, ComparePaths, OutputConfig,
};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};
