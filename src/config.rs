//! Stage identity and serialisable stage settings.
//!
//! [`StageConfig`] is carried by every stage and only names it. The
//! `*Settings` types describe how a host wants a pipeline configured and can
//! be loaded from JSON with [`PipelineSettings::from_json`].
//!
//! # Example
//!
//! ```rust
//! use stageweave::config::PipelineSettings;
//!
//! let settings: PipelineSettings<i32> = PipelineSettings::from_json(
//!   r#"{ "moving_average": { "window": 4 }, "threshold": { "limit": 12 } }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(settings.moving_average.unwrap().window, 4);
//! assert_eq!(settings.threshold.unwrap().limit, 12);
//! ```

use crate::error::ConfigResult;
use crate::stages::moving_average::DEFAULT_USE_ZEROS;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Configuration shared by all stages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageConfig {
  /// Optional name for identifying the stage in logs.
  pub name: Option<String>,
}

impl StageConfig {
  /// Sets the name for this stage configuration.
  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }

  /// Returns the configured name, or `default` when none is set.
  pub fn name_or<'a>(&'a self, default: &'a str) -> &'a str {
    self.name.as_deref().unwrap_or(default)
  }
}

/// Name and type of a stage, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentInfo {
  /// Configured or default stage name.
  pub name: String,
  /// Fully qualified Rust type of the stage.
  pub type_name: String,
}

impl ComponentInfo {
  /// Creates component info from a name and a type name.
  pub fn new(name: String, type_name: String) -> Self {
    Self { name, type_name }
  }
}

/// Settings for a moving-average stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovingAverageSettings {
  /// Expected window length; must equal the stage's `N`.
  pub window: usize,
  /// Whether zero samples enter the window. Absent means the
  /// direct-construction default.
  pub use_zeros: Option<bool>,
  /// Optional stage name.
  pub name: Option<String>,
}

impl MovingAverageSettings {
  /// Creates settings for a window of `window` samples with defaults elsewhere.
  pub fn new(window: usize) -> Self {
    Self {
      window,
      use_zeros: None,
      name: None,
    }
  }

  /// The effective `use_zeros` flag.
  pub fn use_zeros(&self) -> bool {
    self.use_zeros.unwrap_or(DEFAULT_USE_ZEROS)
  }
}

/// Settings for a threshold pass-through stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdSettings<T> {
  /// Values must be strictly greater than this to pass.
  pub limit: T,
  /// Optional stage name.
  pub name: Option<String>,
}

/// Settings for the configurable stages of a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSettings<T> {
  /// Moving-average stage settings, if the pipeline has one.
  pub moving_average: Option<MovingAverageSettings>,
  /// Threshold stage settings, if the pipeline has one.
  pub threshold: Option<ThresholdSettings<T>>,
}

impl<T> PipelineSettings<T>
where
  T: DeserializeOwned,
{
  /// Parses pipeline settings from a JSON document.
  pub fn from_json(json: &str) -> ConfigResult<Self> {
    Ok(serde_json::from_str(json)?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::ConfigError;

  #[test]
  fn test_name_or_default() {
    let config = StageConfig::default();
    assert_eq!(config.name_or("stage"), "stage");

    let config = config.with_name("filter");
    assert_eq!(config.name_or("stage"), "filter");
  }

  #[test]
  fn test_moving_average_settings_defaults() {
    let settings: MovingAverageSettings = serde_json::from_str(r#"{ "window": 3 }"#).unwrap();
    assert_eq!(settings, MovingAverageSettings::new(3));
    assert!(settings.use_zeros());
  }

  #[test]
  fn test_moving_average_settings_explicit() {
    let settings: MovingAverageSettings =
      serde_json::from_str(r#"{ "window": 5, "use_zeros": false, "name": "rpm" }"#).unwrap();
    assert_eq!(settings.window, 5);
    assert!(!settings.use_zeros());
    assert_eq!(settings.name.as_deref(), Some("rpm"));
  }

  #[test]
  fn test_pipeline_settings_partial_document() {
    let settings: PipelineSettings<f32> =
      PipelineSettings::from_json(r#"{ "threshold": { "limit": 0.5 } }"#).unwrap();
    assert!(settings.moving_average.is_none());
    assert_eq!(settings.threshold.unwrap().limit, 0.5);
  }

  #[test]
  fn test_pipeline_settings_rejects_bad_json() {
    let result: ConfigResult<PipelineSettings<i32>> =
      PipelineSettings::from_json(r#"{ "threshold": { "limit": "high" } }"#);
    assert!(matches!(result, Err(ConfigError::Parse(_))));
  }
}
