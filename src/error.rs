//! # Error Handling
//!
//! Pulling a value through a stage cannot fail: closed gates and missing
//! readings are reported in-band as the value type's default. The only
//! fallible surface is loading stage settings, which reports a
//! [`ConfigError`].

use thiserror::Error;

/// Error raised while loading or applying stage settings.
#[derive(Error, Debug)]
pub enum ConfigError {
  /// The settings document is not valid JSON or does not match the schema.
  #[error("failed to parse stage settings: {0}")]
  Parse(#[from] serde_json::Error),
  /// The configured window does not match the stage's compile-time window.
  #[error("window size mismatch: stage holds {expected} samples, settings ask for {found}")]
  WindowMismatch {
    /// Window length fixed by the stage type.
    expected: usize,
    /// Window length requested by the settings.
    found: usize,
  },
}

/// Result type for settings operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_window_mismatch_display() {
    let err = ConfigError::WindowMismatch {
      expected: 8,
      found: 4,
    };
    assert_eq!(
      err.to_string(),
      "window size mismatch: stage holds 8 samples, settings ask for 4"
    );
  }

  #[test]
  fn test_parse_error_converts() {
    let parse: Result<u8, _> = serde_json::from_str("not json");
    let err: ConfigError = parse.unwrap_err().into();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("failed to parse stage settings"));
  }
}
