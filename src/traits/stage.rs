use crate::config::{ComponentInfo, StageConfig};

/// Common identity surface of every pipeline stage.
///
/// Stages carry a [`StageConfig`] so that log events and diagnostics can
/// name the stage they came from.
pub trait Stage {
  /// Name reported when the configuration does not set one.
  const DEFAULT_NAME: &'static str;

  /// Returns the stage configuration.
  fn config(&self) -> &StageConfig;

  /// Returns the stage configuration mutably.
  fn config_mut(&mut self) -> &mut StageConfig;

  /// Sets the name for this stage.
  fn with_name(mut self, name: impl Into<String>) -> Self
  where
    Self: Sized,
  {
    self.config_mut().name = Some(name.into());
    self
  }

  /// The configured name, or [`Stage::DEFAULT_NAME`].
  fn name(&self) -> &str {
    self.config().name_or(Self::DEFAULT_NAME)
  }

  /// Name and concrete type of this stage.
  fn component_info(&self) -> ComponentInfo {
    ComponentInfo::new(
      self.name().to_string(),
      std::any::type_name::<Self>().to_string(),
    )
  }
}
