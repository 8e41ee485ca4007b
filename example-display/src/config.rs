//! Display configuration.

use std::time::Duration;

use pagedom::{Easing, Transitions};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::labels::TriggerLabels;

/// Id of the content block on game pages.
pub const DEFAULT_BLOCK_ID: &str = "exampleBlock";

/// Id of the trigger control on game pages.
pub const DEFAULT_TRIGGER_ID: &str = "showExampleBtn";

/// Placeholder shown by the sum renderer when there are no numbers.
pub const DEFAULT_UNAVAILABLE_MESSAGE: &str = "Данные о числах недоступны";

/// Shortest allowed fade.
pub const MIN_FADE_MS: u64 = 200;

/// Longest allowed fade.
pub const MAX_FADE_MS: u64 = 300;

const DEFAULT_FADE_MS: u64 = 250;

/// Configuration for an [`crate::ExampleDisplay`].
///
/// Every field has a default matching the game pages, so a JSON document only
/// needs the fields it overrides.
///
/// # Example
///
/// ```
/// use example_display::{DisplayConfig, FadeConfig};
///
/// let config = DisplayConfig::default()
///     .with_block_id("squareExample")
///     .with_fade(FadeConfig::default());
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Id of the block holding the worked example.
    ///
    /// Default: `exampleBlock`
    pub block_id: String,

    /// Id of the control that toggles the block.
    ///
    /// Default: `showExampleBtn`
    pub trigger_id: String,

    /// Labels written to the trigger control.
    pub labels: TriggerLabels,

    /// Message shown instead of a sum when there are no numbers.
    pub unavailable_message: String,

    /// Optional fade applied to the block when it is shown or hidden.
    ///
    /// Default: none (instant toggle)
    pub fade: Option<FadeConfig>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            block_id: DEFAULT_BLOCK_ID.into(),
            trigger_id: DEFAULT_TRIGGER_ID.into(),
            labels: TriggerLabels::default(),
            unavailable_message: DEFAULT_UNAVAILABLE_MESSAGE.into(),
            fade: None,
        }
    }
}

impl DisplayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_block_id(mut self, id: impl Into<String>) -> Self {
        self.block_id = id.into();
        self
    }

    pub fn with_trigger_id(mut self, id: impl Into<String>) -> Self {
        self.trigger_id = id.into();
        self
    }

    pub fn with_labels(mut self, labels: TriggerLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_unavailable_message(mut self, message: impl Into<String>) -> Self {
        self.unavailable_message = message.into();
        self
    }

    pub fn with_fade(mut self, fade: FadeConfig) -> Self {
        self.fade = Some(fade);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_id.is_empty() {
            return Err(ConfigError::EmptyId {
                role: "content block",
            });
        }
        if self.trigger_id.is_empty() {
            return Err(ConfigError::EmptyId {
                role: "trigger control",
            });
        }
        if self.block_id == self.trigger_id {
            return Err(ConfigError::SharedId(self.block_id.clone()));
        }
        if let Some(fade) = &self.fade {
            fade.validate()?;
        }
        Ok(())
    }
}

/// A cosmetic fade on show/hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FadeConfig {
    /// Default: 250
    #[serde(default = "default_fade_ms")]
    pub duration_ms: u64,

    /// Default: ease-out
    #[serde(default)]
    pub easing: FadeEasing,
}

fn default_fade_ms() -> u64 {
    DEFAULT_FADE_MS
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_FADE_MS,
            easing: FadeEasing::default(),
        }
    }
}

impl FadeConfig {
    pub fn new(duration_ms: u64, easing: FadeEasing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_FADE_MS..=MAX_FADE_MS).contains(&self.duration_ms) {
            return Err(ConfigError::FadeOutOfRange {
                actual_ms: self.duration_ms,
                min_ms: MIN_FADE_MS,
                max_ms: MAX_FADE_MS,
            });
        }
        Ok(())
    }

    /// The element transitions that realise this fade.
    pub fn to_transitions(&self) -> Transitions {
        Transitions::new().opacity(self.duration(), self.easing.into())
    }
}

/// Easing curve names accepted in config files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FadeEasing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl From<FadeEasing> for Easing {
    fn from(easing: FadeEasing) -> Self {
        match easing {
            FadeEasing::Linear => Easing::Linear,
            FadeEasing::EaseIn => Easing::EaseIn,
            FadeEasing::EaseOut => Easing::EaseOut,
            FadeEasing::EaseInOut => Easing::EaseInOut,
        }
    }
}
