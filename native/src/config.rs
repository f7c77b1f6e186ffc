use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::math::generate::DEFAULT_MAX_ATTEMPTS;
use crate::math::hex::Color;

/// Most decimal places a reported ratio may carry.
pub const MAX_RATIO_PRECISION: u32 = 6;

/// Engine settings. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Retry cap for accessible-pair generation.
    pub max_attempts: u32,
    /// Number of distinct pairs kept in the recency history.
    pub history_capacity: usize,
    /// Decimal places of reported ratios. Classification always uses the raw ratio.
    pub ratio_precision: u32,
    /// Substituted for unparseable input on the lenient path.
    pub fallback_color: Color,
    /// Backdrop that translucent backgrounds are composited over.
    pub page_background: Color,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            history_capacity: 10,
            ratio_precision: 2,
            fallback_color: Color::BLACK,
            page_background: Color::WHITE,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::Invalid {
                field: "maxAttempts",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::Invalid {
                field: "historyCapacity",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.ratio_precision > MAX_RATIO_PRECISION {
            return Err(ConfigError::Invalid {
                field: "ratioPrecision",
                reason: format!("{} exceeds the maximum of {MAX_RATIO_PRECISION}", self.ratio_precision),
            });
        }
        Ok(())
    }

    /// Round a ratio for display. Precision is capped at
    /// [`MAX_RATIO_PRECISION`] even when the config was never validated.
    pub fn round_ratio(&self, ratio: f64) -> f64 {
        let factor = 10f64.powi(self.ratio_precision.min(MAX_RATIO_PRECISION) as i32);
        (ratio * factor).round() / factor
    }
}
