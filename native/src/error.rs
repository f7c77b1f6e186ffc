//! Error types for the contrast engine.

use thiserror::Error;

use crate::math::wcag::WcagLevel;

/// Input that could not be turned into a color, level or vision mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not a 3- or 6-digit hex color (or, for CSS input, not a color at all).
    #[error("invalid color format: '{input}'")]
    InvalidFormat { input: String },

    /// Conformance level other than "AA" / "AAA".
    #[error("invalid WCAG level: '{input}' (expected AA or AAA)")]
    InvalidLevel { input: String },

    #[error("invalid vision mode: '{input}'")]
    InvalidVisionMode { input: String },
}

impl ParseError {
    pub(crate) fn invalid_format(input: &str) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
        }
    }
}

/// The accessible-pair search ran out of attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no {level} color pair found after {attempts} attempts")]
pub struct GenerationTimeout {
    pub level: WcagLevel,
    pub attempts: u32,
}

/// Errors raised while loading an [`EngineConfig`](crate::config::EngineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Any error the engine can return.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Generation(#[from] GenerationTimeout),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_format_message_names_input() {
        let err = ParseError::invalid_format("#12");
        assert_eq!(err.to_string(), "invalid color format: '#12'");
    }

    #[test]
    fn timeout_message_names_level() {
        let err = GenerationTimeout {
            level: WcagLevel::Aaa,
            attempts: 3,
        };
        assert_eq!(err.to_string(), "no AAA color pair found after 3 attempts");
    }

    #[test]
    fn crate_error_wraps_parse_error() {
        let err: Error = ParseError::invalid_format("zzz").into();
        assert!(matches!(err, Error::Parse(ParseError::InvalidFormat { .. })));
        assert_eq!(err.to_string(), "invalid color format: 'zzz'");
    }
}
