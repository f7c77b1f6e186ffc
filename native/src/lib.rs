#[cfg(feature = "napi")]
#[macro_use]
extern crate napi_derive;

pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod logging;
pub mod math;
pub mod report;
pub mod types;

#[cfg(feature = "napi")]
mod bindings;

pub use config::EngineConfig;
pub use error::{ConfigError, Error, GenerationTimeout, ParseError, Result};
pub use history::{History, HistoryEntry};
pub use math::checker::{check_all_pairs, check_contrast};
pub use math::color_parse::{parse_paint, Paint};
pub use math::generate::{generate_accessible_pair, generate_accessible_pair_with};
pub use math::hex::{format_color, format_color_or, parse_color, parse_color_lenient, parse_color_or, Color};
pub use math::vision::{simulate, simulated_ratio, VisionMode};
pub use math::wcag::{
    classify, contrast_ratio, relative_luminance, ConformanceFlags, ConformanceLevel, ContrastResult, WcagLevel,
};
pub use report::{advice, export_line, Advice};
