use rayon::prelude::*;

use crate::config::EngineConfig;
use crate::error::ParseError;
use crate::math::checker::{categorize, check_contrast};
use crate::math::color_parse::parse_paint;
use crate::math::composite::composite_over;
use crate::math::hex::Color;
use crate::math::wcag::{ContrastResult, WcagLevel};
use crate::types::{BatchOptions, CheckResult, ColorPair, MatrixCell};

/// Check many pairs in parallel and categorize them against `level`.
///
/// Uses Rayon's `par_iter()`: each pair is checked independently (no shared
/// mutable state), and results keep the input order.
pub fn check_pairs_parallel(pairs: &[ColorPair], level: WcagLevel, config: &EngineConfig) -> CheckResult {
    tracing::trace!(count = pairs.len(), %level, "checking pairs");
    let outcomes: Vec<_> = pairs.par_iter().map(|pair| check_contrast(pair, config)).collect();
    categorize(pairs.iter().zip(outcomes), level)
}

/// Entry point for JS batch input, where the level arrives as a string.
pub fn run_batch(options: &BatchOptions, config: &EngineConfig) -> Result<CheckResult, ParseError> {
    let level: WcagLevel = options.level.parse()?;
    Ok(check_pairs_parallel(&options.pairs, level, config))
}

/// Contrast of every ordered (foreground, background) combination of a
/// palette, row-major by foreground. Translucent entries are composited over
/// the page background first.
pub fn contrast_matrix(palette: &[String], config: &EngineConfig) -> Result<Vec<MatrixCell>, ParseError> {
    let colors = palette
        .iter()
        .map(|value| parse_paint(value).map(|paint| composite_over(paint, config.page_background)))
        .collect::<Result<Vec<Color>, _>>()?;

    Ok(colors
        .par_iter()
        .flat_map_iter(|&fg| {
            colors.iter().map(move |&bg| {
                let result = ContrastResult::between(fg, bg);
                MatrixCell {
                    foreground: fg.to_string(),
                    background: bg.to_string(),
                    ratio: config.round_ratio(result.ratio),
                    level: result.level().to_string(),
                }
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::checker::check_all_pairs;

    fn pair(fg: &str, bg: &str) -> ColorPair {
        ColorPair::new(fg, bg)
    }

    #[test]
    fn parallel_matches_sequential() {
        let pairs: Vec<ColorPair> = (0..64u32)
            .map(|i| {
                let gray = (i * 4) as u8;
                pair(&Color::new(gray, gray, gray).to_string(), "#ffffff")
            })
            .collect();
        let config = EngineConfig::default();
        let parallel = check_pairs_parallel(&pairs, WcagLevel::Aa, &config);
        let sequential = check_all_pairs(&pairs, WcagLevel::Aa, &config);
        assert_eq!(parallel, sequential);
        assert_eq!(parallel.passed.len() + parallel.violations.len(), 64);
    }

    #[test]
    fn results_keep_input_order() {
        let pairs: Vec<ColorPair> = (0..20u32)
            .map(|i| {
                let mut p = pair("#000000", "#ffffff");
                p.label = Some(format!("pair-{i}"));
                p
            })
            .collect();
        let result = check_pairs_parallel(&pairs, WcagLevel::Aaa, &EngineConfig::default());
        let labels: Vec<String> = result.passed.iter().filter_map(|r| r.label.clone()).collect();
        let expected: Vec<String> = (0..20).map(|i| format!("pair-{i}")).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn batch_parses_level() {
        let options = BatchOptions {
            pairs: vec![pair("#757575", "#ffffff")],
            level: "AAA".to_string(),
        };
        let result = run_batch(&options, &EngineConfig::default()).unwrap();
        assert_eq!(result.violations.len(), 1);
    }

    #[test]
    fn batch_rejects_unknown_level() {
        let options = BatchOptions {
            pairs: vec![],
            level: "A".to_string(),
        };
        assert!(matches!(
            run_batch(&options, &EngineConfig::default()),
            Err(ParseError::InvalidLevel { .. })
        ));
    }

    #[test]
    fn empty_batch_is_empty() {
        let result = check_pairs_parallel(&[], WcagLevel::Aa, &EngineConfig::default());
        assert_eq!(result, CheckResult::default());
    }

    #[test]
    fn matrix_is_n_squared_row_major() {
        let palette = vec!["#000".to_string(), "#fff".to_string(), "#777777".to_string()];
        let cells = contrast_matrix(&palette, &EngineConfig::default()).unwrap();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[1].foreground, "#000000");
        assert_eq!(cells[1].background, "#FFFFFF");
        assert_eq!(cells[1].ratio, 21.0);
        assert_eq!(cells[1].level, "AAA");
        // diagonal is always 1:1
        for i in 0..3 {
            assert_eq!(cells[i * 3 + i].ratio, 1.0);
            assert_eq!(cells[i * 3 + i].level, "Fail");
        }
        assert_eq!(cells[5].level, "AA-Large");
    }

    #[test]
    fn matrix_rejects_bad_entry() {
        let palette = vec!["#000".to_string(), "transparent".to_string()];
        assert!(contrast_matrix(&palette, &EngineConfig::default()).is_err());
    }
}
