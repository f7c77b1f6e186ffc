use super::color_parse::parse_paint;
use super::composite::composite_over;
use super::vision::{simulated_ratio, VisionMode};
use super::wcag::{ContrastResult, WcagLevel};
use crate::config::EngineConfig;
use crate::error::ParseError;
use crate::types::{CheckResult, ColorPair, ContrastReport};

/// Check contrast for a single color pair.
/// Composites translucent colors, then computes the WCAG ratio, flags and
/// the ratios seen under each dichromacy.
pub fn check_contrast(pair: &ColorPair, config: &EngineConfig) -> Result<ContrastReport, ParseError> {
    let bg_paint = parse_paint(&pair.background)?;
    let fg_paint = parse_paint(&pair.foreground)?;

    // Step 1: composite bg alpha against page bg
    let effective_bg = composite_over(bg_paint, config.page_background);
    // Step 2: composite text alpha against effective bg
    let effective_fg = composite_over(fg_paint, effective_bg);

    let result = ContrastResult::between(effective_fg, effective_bg);
    let flags = result.flags;
    let cvd = |mode| config.round_ratio(simulated_ratio(effective_fg, effective_bg, mode));

    Ok(ContrastReport {
        label: pair.label.clone(),
        foreground: effective_fg.to_string(),
        background: effective_bg.to_string(),
        is_large_text: pair.is_large_text.unwrap_or(false),
        ratio: config.round_ratio(result.ratio),
        pass_aa: flags.aa_normal,
        pass_aa_large: flags.aa_large,
        pass_aaa: flags.aaa_normal,
        pass_aaa_large: flags.aaa_large,
        level: result.level().to_string(),
        protanopia_ratio: cvd(VisionMode::Protanopia),
        deuteranopia_ratio: cvd(VisionMode::Deuteranopia),
        tritanopia_ratio: cvd(VisionMode::Tritanopia),
    })
}

/// Split checked pairs into violations and passes for `level`.
/// Pairs that failed to parse are counted as skipped.
pub fn categorize<'a, I>(outcomes: I, level: WcagLevel) -> CheckResult
where
    I: IntoIterator<Item = (&'a ColorPair, Result<ContrastReport, ParseError>)>,
{
    let mut result = CheckResult::default();

    for (pair, outcome) in outcomes {
        let report = match outcome {
            Ok(report) => report,
            Err(err) => {
                tracing::debug!(label = ?pair.label, %err, "skipping pair");
                result.skipped_count += 1;
                continue;
            }
        };

        if report.flags().passes(level, report.is_large_text) {
            result.passed.push(report);
        } else {
            result.violations.push(report);
        }
    }

    result
}

/// Check all pairs sequentially against `level`.
pub fn check_all_pairs(pairs: &[ColorPair], level: WcagLevel, config: &EngineConfig) -> CheckResult {
    categorize(pairs.iter().map(|pair| (pair, check_contrast(pair, config))), level)
}
