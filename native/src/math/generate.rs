use rand::Rng;

use super::hex::Color;
use super::wcag::{contrast_ratio, WcagLevel};
use crate::error::GenerationTimeout;

/// Retry cap used when the caller does not supply one.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

/// Sample a uniformly random color from the full 24-bit space.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::from_u24(rng.gen_range(0..=0xFF_FFFF))
}

/// Random (foreground, background) pair meeting `level` for normal text,
/// using the thread-local RNG and the default retry cap.
pub fn generate_accessible_pair(level: WcagLevel) -> Result<(Color, Color), GenerationTimeout> {
    generate_accessible_pair_with(&mut rand::thread_rng(), level, DEFAULT_MAX_ATTEMPTS)
}

/// Rejection-sample independent random pairs until one reaches the level's
/// normal-text threshold, giving up after `max_attempts` pairs.
pub fn generate_accessible_pair_with<R: Rng + ?Sized>(
    rng: &mut R,
    level: WcagLevel,
    max_attempts: u32,
) -> Result<(Color, Color), GenerationTimeout> {
    let threshold = level.threshold(false);

    for attempt in 1..=max_attempts {
        let fg = random_color(rng);
        let bg = random_color(rng);
        if contrast_ratio(fg, bg) >= threshold {
            tracing::debug!(%level, attempt, %fg, %bg, "generated accessible pair");
            return Ok((fg, bg));
        }
    }

    tracing::debug!(%level, max_attempts, "accessible pair search exhausted");
    Err(GenerationTimeout {
        level,
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn aa_pairs_meet_threshold() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let (fg, bg) = generate_accessible_pair_with(&mut rng, WcagLevel::Aa, DEFAULT_MAX_ATTEMPTS).unwrap();
            assert!(contrast_ratio(fg, bg) >= 4.5);
        }
    }

    #[test]
    fn aaa_pairs_meet_threshold() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let (fg, bg) = generate_accessible_pair_with(&mut rng, WcagLevel::Aaa, DEFAULT_MAX_ATTEMPTS).unwrap();
            assert!(contrast_ratio(fg, bg) >= 7.0);
        }
    }

    #[test]
    fn same_seed_same_pair() {
        let a = generate_accessible_pair_with(&mut StdRng::seed_from_u64(1), WcagLevel::Aa, 100);
        let b = generate_accessible_pair_with(&mut StdRng::seed_from_u64(1), WcagLevel::Aa, 100);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_attempts_times_out() {
        let err = generate_accessible_pair_with(&mut StdRng::seed_from_u64(3), WcagLevel::Aaa, 0).unwrap_err();
        assert_eq!(err.level, WcagLevel::Aaa);
        assert_eq!(err.attempts, 0);
    }

    #[test]
    fn exhausted_budget_reports_attempts() {
        // a constant-zero source only ever yields black on black (1:1)
        let mut rng = StepRng::new(0, 0);
        for max_attempts in [1, 25] {
            let err = generate_accessible_pair_with(&mut rng, WcagLevel::Aa, max_attempts).unwrap_err();
            assert_eq!(err.level, WcagLevel::Aa);
            assert_eq!(err.attempts, max_attempts);
        }
    }

    #[test]
    fn thread_rng_entry_point() {
        let (fg, bg) = generate_accessible_pair(WcagLevel::Aaa).unwrap();
        assert!(contrast_ratio(fg, bg) >= 7.0);
    }
}
