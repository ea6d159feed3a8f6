//! Scoring and secret-generation integration tests.
//!
//! Property tests check the scorer against an independent multiset
//! formulation; the sampling tests check the generation policy's
//! distribution per level band.

use proptest::prelude::*;
use super_code::core::{
    generate_secret, score, Color, Color::*, Feedback, GameRng, Secret, CODE_LENGTH, PALETTE,
    PALETTE_SIZE, REPEAT_COLORS_FROM_LEVEL,
};

fn color() -> impl Strategy<Value = Color> {
    (0..PALETTE_SIZE).prop_map(|i| PALETTE[i])
}

fn code() -> impl Strategy<Value = [Color; CODE_LENGTH]> {
    prop::array::uniform4(color())
}

fn counts(code: &[Color; CODE_LENGTH]) -> [usize; PALETTE_SIZE] {
    let mut counts = [0; PALETTE_SIZE];
    for c in code {
        counts[c.index()] += 1;
    }
    counts
}

// =============================================================================
// Worked Examples
// =============================================================================

#[test]
fn test_rotation_without_repeats() {
    let secret = Secret::new([Red, Yellow, Blue, Green]);
    assert_eq!(
        score(&secret, &[Green, Blue, Yellow, Red]),
        Feedback::new(0, 4).unwrap()
    );
}

#[test]
fn test_repeated_secret_colors() {
    let secret = Secret::new([Red, Red, Blue, Green]);
    // Exact: position 0. Partial: blue claims secret[2], the second red
    // claims the still unconsumed secret[1], yellow finds nothing.
    assert_eq!(
        score(&secret, &[Red, Blue, Red, Yellow]),
        Feedback::new(1, 2).unwrap()
    );
}

#[test]
fn test_repeated_guess_against_single_color() {
    let secret = Secret::new([Red, Yellow, Blue, Green]);
    assert_eq!(
        score(&secret, &[Red, Red, Purple, Purple]),
        Feedback::new(1, 0).unwrap()
    );
}

#[test]
fn test_all_one_color() {
    let secret = Secret::new([Cyan, Cyan, Orange, Cyan]);
    assert_eq!(
        score(&secret, &[Orange, Cyan, Cyan, Cyan]),
        Feedback::new(2, 2).unwrap()
    );
}

// =============================================================================
// Scorer Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_counts_bounded(secret in code(), guess in code()) {
        let fb = score(&Secret::new(secret), &guess);
        prop_assert!(usize::from(fb.exact()) + usize::from(fb.partial()) <= CODE_LENGTH);
    }

    #[test]
    fn prop_self_score_is_solved(secret in code()) {
        let fb = score(&Secret::new(secret), &secret);
        prop_assert_eq!(fb, Feedback::solved());
        prop_assert_eq!(fb.partial(), 0);
    }

    #[test]
    fn prop_matches_multiset_overlap(secret in code(), guess in code()) {
        let fb = score(&Secret::new(secret), &guess);

        let aligned = secret.iter().zip(&guess).filter(|(s, g)| s == g).count();
        let (s, g) = (counts(&secret), counts(&guess));
        let overlap: usize = (0..PALETTE_SIZE).map(|i| s[i].min(g[i])).sum();

        prop_assert_eq!(usize::from(fb.exact()), aligned);
        prop_assert_eq!(usize::from(fb.exact()) + usize::from(fb.partial()), overlap);
    }

    #[test]
    fn prop_swapping_roles_keeps_score(a in code(), b in code()) {
        prop_assert_eq!(score(&Secret::new(a), &b), score(&Secret::new(b), &a));
    }

    #[test]
    fn prop_deterministic(secret in code(), guess in code()) {
        let secret = Secret::new(secret);
        prop_assert_eq!(score(&secret, &guess), score(&secret, &guess));
    }
}

// =============================================================================
// Secret Generation
// =============================================================================

const SAMPLES: usize = 14_000;

fn color_frequencies(level: u32, seed: u64) -> [usize; PALETTE_SIZE] {
    let mut rng = GameRng::new(seed);
    let mut freq = [0; PALETTE_SIZE];
    for _ in 0..SAMPLES {
        for c in generate_secret(level, &mut rng).colors() {
            freq[c.index()] += 1;
        }
    }
    freq
}

fn assert_roughly_uniform(freq: &[usize; PALETTE_SIZE]) {
    let expected = (SAMPLES * CODE_LENGTH / PALETTE_SIZE) as f64;
    for (i, &n) in freq.iter().enumerate() {
        let deviation = (n as f64 - expected).abs() / expected;
        assert!(
            deviation < 0.06,
            "{} drawn {n} times, expected about {expected}",
            PALETTE[i]
        );
    }
}

#[test]
fn test_early_levels_distinct_and_uniform() {
    let mut rng = GameRng::new(3);
    for level in 1..REPEAT_COLORS_FROM_LEVEL {
        let secret = generate_secret(level, &mut rng);
        assert!(!secret.has_repeats());
    }
    assert_roughly_uniform(&color_frequencies(1, 11));
}

#[test]
fn test_early_levels_cover_every_position() {
    // Each color should land in each position; a partial shuffle biased
    // towards the palette prefix would starve the tail colors.
    let mut rng = GameRng::new(5);
    let mut seen = [[0usize; PALETTE_SIZE]; CODE_LENGTH];
    for _ in 0..SAMPLES {
        for (pos, c) in generate_secret(4, &mut rng).colors().iter().enumerate() {
            seen[pos][c.index()] += 1;
        }
    }
    let expected = (SAMPLES / PALETTE_SIZE) as f64;
    for row in &seen {
        for &n in row {
            assert!((n as f64 - expected).abs() / expected < 0.1);
        }
    }
}

#[test]
fn test_late_levels_uniform_with_repeats() {
    let freq = color_frequencies(REPEAT_COLORS_FROM_LEVEL, 17);
    assert_roughly_uniform(&freq);

    let mut rng = GameRng::new(23);
    let with_repeats = (0..1000)
        .filter(|_| generate_secret(20, &mut rng).has_repeats())
        .count();
    assert!(with_repeats > 550 && with_repeats < 750, "{with_repeats}");
}
