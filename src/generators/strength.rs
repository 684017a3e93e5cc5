// src/generators/strength.rs
use std::collections::HashSet;

use crate::models::{CharacterClass, PasswordGenerationOptions};

// Rough 0-100 score: length up to 40, 10 per class present, -10 when mostly repeats
pub fn analyze_password_strength(password: &str) -> u8 {
    let length = password.chars().count();
    let mut score = length.min(40) as i32;

    for class in CharacterClass::ALL {
        if password.chars().any(|c| class.contains(c)) {
            score += 10;
        }
    }

    let distinct = password.chars().collect::<HashSet<_>>().len();
    if distinct < length / 2 {
        score -= 10;
    }

    score.clamp(0, 100) as u8
}

/// Upper bound on entropy for passwords drawn with `options`, in bits.
///
/// Computed as `length * log2(pool)`, where the pool counts every selected
/// table in full. Returns `0.0` when nothing is selected.
pub fn estimate_entropy_bits(options: &PasswordGenerationOptions) -> f64 {
    let selected = options.selected_classes();
    let pool: usize = selected
        .iter()
        .map(|class| class.chars().chars().count())
        .sum();

    if pool == 0 {
        return 0.0;
    }

    let length = options.length.max(selected.len());
    length as f64 * (pool as f64).log2()
}
