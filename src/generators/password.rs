// src/generators/password.rs
use crate::generators::random::{RandomSource, RngSource};
use crate::generators::{GeneratorError, Result};
use crate::models::{CharacterClass, PasswordGenerationOptions, MIN_PASSWORD_LENGTH};

/// Stateless generator over the fixed character tables.
///
/// Every call to [`generate`](PasswordGenerator::generate) draws from a fresh
/// OS-backed source, so one generator can be shared freely across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate(&self, options: &PasswordGenerationOptions) -> Result<String> {
        let mut rng = RngSource::os();
        self.generate_with(options, &mut rng)
    }

    /// Same as [`generate`](PasswordGenerator::generate) but draws from the given source.
    pub fn generate_with<R>(&self, options: &PasswordGenerationOptions, rng: &mut R) -> Result<String>
    where
        R: RandomSource + ?Sized,
    {
        if options.length < MIN_PASSWORD_LENGTH {
            return Err(GeneratorError::invalid_length(options.length));
        }

        let selected = options.selected_classes();
        if selected.is_empty() {
            return Err(GeneratorError::NoCharacterClassSelected);
        }

        log::debug!(
            "Generating password of length {} from {} character classes",
            options.length,
            selected.len()
        );

        let password = assemble(&selected, options.length, rng)?;
        Ok(password.into_iter().collect())
    }
}

// One character per class in order, filled from the joined tables, then shuffled.
// Never truncates: the result is at least `classes.len()` long.
pub(crate) fn assemble<R>(classes: &[CharacterClass], length: usize, rng: &mut R) -> Result<Vec<char>>
where
    R: RandomSource + ?Sized,
{
    let all_chars: Vec<char> = classes.iter().flat_map(|class| class.chars().chars()).collect();

    let mut password = Vec::with_capacity(length.max(classes.len()));
    for class in classes {
        let set: Vec<char> = class.chars().chars().collect();
        password.push(pick_random_char(&set, rng)?);
    }

    while password.len() < length {
        password.push(pick_random_char(&all_chars, rng)?);
    }

    Ok(shuffle(&password, rng))
}

/// Picks one element of `set` with probability `1 / set.len()`.
pub fn pick_random_char<R>(set: &[char], rng: &mut R) -> Result<char>
where
    R: RandomSource + ?Sized,
{
    if set.is_empty() {
        return Err(GeneratorError::EmptySet);
    }
    Ok(set[rng.next_index(set.len())])
}

/// Fisher-Yates shuffle into a new vector; the input is left untouched.
pub fn shuffle<T, R>(sequence: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    let mut shuffled = sequence.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.next_index(i + 1);
        shuffled.swap(i, j);
    }
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, VecDeque};

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    // Replays a fixed list of indices, checking each against its bound.
    struct ScriptedSource {
        indices: VecDeque<usize>,
        bounds: Vec<usize>,
    }

    impl ScriptedSource {
        fn new(indices: &[usize]) -> Self {
            Self { indices: indices.iter().copied().collect(), bounds: Vec::new() }
        }
    }

    impl RandomSource for ScriptedSource {
        fn next_unit(&mut self) -> f64 {
            0.0
        }

        fn next_index(&mut self, bound: usize) -> usize {
            self.bounds.push(bound);
            let index = self.indices.pop_front().expect("script exhausted");
            assert!(index < bound, "scripted index {} out of bound {}", index, bound);
            index
        }
    }

    fn seeded(seed: u64) -> RngSource<ChaCha8Rng> {
        RngSource::new(ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn test_exact_output_with_scripted_source() {
        let options = PasswordGenerationOptions {
            length: 4,
            include_uppercase: false,
            include_numbers: false,
            include_symbols: false,
            ..PasswordGenerationOptions::default()
        };
        // seed 'a', fill 'b' 'c' 'd', then swaps (3,0) (2,2) (1,0)
        let mut rng = ScriptedSource::new(&[0, 1, 2, 3, 0, 2, 0]);
        let password = PasswordGenerator::new().generate_with(&options, &mut rng).unwrap();
        assert_eq!(password, "bdca");
        assert_eq!(rng.bounds, vec![26, 26, 26, 26, 4, 3, 2]);
        assert!(rng.indices.is_empty());
    }

    #[test]
    fn test_seed_one_per_class_in_declaration_order() {
        let options = PasswordGenerationOptions::with_length(4);
        let mut rng = ScriptedSource::new(&[0, 0, 0, 0, 3, 2, 1]);
        let password = PasswordGenerator::new().generate_with(&options, &mut rng).unwrap();
        assert_eq!(password, "aA0!");
        assert_eq!(&rng.bounds[..4], &[26, 26, 10, 26]);

        let mut rng = ScriptedSource::new(&[0, 0, 0, 0, 0, 0, 0]);
        let password = PasswordGenerator::new().generate_with(&options, &mut rng).unwrap();
        assert_eq!(password, "A0!a");
    }

    #[test]
    fn test_fill_draws_from_joined_tables() {
        let options = PasswordGenerationOptions {
            length: 5,
            include_lowercase: false,
            include_uppercase: false,
            ..PasswordGenerationOptions::default()
        };
        // seeds '9' and '?', fill index 10 of "0123456789!@#..." is '!'
        let mut rng = ScriptedSource::new(&[9, 25, 10, 10, 10, 0, 0, 0, 0]);
        let password = PasswordGenerator::new().generate_with(&options, &mut rng).unwrap();
        assert_eq!(rng.bounds[2], 36);
        let mut sorted: Vec<char> = password.chars().collect();
        sorted.sort_unstable();
        assert_eq!(sorted, vec!['!', '!', '!', '9', '?']);
    }

    #[test]
    fn test_rejects_short_length_before_drawing() {
        let mut rng = ScriptedSource::new(&[]);
        let err = PasswordGenerator::new()
            .generate_with(&PasswordGenerationOptions::with_length(3), &mut rng)
            .unwrap_err();
        assert_eq!(err, GeneratorError::InvalidLength { length: 3, min: 4 });
        assert!(rng.bounds.is_empty());
    }

    #[test]
    fn test_rejects_no_classes_before_drawing() {
        let options = PasswordGenerationOptions {
            length: 10,
            include_lowercase: false,
            include_uppercase: false,
            include_numbers: false,
            include_symbols: false,
        };
        let mut rng = ScriptedSource::new(&[]);
        let err = PasswordGenerator::new().generate_with(&options, &mut rng).unwrap_err();
        assert_eq!(err, GeneratorError::NoCharacterClassSelected);
        assert!(rng.bounds.is_empty());
    }

    #[test]
    fn test_length_checked_before_classes() {
        let options = PasswordGenerationOptions {
            length: 1,
            include_lowercase: false,
            include_uppercase: false,
            include_numbers: false,
            include_symbols: false,
        };
        let err = PasswordGenerator::new().generate(&options).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidLength { .. }));
    }

    #[test]
    fn test_assemble_does_not_truncate_below_class_count() {
        let mut rng = seeded(3);
        let password = assemble(&CharacterClass::ALL, 2, &mut rng).unwrap();
        assert_eq!(password.len(), 4);
        for class in CharacterClass::ALL {
            assert_eq!(password.iter().filter(|c| class.contains(**c)).count(), 1);
        }
    }

    #[test]
    fn test_pick_random_char_empty_set() {
        let mut rng = seeded(1);
        assert_eq!(pick_random_char(&[], &mut rng), Err(GeneratorError::EmptySet));
    }

    #[test]
    fn test_pick_random_char_uses_scaled_unit() {
        struct Unit(f64);
        impl RandomSource for Unit {
            fn next_unit(&mut self) -> f64 {
                self.0
            }
        }
        let set = ['x', 'y', 'z'];
        assert_eq!(pick_random_char(&set, &mut Unit(0.1)), Ok('x'));
        assert_eq!(pick_random_char(&set, &mut Unit(0.5)), Ok('y'));
        assert_eq!(pick_random_char(&set, &mut Unit(0.9)), Ok('z'));
    }

    #[test]
    fn test_shuffle_leaves_input_untouched() {
        let input = vec![1, 2, 3, 4, 5];
        let mut rng = ScriptedSource::new(&[0, 0, 0, 0]);
        let output = shuffle(&input, &mut rng);
        assert_eq!(input, vec![1, 2, 3, 4, 5]);
        assert_eq!(output, vec![2, 3, 4, 5, 1]);
        assert_eq!(rng.bounds, vec![5, 4, 3, 2]);
    }

    #[test]
    fn test_shuffle_trivial_inputs() {
        let mut rng = ScriptedSource::new(&[]);
        assert!(shuffle::<char, _>(&[], &mut rng).is_empty());
        assert_eq!(shuffle(&['q'], &mut rng), vec!['q']);
        assert!(rng.bounds.is_empty());
    }

    #[test]
    fn test_shuffle_reaches_every_permutation() {
        let mut rng = seeded(11);
        let mut counts: HashMap<Vec<char>, usize> = HashMap::new();
        for _ in 0..6000 {
            *counts.entry(shuffle(&['a', 'b', 'c'], &mut rng)).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        // expected 1000 each
        for count in counts.values() {
            assert!((800..1200).contains(count), "skewed permutation count {}", count);
        }
    }
}
