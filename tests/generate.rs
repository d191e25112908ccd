//! End-to-end generation through the public API.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use passforge::pass::{CharSet, DIGITS, Error, Generator, LOWERCASE, UPPERCASE};
use passforge::random::{RandomError, RandomSource, Sequence, SystemRandom};

const SYMBOLS: &str = r#"~!@#$%^&{}[]|\;:'",./?*()-_=+"#;

fn four_sets() -> Generator {
    Generator::builder()
        .with_charset(LOWERCASE, 1)
        .with_charset(UPPERCASE, 2)
        .with_charset(DIGITS, 3)
        .with_charset(SYMBOLS, 4)
        .build()
        .unwrap()
}

fn count_in(password: &[char], set: &str) -> usize {
    password.iter().filter(|c| set.contains(**c)).count()
}

#[test]
fn build_without_sets_fails() {
    assert!(matches!(Generator::builder().build(), Err(Error::NoCharacters)));
}

#[test]
fn build_with_only_empty_sets_fails() {
    let result = Generator::builder()
        .with_charset("", 3)
        .with_chars(Vec::new(), 0)
        .build();
    assert!(matches!(result, Err(Error::NoCharacters)));
}

#[test]
fn max_below_set_minimums_fails() {
    assert!(matches!(
        four_sets().generate(8, 9),
        Err(Error::InvalidLength { required: 10, .. })
    ));
}

#[test]
fn max_below_min_fails() {
    assert!(matches!(
        four_sets().generate(20, 19),
        Err(Error::InvalidLength { min: 20, max: 19, .. })
    ));
}

#[test]
fn every_password_meets_length_and_set_minimums() {
    let generator = four_sets();
    assert_eq!(generator.min_total(), 10);

    for _ in 0..10_000 {
        let p = generator.generate(8, 20).unwrap();
        assert!((10..=20).contains(&p.len()), "length {}", p.len());
        assert!(count_in(&p, LOWERCASE) >= 1);
        assert!(count_in(&p, UPPERCASE) >= 2);
        assert!(count_in(&p, DIGITS) >= 3);
        assert!(count_in(&p, SYMBOLS) >= 4);
    }
}

#[test]
fn stronger_caller_min_is_kept() {
    let generator = four_sets();
    for _ in 0..1_000 {
        let len = generator.generate(15, 18).unwrap().len();
        assert!((15..=18).contains(&len));
    }
}

#[test]
fn every_length_in_range_is_reachable() {
    let generator = four_sets();
    let lengths: HashSet<usize> = (0..2_000)
        .map(|_| generator.generate(0, 14).unwrap().len())
        .collect();
    assert_eq!(lengths, (10..=14).collect());
}

#[test]
fn zero_length_is_allowed_without_minimums() {
    let generator = Generator::builder().with_charset("ab", 0).build().unwrap();
    let p = generator.generate(0, 0).unwrap();
    assert!(p.is_empty());
    assert_eq!(p.to_string(), "");
}

#[test]
fn configuration_is_stable_across_calls() {
    let generator = four_sets();
    let before: Vec<CharSet> = generator.charsets().to_vec();

    for _ in 0..5_000 {
        generator.generate(10, 30).unwrap();
    }

    assert_eq!(generator.charsets(), before.as_slice());
    assert_eq!(generator.min_total(), 10);
    assert_eq!(generator.pool_size(), 26 + 26 + 10 + SYMBOLS.chars().count());
}

#[test]
fn sets_may_exceed_their_minimum() {
    let generator = Generator::builder()
        .with_charset("a", 1)
        .with_charset("b", 0)
        .build()
        .unwrap();

    let most_a = (0..200)
        .map(|_| count_in(&generator.generate(10, 10).unwrap(), "a"))
        .max()
        .unwrap();
    assert!(most_a > 1);
}

#[test]
fn scripted_source_reproduces_a_password() {
    let generator = Generator::builder()
        .with_charset(DIGITS, 2)
        .with_charset("xyz", 0)
        .with_random(Sequence::new([
            1, // length 3 from [2, 4]
            7, 4, // minimum digits: '7', '4'
            11, // pool index 11 -> 'y'
            0, 1, // shuffle: keep, swap 1 and 2
        ]))
        .build()
        .unwrap();

    let p = generator.generate(0, 4).unwrap();
    assert_eq!(p.to_string(), "7y4");
    assert_eq!(generator.random().bounds(), vec![3, 10, 10, 13, 3, 2]);
    assert_eq!(generator.random().remaining(), 0);
}

struct Broken;

impl RandomSource for Broken {
    fn next(&self, _bound: usize) -> Result<usize, RandomError> {
        Err(RandomError::msg("no entropy"))
    }
}

#[test]
fn source_failures_surface_as_random_errors() {
    let generator = Generator::builder()
        .with_charset(LOWERCASE, 1)
        .with_random(Broken)
        .build()
        .unwrap();

    let err = generator.generate(4, 8).unwrap_err();
    assert!(matches!(err, Error::Random(_)));
    assert!(err.to_string().contains("no entropy"));
}

#[test]
fn one_source_can_back_several_generators() {
    let shared = Arc::new(SystemRandom);
    let lower = Generator::builder()
        .with_charset(LOWERCASE, 0)
        .with_random(Arc::clone(&shared))
        .build()
        .unwrap();
    let digits = Generator::builder()
        .with_charset(DIGITS, 0)
        .with_random(shared)
        .build()
        .unwrap();

    assert!(lower.generate(8, 8).unwrap().iter().all(char::is_ascii_lowercase));
    assert!(digits.generate(8, 8).unwrap().iter().all(char::is_ascii_digit));
}

#[test]
fn generator_is_shareable_across_threads() {
    let generator = Arc::new(four_sets());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let generator = Arc::clone(&generator);
            thread::spawn(move || {
                for _ in 0..500 {
                    let p = generator.generate(12, 16).unwrap();
                    assert!((12..=16).contains(&p.len()));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn empty_set_with_a_minimum_fails_to_build() {
    let result = Generator::builder()
        .with_charset(LOWERCASE, 0)
        .with_charset("", 2)
        .build();
    assert!(matches!(result, Err(Error::EmptyCharSet { index: 1, min: 2 })));
}
