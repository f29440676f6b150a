//! Demonstration workloads for the Cadence harness.
//!
//! Each profile returns a ready-to-run candidate list comparing two or
//! more ways of computing the same thing:
//!
//! - [`summation_profile`]: indexed loop vs iterator sum vs fold
//! - [`allocation_profile`]: growing a vector vs preallocating it
//! - [`fibonacci_profile`]: naive recursion vs memoized vs iterative
//! - [`checked_mean_profile`]: a fallible workload, one input always fails
//!
//! Input data comes from [`random_values`], seeded so runs are repeatable.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt;

use cadence_core::Candidate;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `n` values uniformly distributed in `[0, 1)`, deterministic per seed.
pub fn random_values(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| (rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64)
        .collect()
}

// ── Summation ───────────────────────────────────────────────────

/// Sum with an explicit index loop.
#[allow(clippy::needless_range_loop)]
pub fn sum_indexed(data: &[f64]) -> f64 {
    let mut total = 0.0;
    for i in 0..data.len() {
        total += data[i];
    }
    total
}

/// Sum with the iterator adaptor.
pub fn sum_iter(data: &[f64]) -> f64 {
    data.iter().sum()
}

/// Sum with an explicit fold.
pub fn sum_fold(data: &[f64]) -> f64 {
    data.iter().fold(0.0, |acc, x| acc + x)
}

/// Three equivalent summations over `data`.
pub fn summation_profile(data: &[f64]) -> Vec<Candidate<'_>> {
    vec![
        Candidate::new("sum_indexed", move || sum_indexed(data)),
        Candidate::new("sum_iter", move || sum_iter(data)),
        Candidate::new("sum_fold", move || sum_fold(data)),
    ]
}

// ── Allocation ──────────────────────────────────────────────────

/// Squares of `0..n`, pushed onto a vector that starts empty.
pub fn grow_vec(n: usize) -> Vec<u64> {
    let mut v = Vec::new();
    for i in 0..n as u64 {
        v.push(i * i);
    }
    v
}

/// Squares of `0..n`, pushed onto a vector with exact capacity.
pub fn prealloc_vec(n: usize) -> Vec<u64> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n as u64 {
        v.push(i * i);
    }
    v
}

/// Growing vs preallocated vector construction of length `n`.
pub fn allocation_profile(n: usize) -> Vec<Candidate<'static>> {
    vec![
        Candidate::new("grow", move || grow_vec(n)),
        Candidate::new("prealloc", move || prealloc_vec(n)),
        Candidate::new("collect", move || (0..n as u64).map(|i| i * i).collect::<Vec<_>>()),
    ]
}

// ── Fibonacci ───────────────────────────────────────────────────

/// Exponential-time recursive Fibonacci.
pub fn fib_naive(n: u32) -> u64 {
    if n < 2 {
        n as u64
    } else {
        fib_naive(n - 1) + fib_naive(n - 2)
    }
}

/// Recursive Fibonacci with a memo table. `memo` must hold at least
/// `n + 1` entries, zero meaning "not yet computed".
pub fn fib_memo(n: u32, memo: &mut [u64]) -> u64 {
    if n < 2 {
        return n as u64;
    }
    let i = n as usize;
    if memo[i] == 0 {
        memo[i] = fib_memo(n - 1, memo) + fib_memo(n - 2, memo);
    }
    memo[i]
}

/// Linear-time iterative Fibonacci.
pub fn fib_iterative(n: u32) -> u64 {
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        let next = a.wrapping_add(b);
        a = b;
        b = next;
    }
    a
}

/// Three Fibonacci implementations computing `fib(n)`.
///
/// The memoized candidate starts from a fresh table on every call so
/// each repetition does the same work.
pub fn fibonacci_profile(n: u32) -> Vec<Candidate<'static>> {
    vec![
        Candidate::new("fib_naive", move || fib_naive(n)),
        Candidate::new("fib_memo", move || {
            let mut memo = vec![0u64; n as usize + 1];
            fib_memo(n, &mut memo)
        }),
        Candidate::new("fib_iterative", move || fib_iterative(n)),
    ]
}

// ── Checked mean ────────────────────────────────────────────────

/// Returned by [`checked_mean`] for an empty slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyInput;

impl fmt::Display for EmptyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mean of empty input")
    }
}

impl std::error::Error for EmptyInput {}

/// Arithmetic mean, failing on empty input instead of returning NaN.
pub fn checked_mean(data: &[f64]) -> Result<f64, EmptyInput> {
    if data.is_empty() {
        return Err(EmptyInput);
    }
    Ok(sum_iter(data) / data.len() as f64)
}

/// Mean of `data` and of an empty slice. The second candidate fails on
/// every call and reports no samples.
pub fn checked_mean_profile(data: &[f64]) -> Vec<Candidate<'_>> {
    vec![
        Candidate::fallible("mean", move || checked_mean(data)),
        Candidate::fallible("mean_empty", || checked_mean(&[])),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_values_deterministic_and_in_range() {
        let a = random_values(1000, 42);
        let b = random_values(1000, 42);
        assert_eq!(a, b);
        assert!(a.iter().all(|&x| (0.0..1.0).contains(&x)));
        assert_ne!(a, random_values(1000, 43));
    }

    #[test]
    fn summations_agree() {
        let data = random_values(512, 7);
        let reference = sum_iter(&data);
        assert!((sum_indexed(&data) - reference).abs() < 1e-9);
        assert!((sum_fold(&data) - reference).abs() < 1e-9);
    }

    #[test]
    fn vector_builders_agree() {
        assert_eq!(grow_vec(100), prealloc_vec(100));
        assert_eq!(prealloc_vec(100).capacity(), 100);
    }

    #[test]
    fn fibonacci_variants_agree() {
        for n in 0..25 {
            let mut memo = vec![0u64; n as usize + 1];
            let expected = fib_iterative(n);
            assert_eq!(fib_naive(n), expected, "n = {n}");
            assert_eq!(fib_memo(n, &mut memo), expected, "n = {n}");
        }
        assert_eq!(fib_iterative(90), 2_880_067_194_370_816_120);
    }

    #[test]
    fn checked_mean_rejects_empty() {
        assert_eq!(checked_mean(&[]), Err(EmptyInput));
        assert_eq!(checked_mean(&[1.0, 3.0]), Ok(2.0));
    }

    #[test]
    fn profiles_have_distinct_labels() {
        let data = random_values(8, 1);
        for profile in [
            summation_profile(&data),
            allocation_profile(8),
            fibonacci_profile(10),
            checked_mean_profile(&data),
        ] {
            let mut labels: Vec<String> = profile.iter().map(|c| c.label().to_string()).collect();
            let n = labels.len();
            labels.sort();
            labels.dedup();
            assert_eq!(labels.len(), n);
        }
    }

    #[test]
    fn profile_candidates_invoke_cleanly() {
        let data = random_values(8, 1);
        for mut c in summation_profile(&data)
            .into_iter()
            .chain(fibonacci_profile(12))
            .chain(allocation_profile(16))
        {
            assert!(c.invoke().is_ok(), "{} failed", c.label());
        }
        let mut mean = checked_mean_profile(&data);
        assert!(mean[0].invoke().is_ok());
        assert!(mean[1].invoke().is_err());
    }
}
