//! Seeded `i32` inputs shared by the test harness and the benchmarks.
//!
//! Every random pattern of a process draws from the same seed, see [`random_init_seed`], so a
//! failure can be replayed with `OVERRIDE_SEED`.

use std::env;

use once_cell::sync::Lazy;
use rand::distributions::{Distribution, Standard, Uniform};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use zipf::ZipfDistribution;

/// Values spread over the whole `i32` domain, duplicates are rare.
pub fn random(len: usize) -> Vec<i32> {
    seeded_rng().sample_iter(Standard).take(len).collect()
}

/// Values drawn uniformly from `range`. A narrow range yields duplicate-heavy input.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    seeded_rng().sample_iter(range.into()).take(len).collect()
}

/// Values in `1..=len` following Zipf's law, a handful of keys make up most of the input.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    let Ok(dist) = ZipfDistribution::new(len.max(1), exponent) else {
        panic!("no zipf distribution for len {len} and exponent {exponent}");
    };

    dist.sample_iter(seeded_rng())
        .take(len)
        .map(|rank| rank as i32)
        .collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![42; len]
}

/// `0, 1, 0, 1, ...`
pub fn alternating(len: usize) -> Vec<i32> {
    [0, 1].into_iter().cycle().take(len).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len).map(|i| i as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len).rev().map(|i| i as i32).collect()
}

/// The seed every pattern of this process derives its values from.
///
/// Picked once per process, unless the `OVERRIDE_SEED` environment variable is set to a `u64`.
pub fn random_init_seed() -> u64 {
    static SEED: Lazy<u64> = Lazy::new(|| match env::var("OVERRIDE_SEED") {
        Ok(seed) => seed
            .trim()
            .parse()
            .unwrap_or_else(|err| panic!("OVERRIDE_SEED '{seed}' is not a valid u64: {err}")),
        Err(_) => thread_rng().gen(),
    });

    *SEED
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
