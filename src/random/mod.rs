use rand::Rng;

/// Uniform integer in the closed range `[min, max]`.
///
/// Reversed bounds are swapped rather than rejected.
pub fn random_in_range(min: i64, max: i64) -> i64 {
    random_in_range_with(&mut rand::thread_rng(), min, max)
}

pub fn random_in_range_with<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(lo..=hi)
}
