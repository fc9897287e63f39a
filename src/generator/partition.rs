use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

/// Split `soc_rows` constraint rows into a sequence of second-order cone
/// sizes summing to exactly `soc_rows`.
///
/// While more than `max_q` rows remain unassigned, cone sizes are drawn
/// uniformly from `[1, max_q]`.  Whatever is left at the end (at most
/// `max_q` rows, possibly exactly `max_q`) becomes a single trailing
/// cone, so no row is ever dropped.  A zero row budget yields an empty
/// sequence.
///
/// The random source is owned by the caller and passed in by mutable
/// reference; a fixed seed reproduces the same partition exactly.
/// `max_q >= 1` is a caller obligation whenever `soc_rows > 0`, enforced
/// upstream by [`ProblemDimensions::new`](super::ProblemDimensions::new).
pub fn partition_soc_rows<R: Rng>(soc_rows: usize, max_q: usize, rng: &mut R) -> Vec<usize> {
    debug_assert!(max_q >= 1 || soc_rows == 0);

    let mut sizes = Vec::new();
    let mut remaining = soc_rows;

    while remaining > max_q {
        let size = rng.gen_range(1..=max_q);
        sizes.push(size);
        remaining -= size;
    }
    if remaining > 0 {
        sizes.push(remaining);
    }

    sizes
}

/// Seed value derived from the wall clock, for callers that do not supply
/// their own.  The chosen seed should always be echoed alongside the
/// generated structure so the run can be reproduced.
pub fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}
