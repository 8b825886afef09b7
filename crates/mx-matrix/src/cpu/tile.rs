use std::num::NonZeroUsize;
use std::ops::Range;

/// Split `[0, n)` into consecutive half-open tiles of `block_size` indices.
///
/// The last tile is clamped to `n` and is shorter than `block_size` whenever
/// `n` is not a multiple of it. A block size of `n` or more yields a single
/// tile covering the whole range; `n == 0` yields no tiles.
pub fn tiles(n: usize, block_size: NonZeroUsize) -> impl Iterator<Item = Range<usize>> {
    let step = block_size.get();
    (0..n)
        .step_by(step)
        .map(move |start| start..start.saturating_add(step).min(n))
}

/// Number of tiles [`tiles`] yields along one axis.
pub fn tile_count(n: usize, block_size: NonZeroUsize) -> usize {
    n.div_ceil(block_size.get())
}
