use std::{num::NonZeroUsize, ops::Range, thread};

/// A contiguous half-open range of indices `[start, end)` assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkRange {
    pub start: usize,
    pub end: usize,
}

impl ChunkRange {
    /// Creates a new `ChunkRange`.
    ///
    /// # Arguments
    /// * `start` - The inclusive lower index.
    /// * `end` - The exclusive upper index, must not be lower than `start`.
    ///
    /// # Returns
    /// A new `ChunkRange` instance.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Returns the amount of indices in this range.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns this chunk as a standard range, handy for slicing.
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Splits `[0, n)` into exactly `threads` contiguous chunks.
///
/// Every chunk but the last holds `n / threads` indices, the last one absorbs the remainder.
/// Whenever `n < threads` the leading chunks are empty and callers must skip them.
///
/// # Arguments
/// * `n` - The size of the index space.
/// * `threads` - The amount of chunks to produce.
///
/// # Returns
/// The chunks sorted by their start index.
pub fn partition(n: usize, threads: NonZeroUsize) -> Vec<ChunkRange> {
    let threads = threads.get();
    let chunk = n / threads;

    (0..threads)
        .map(|t| {
            let start = t * chunk;
            let end = if t == threads - 1 { n } else { start + chunk };
            ChunkRange::new(start, end)
        })
        .collect()
}

/// Returns the hardware concurrency reported by the system, never less than one.
pub fn available_threads() -> NonZeroUsize {
    thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threads(t: usize) -> NonZeroUsize {
        NonZeroUsize::new(t).unwrap()
    }

    fn assert_covers(chunks: &[ChunkRange], n: usize) {
        assert_eq!(chunks.first().map(|c| c.start), Some(0));
        assert_eq!(chunks.last().map(|c| c.end), Some(n));

        for pair in chunks.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }

        assert_eq!(chunks.iter().map(ChunkRange::len).sum::<usize>(), n);
    }

    #[test]
    fn exact() {
        let chunks = partition(12, threads(4));

        assert_eq!(chunks.len(), 4);
        assert!(chunks.iter().all(|c| c.len() == 3));
        assert_covers(&chunks, 12);
    }

    #[test]
    fn remainder_goes_to_last() {
        let chunks = partition(10, threads(3));

        assert_eq!(
            chunks,
            [
                ChunkRange::new(0, 3),
                ChunkRange::new(3, 6),
                ChunkRange::new(6, 10)
            ]
        );
    }

    #[test]
    fn fewer_items_than_threads() {
        let chunks = partition(3, threads(8));

        assert_eq!(chunks.len(), 8);
        assert!(chunks[..7].iter().all(ChunkRange::is_empty));
        assert_eq!(chunks[7], ChunkRange::new(0, 3));
        assert_covers(&chunks, 3);
    }

    #[test]
    fn empty() {
        assert_eq!(partition(0, threads(1)), [ChunkRange::new(0, 0)]);

        let chunks = partition(0, threads(5));
        assert_eq!(chunks.len(), 5);
        assert!(chunks.iter().all(ChunkRange::is_empty));
    }

    #[test]
    fn exhaustive_small_grid() {
        for n in 0..64 {
            for t in 1..17 {
                let chunks = partition(n, threads(t));
                assert_eq!(chunks.len(), t);
                assert_covers(&chunks, n);
            }
        }
    }

    #[test]
    fn available_threads_is_positive() {
        assert!(available_threads().get() >= 1);
    }
}
