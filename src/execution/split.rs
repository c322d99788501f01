use std::mem;

use ndarray::{ArrayViewMut2, Axis};

use super::Job;
use crate::partition::ChunkRange;

/// Splits `out` into one disjoint mutable part per non-empty chunk.
///
/// # Arguments
/// * `out` - The output buffer, as long as the partitioned index space.
/// * `chunks` - Contiguous chunks covering `[0, out.len())`.
///
/// # Returns
/// The jobs to run, empty chunks are skipped.
pub(crate) fn split_slice_mut<'a, T>(
    out: &'a mut [T],
    chunks: &[ChunkRange],
) -> Vec<Job<&'a mut [T]>> {
    let mut rest = out;
    let mut jobs = Vec::with_capacity(chunks.len());

    for (worker, &range) in chunks.iter().enumerate() {
        let (part, tail) = mem::take(&mut rest).split_at_mut(range.len());
        rest = tail;

        if !range.is_empty() {
            jobs.push(Job {
                worker,
                range,
                part,
            });
        }
    }

    jobs
}

/// Splits the rows of `out` into one disjoint mutable block per non-empty chunk.
///
/// # Arguments
/// * `out` - The output matrix view, with as many rows as the partitioned index space.
/// * `chunks` - Contiguous chunks covering `[0, out.nrows())`.
///
/// # Returns
/// The jobs to run, empty chunks are skipped.
pub(crate) fn split_rows_mut<'a>(
    out: ArrayViewMut2<'a, f64>,
    chunks: &[ChunkRange],
) -> Vec<Job<ArrayViewMut2<'a, f64>>> {
    let mut rest = out;
    let mut jobs = Vec::with_capacity(chunks.len());

    for (worker, &range) in chunks.iter().enumerate() {
        let (part, tail) = rest.split_at(Axis(0), range.len());
        rest = tail;

        if !range.is_empty() {
            jobs.push(Job {
                worker,
                range,
                part,
            });
        }
    }

    jobs
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use ndarray::Array2;

    use super::*;
    use crate::partition::partition;

    #[test]
    fn slice_skips_empty_chunks() {
        let mut out = [0.; 3];
        let chunks = partition(out.len(), NonZeroUsize::new(4).unwrap());
        let jobs = split_slice_mut(&mut out, &chunks);

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].worker, 3);
        assert_eq!(jobs[0].part.len(), 3);
    }

    #[test]
    fn rows_follow_chunks() {
        let mut out = Array2::<f64>::zeros((7, 2));
        let chunks = partition(7, NonZeroUsize::new(3).unwrap());
        let jobs = split_rows_mut(out.view_mut(), &chunks);

        let rows: Vec<_> = jobs.iter().map(|job| job.part.nrows()).collect();
        assert_eq!(rows, [2, 2, 3]);
        assert!(jobs.iter().all(|job| job.part.ncols() == 2));
    }
}
