mod split;

use std::thread;

use log::trace;

pub(crate) use split::{split_rows_mut, split_slice_mut};

use crate::{config::Dispatch, partition::ChunkRange};

/// A unit of work: the worker's index in the partition, the chunk it owns and its
/// exclusive part of the output.
pub(crate) struct Job<P> {
    pub worker: usize,
    pub range: ChunkRange,
    pub part: P,
}

/// Runs `work` once per job and returns only after every job has finished.
///
/// Each job owns a disjoint part of the output, so the workers never synchronize. A panic
/// inside a worker is propagated to the caller once the remaining workers are joined.
///
/// # Arguments
/// * `dispatch` - Where to run the workers.
/// * `jobs` - The jobs to run, one worker each.
/// * `work` - The per-job computation.
pub(crate) fn fork_join<P, F>(dispatch: Dispatch, jobs: Vec<Job<P>>, work: F)
where
    P: Send,
    F: Fn(usize, ChunkRange, P) + Sync,
{
    let work = &work;

    match dispatch {
        Dispatch::Spawn => thread::scope(|s| {
            for Job {
                worker,
                range,
                part,
            } in jobs
            {
                trace!(worker = worker, start = range.start, end = range.end; "spawning worker");
                s.spawn(move || work(worker, range, part));
            }
        }),
        Dispatch::Pool => rayon::scope(|s| {
            for Job {
                worker,
                range,
                part,
            } in jobs
            {
                trace!(worker = worker, start = range.start, end = range.end; "queueing worker");
                s.spawn(move |_| work(worker, range, part));
            }
        }),
    }
}
