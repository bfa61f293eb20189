/// Static work partitioning — splits scan targets into contiguous chunks,
/// one per worker.
///
/// Chunks are not balanced by file count (subdirectories can differ wildly
/// in size); the split only caps concurrency at the worker budget.
use crate::model::ScanTarget;
use std::num::NonZeroUsize;

/// A contiguous run of targets assigned to exactly one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkChunk<'a> {
    /// 1-based worker id, in chunk order.
    pub worker: usize,
    /// Never empty. Order is preserved from the input list.
    pub targets: &'a [ScanTarget],
}

/// Split `targets` into at most `min(budget, targets.len())` non-empty
/// chunks of `ceil(N / W_eff)` targets each; the last chunk may be shorter.
///
/// Concatenating the chunks in order reconstructs `targets` exactly.
pub fn partition(targets: &[ScanTarget], budget: NonZeroUsize) -> Vec<WorkChunk<'_>> {
    if targets.is_empty() {
        return Vec::new();
    }

    let workers = budget.get().min(targets.len());
    let chunk_size = targets.len().div_ceil(workers);

    targets
        .chunks(chunk_size)
        .enumerate()
        .map(|(i, targets)| WorkChunk {
            worker: i + 1,
            targets,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::path::Path;

    fn targets(n: usize) -> Vec<ScanTarget> {
        (0..n)
            .map(|i| ScanTarget::resolve(Path::new(&format!("dir{i:03}"))).unwrap())
            .collect()
    }

    fn budget(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn no_targets_no_chunks() {
        assert!(partition(&[], budget(8)).is_empty());
    }

    #[test]
    fn never_more_workers_than_targets() {
        let input = targets(3);
        let chunks = partition(&input, budget(8));
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|c| c.targets.len() == 1));
    }

    #[test]
    fn last_chunk_may_be_shorter() {
        let input = targets(10);
        let chunks = partition(&input, budget(4));
        let sizes: Vec<usize> = chunks.iter().map(|c| c.targets.len()).collect();
        assert_eq!(sizes, vec![3, 3, 3, 1]);
        let ids: Vec<usize> = chunks.iter().map(|c| c.worker).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn ceiling_can_leave_workers_idle() {
        // ceil(5 / 4) = 2, so only three chunks are needed.
        let input = targets(5);
        let sizes: Vec<usize> = partition(&input, budget(4))
            .iter()
            .map(|c| c.targets.len())
            .collect();
        assert_eq!(sizes, vec![2, 2, 1]);
    }

    #[test]
    fn single_worker_takes_everything() {
        let input = targets(7);
        let chunks = partition(&input, budget(1));
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].targets, input.as_slice());
    }

    proptest! {
        #[test]
        fn chunks_partition_the_input(n in 0usize..200, w in 1usize..32) {
            let input = targets(n);
            let chunks = partition(&input, budget(w));

            prop_assert!(chunks.len() <= w.min(n));
            prop_assert!(chunks.iter().all(|c| !c.targets.is_empty()));

            let rebuilt: Vec<ScanTarget> = chunks
                .iter()
                .flat_map(|c| c.targets.iter().cloned())
                .collect();
            prop_assert_eq!(rebuilt, input);
        }
    }
}
