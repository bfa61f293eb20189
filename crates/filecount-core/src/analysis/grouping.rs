/// Grouping of scan results by file count.
///
/// Failed results are dropped here and never reach the report. Groups come
/// out ordered by descending count; within a group, paths keep the order in
/// which they were first seen.
use crate::model::{CountGroup, Report, ScanResult, ScanTarget};
use std::collections::BTreeMap;

/// Merge scan results into a [`Report`].
///
/// Pure: no I/O. Input order only affects the order of paths inside a group.
pub fn aggregate<I>(results: I) -> Report
where
    I: IntoIterator<Item = ScanResult>,
{
    let mut by_count: BTreeMap<u64, Vec<ScanTarget>> = BTreeMap::new();
    for result in results.into_iter().filter(ScanResult::is_success) {
        by_count.entry(result.count).or_default().push(result.target);
    }

    let groups = by_count
        .into_iter()
        .rev()
        .map(|(count, paths)| CountGroup { count, paths })
        .collect();
    Report::new(groups)
}
