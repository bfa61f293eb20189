/// The grouped, ordered report built from successful scan results.
use super::ScanTarget;

/// All paths that share one file count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountGroup {
    pub count: u64,
    /// Paths in order of first appearance during grouping. The order is
    /// stable for a given input but carries no meaning.
    pub paths: Vec<ScanTarget>,
}

/// Count groups ordered by strictly descending count.
///
/// Built only by [`crate::analysis::aggregate`], which guarantees the
/// ordering and that no group is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    groups: Vec<CountGroup>,
}

impl Report {
    pub(crate) fn new(groups: Vec<CountGroup>) -> Self {
        debug_assert!(
            groups.windows(2).all(|w| w[0].count > w[1].count),
            "report groups must be strictly descending by count"
        );
        Self { groups }
    }

    pub fn groups(&self) -> &[CountGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// One `(count, path)` pair per reported path, in report order.
    pub fn rows(&self) -> impl Iterator<Item = (u64, &ScanTarget)> + '_ {
        self.groups
            .iter()
            .flat_map(|group| group.paths.iter().map(move |path| (group.count, path)))
    }

    /// Sum of the counts of every reported path.
    pub fn total_files(&self) -> u64 {
        self.groups
            .iter()
            .map(|group| group.count * group.paths.len() as u64)
            .sum()
    }

    /// Number of reported paths across all groups.
    pub fn path_count(&self) -> usize {
        self.groups.iter().map(|group| group.paths.len()).sum()
    }
}
