use std::ops::Range;

use super::detector::RowChangeDetector;

/// Per-row outcome of a diff.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RowMark {
    /// No counterpart in the old view: paint for the first time.
    New,
    /// The detector reported a change: repaint.
    Changed,
    /// Keep the existing paint.
    Unchanged,
}

impl RowMark {
    pub fn needs_paint(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Result of comparing two row sequences index by index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowDiff {
    marks: Vec<RowMark>,
    removed: Range<usize>,
}

impl RowDiff {
    /// One mark per row of the new sequence.
    pub fn marks(&self) -> &[RowMark] {
        &self.marks
    }

    pub fn mark(&self, index: usize) -> Option<RowMark> {
        self.marks.get(index).copied()
    }

    /// Old indices with no counterpart after a shrink.
    pub fn removed(&self) -> Range<usize> {
        self.removed.clone()
    }

    /// Indices of the new sequence that must be (re)painted, ascending.
    pub fn repaint_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.marks
            .iter()
            .enumerate()
            .filter(|(_, m)| m.needs_paint())
            .map(|(i, _)| i)
    }

    pub fn repaint_count(&self) -> usize {
        self.marks.iter().filter(|m| m.needs_paint()).count()
    }

    pub fn changed_count(&self) -> usize {
        self.marks
            .iter()
            .filter(|m| **m == RowMark::Changed)
            .count()
    }

    pub fn new_count(&self) -> usize {
        self.marks.iter().filter(|m| **m == RowMark::New).count()
    }

    /// True when nothing needs painting and nothing was removed.
    pub fn is_clean(&self) -> bool {
        self.removed.is_empty() && self.marks.iter().all(|m| !m.needs_paint())
    }
}

/// Diff `new` against `old` index by index.
///
/// - `old == None`: every row is `New`.
/// - `i < old.len()`: `Changed` iff `detector.changed(&old[i], &new[i])`.
/// - `i >= old.len()`: `New`.
/// - `old[new.len()..]` is reported as removed.
pub fn diff_rows<T, D>(old: Option<&[T]>, new: &[T], detector: &D) -> RowDiff
where
    D: RowChangeDetector<T> + ?Sized,
{
    let old = old.unwrap_or(&[]);

    let marks = new
        .iter()
        .enumerate()
        .map(|(i, row)| match old.get(i) {
            Some(prev) if detector.changed(prev, row) => RowMark::Changed,
            Some(_) => RowMark::Unchanged,
            None => RowMark::New,
        })
        .collect();

    let removed = new.len().min(old.len())..old.len();

    RowDiff { marks, removed }
}
