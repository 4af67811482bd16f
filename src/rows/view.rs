use std::rc::{Rc, Weak};

use super::detector::RowChangeDetector;
use super::diff::{RowDiff, diff_rows};

/// An immutable ordered row snapshot.
///
/// `previous` is a weak pointer to the view this one superseded. It exists
/// for diffing only: once nothing else holds the old view it is released and
/// `previous()` returns `None`.
#[derive(Debug)]
pub struct RowView<T> {
    rows: Box<[T]>,
    previous: Weak<RowView<T>>,
}

impl<T> RowView<T> {
    /// Build the first view of a chain. There is no prior view, so every row
    /// diffs as new on its first paint. Empty input yields an empty view.
    pub fn create<I>(rows: I) -> Rc<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Rc::new(Self {
            rows: rows.into_iter().collect(),
            previous: Weak::new(),
        })
    }

    /// Build the view that supersedes `current`.
    ///
    /// `current` is left untouched; both views stay valid and can be rendered
    /// side by side while a transition is in flight.
    pub fn update<I>(current: &Rc<Self>, new_rows: I) -> Rc<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Rc::new(Self {
            rows: new_rows.into_iter().collect(),
            previous: Rc::downgrade(current),
        })
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The view this one superseded, if it is still alive.
    pub fn previous(&self) -> Option<Rc<Self>> {
        self.previous.upgrade()
    }

    /// Diff against the superseded view. When there is none (first view of
    /// the chain, or the old view was already released) every row is new.
    pub fn diff<D>(&self, detector: &D) -> RowDiff
    where
        D: RowChangeDetector<T>,
    {
        let previous = self.previous();
        self.diff_against(previous.as_deref(), detector)
    }

    /// Diff against an explicit prior view (`None` marks every row new).
    pub fn diff_against<D>(&self, previous: Option<&RowView<T>>, detector: &D) -> RowDiff
    where
        D: RowChangeDetector<T>,
    {
        diff_rows(previous.map(RowView::rows), &self.rows, detector)
    }
}
