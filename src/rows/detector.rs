/// Decides whether a row's visual representation must be rebuilt.
///
/// This is the only redraw gate: a row is repainted if and only if
/// `changed` returns `true` for its old/new pair.
pub trait RowChangeDetector<T: ?Sized> {
    fn changed(&self, old: &T, new: &T) -> bool;
}

/// Deep field equality. Rows are unchanged only when every field compares
/// equal, so an optional field going from absent to present is a change.
#[derive(Debug, Default, Copy, Clone)]
pub struct StructuralChange;

impl<T: PartialEq + ?Sized> RowChangeDetector<T> for StructuralChange {
    fn changed(&self, old: &T, new: &T) -> bool {
        old != new
    }
}

impl<T: ?Sized, F> RowChangeDetector<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn changed(&self, old: &T, new: &T) -> bool {
        self(old, new)
    }
}
