pub mod internal;
pub mod subject_verb;

/// Both values are set and differ. An unset side never conflicts.
pub(crate) fn mismatch<T: Copy + PartialEq>(left: Option<T>, right: Option<T>) -> Option<(T, T)> {
    match (left, right) {
        (Some(l), Some(r)) if l != r => Some((l, r)),
        _ => None,
    }
}
