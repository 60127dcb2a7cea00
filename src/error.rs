use std::fmt::Debug;
use thiserror::Error;

/// Error returned by the fallible [Relation](crate::relation::Relation) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelationError<E: Debug> {
    /// Key has no entry in the relation.
    #[error("Key {0:?} has no entry in the relation")]
    KeyNotPresent(E),

    /// Key has an entry, but the value is not among its targets.
    #[error("{value:?} is not related to {key:?}")]
    ElementNotRelated { key: E, value: E },

    /// Element is not part of the declared base set (strict mode only).
    #[error("Element {0:?} is outside the declared base set")]
    ElementOutsideBase(E),
}

pub type RelationResult<T, E> = Result<T, RelationError<E>>;

/// Error returned if a sequence is too long to enumerate its subsets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PowersetError {
    #[error("Sequence of length {len} has too many subsets, at most {max} elements are supported")]
    TooLarge { len: usize, max: usize },
}

pub type PowersetResult<T> = Result<T, PowersetError>;

#[inline(always)]
pub(crate) fn not_related_err<T, E: Debug>(key: E, value: E) -> RelationResult<T, E> {
    Err(RelationError::ElementNotRelated { key, value })
}
