//! Subset enumeration of finite sequences.
//!
//! Subsets are enumerated by bit mask: bit `i` of the mask selects `seq[i]`.
//! Mask `0` is the empty subset and the all-ones mask is the full sequence.

use crate::error::{PowersetError, PowersetResult};
use std::iter::FusedIterator;
use tracing::debug;

/// Longest sequence whose subset count fits in a `usize`.
pub const MAX_LEN: usize = usize::BITS as usize - 1;

/// Iterator over every subset of a slice, see [powerset].
#[derive(Debug, Clone)]
pub struct Powerset<'a, T> {
    seq: &'a [T],
    next: usize,
    end: usize,
}

impl<'a, T: Clone> Powerset<'a, T> {
    fn new(seq: &'a [T]) -> PowersetResult<Self> {
        Ok(Self {
            seq,
            next: 0,
            end: subset_count(seq.len())?,
        })
    }
}

/// Number of subsets of a sequence of length `len`.
pub(crate) fn subset_count(len: usize) -> PowersetResult<usize> {
    if len > MAX_LEN {
        return Err(PowersetError::TooLarge { len, max: MAX_LEN });
    }

    Ok(1 << len)
}

/// Elements of `seq` selected by the bits of `mask`, in order.
pub(crate) fn select<T: Clone>(seq: &[T], mask: usize) -> Vec<T> {
    seq.iter()
        .enumerate()
        .filter(|&(i, _)| mask & (1 << i) != 0)
        .map(|(_, x)| x.clone())
        .collect()
}

impl<T: Clone> Iterator for Powerset<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.end {
            return None;
        }

        let subset = select(self.seq, self.next);
        self.next += 1;
        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for Powerset<'_, T> {}

impl<T: Clone> FusedIterator for Powerset<'_, T> {}

/// Returns an iterator over all `2^n` subsets of `seq`.
///
/// Elements keep their relative order inside each subset. The empty subset
/// comes first and the full sequence last.
///
/// ```
/// use relations::powerset::powerset;
///
/// let subsets: Vec<Vec<char>> = powerset(&['a', 'b']).unwrap().collect();
/// assert_eq!(subsets, vec![vec![], vec!['a'], vec!['b'], vec!['a', 'b']]);
/// ```
pub fn powerset<T: Clone>(seq: &[T]) -> PowersetResult<Powerset<'_, T>> {
    let subsets = Powerset::new(seq)?;
    debug!(
        len = seq.len(),
        subsets = subsets.len(),
        "powerset"
    );
    Ok(subsets)
}
