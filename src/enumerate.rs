//! Exhaustive enumeration of the relations over a small base set.

use crate::{
    error::PowersetResult,
    flags::RelationFlags,
    powerset::{powerset, select, subset_count},
    relation::{Element, Pair, Relation},
};
use tracing::debug;

/// Every relation built from a subset of the full relation's pairs over `base`.
///
/// Each relation is built with [Relation::from_pairs], so its base is the set
/// of elements its own pairs mention. A base of `n` elements yields `2^(n*n)`
/// relations, starting with the empty one.
pub fn relations_over<E: Element>(
    base: impl IntoIterator<Item = E>,
) -> PowersetResult<impl Iterator<Item = Relation<E>>> {
    let pairs = Relation::full(base).to_pairs();
    let count = subset_count(pairs.len())?;

    debug!(
        pairs = pairs.len(),
        relations = count,
        "enumerating relations"
    );

    Ok((0..count).map(move |mask| Relation::from_pairs(select(&pairs, mask))))
}

/// Pairs of every relation over `base` along with its classification.
pub fn classify_all<E: Element>(
    base: impl IntoIterator<Item = E>,
) -> PowersetResult<Vec<(Vec<Pair<E>>, RelationFlags)>> {
    let pairs = Relation::full(base).to_pairs();

    let classified = powerset(&pairs)?
        .map(|subset| {
            let flags = Relation::from_pairs(subset.iter().cloned()).classify();
            (subset, flags)
        })
        .collect();

    Ok(classified)
}
