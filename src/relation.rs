use crate::{
    desc::{BaseMode, RelationDesc, RelationKind},
    error::{RelationError, RelationResult, not_related_err},
    flags::RelationFlags,
};
use indexmap::{IndexMap, IndexSet};
use std::{fmt::Debug, hash::Hash, rc::Rc};
use tracing::{debug, trace};

pub trait Element: Clone + Eq + Hash + Debug {}
impl<T: Clone + Eq + Hash + Debug> Element for T {}

/// One edge `(x, y)` of a relation.
pub type Pair<E> = (E, E);

/// Finite binary relation over a declared base set.
///
/// Each key maps to the set of elements it relates to. Keys without an entry
/// relate to nothing. Iteration follows insertion order.
///
/// The base set is shared (not copied) by every relation derived from this one
/// through [inverse](Self::inverse), [intersect](Self::intersect) or
/// [compose](Self::compose).
#[derive(Clone)]
pub struct Relation<E> {
    base: Rc<IndexSet<E>>,
    adjacency: IndexMap<E, Rc<IndexSet<E>>>,
    mode: BaseMode,
    /// Returned by [targets](Self::targets) for keys without an entry.
    none: IndexSet<E>,
}

impl<E: Element> Relation<E> {
    fn with_base(base: Rc<IndexSet<E>>, mode: BaseMode) -> Self {
        Self {
            base,
            adjacency: IndexMap::new(),
            mode,
            none: IndexSet::new(),
        }
    }

    pub(crate) fn from_desc(desc: RelationDesc, base: Rc<IndexSet<E>>) -> Self {
        let mut rel = Self::with_base(base, desc.get_base_mode());

        match desc.get_kind() {
            RelationKind::Empty => {}
            RelationKind::Identity => {
                for x in rel.base.iter() {
                    rel.adjacency
                        .insert(x.clone(), Rc::new(IndexSet::from([x.clone()])));
                }
            }
            RelationKind::Full => {
                // every key shares the base allocation until it is mutated
                for x in rel.base.iter() {
                    rel.adjacency.insert(x.clone(), Rc::clone(&rel.base));
                }
            }
        }

        rel
    }

    /// Relation derived from `self`: same base, same mode, no pairs.
    fn derived(&self) -> Self {
        Self::with_base(Rc::clone(&self.base), self.mode)
    }

    pub fn empty(base: impl IntoIterator<Item = E>) -> Self {
        RelationDesc::new().build(base)
    }

    pub fn identity(base: impl IntoIterator<Item = E>) -> Self {
        RelationDesc::new().kind(RelationKind::Identity).build(base)
    }

    /// Relation where every element of `base` relates to every element of `base`.
    pub fn full(base: impl IntoIterator<Item = E>) -> Self {
        RelationDesc::new().kind(RelationKind::Full).build(base)
    }

    /// Builds a relation holding exactly the given pairs.
    ///
    /// The base is inferred as every element appearing in any pair, in order
    /// of first appearance. Duplicate pairs collapse.
    pub fn from_pairs(pairs: impl IntoIterator<Item = Pair<E>>) -> Self {
        let pairs: Vec<Pair<E>> = pairs.into_iter().collect();

        let mut base = IndexSet::new();
        for (x, y) in &pairs {
            base.insert(x.clone());
            base.insert(y.clone());
        }

        debug!(
            pairs = pairs.len(),
            base = base.len(),
            "relation from pairs"
        );

        let mut rel = Self::with_base(Rc::new(base), BaseMode::Advisory);
        for (x, y) in pairs {
            rel.insert(x, y);
        }

        rel
    }

    #[inline]
    pub fn base(&self) -> &IndexSet<E> {
        &self.base
    }

    #[inline]
    pub fn base_mode(&self) -> BaseMode {
        self.mode
    }

    /// Returns true if both relations hold the very same base set allocation.
    #[inline]
    pub fn shares_base(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.base, &other.base)
    }

    /// Elements `key` relates to. Empty if `key` has no entry.
    ///
    /// Never creates an entry for `key`.
    pub fn targets(&self, key: &E) -> &IndexSet<E> {
        self.adjacency.get(key).map_or(&self.none, |targets| &**targets)
    }

    /// Keys with an entry, including keys whose targets were all removed.
    pub fn keys(&self) -> impl Iterator<Item = &E> {
        self.adjacency.keys()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&E, &E)> {
        self.adjacency
            .iter()
            .flat_map(|(k, targets)| targets.iter().map(move |v| (k, v)))
    }

    pub fn to_pairs(&self) -> Vec<Pair<E>> {
        self.pairs().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.adjacency.values().map(|targets| targets.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.values().all(|targets| targets.is_empty())
    }

    fn insert(&mut self, key: E, value: E) -> bool {
        let targets = self.adjacency.entry(key).or_default();

        if targets.contains(&value) {
            return false;
        }

        Rc::make_mut(targets).insert(value)
    }

    /// Relates `key` to `value`.
    /// Returns true if the pair was not already present.
    ///
    /// In [BaseMode::Strict] both elements must belong to the base, otherwise
    /// the relation is left untouched and [RelationError::ElementOutsideBase]
    /// is returned.
    pub fn add(&mut self, key: E, value: E) -> RelationResult<bool, E> {
        if self.mode == BaseMode::Strict {
            let outside = [&key, &value]
                .into_iter()
                .find(|x| !self.base.contains(*x));

            if let Some(outside) = outside {
                trace!(element = ?outside, "rejected element outside base");
                return Err(RelationError::ElementOutsideBase(outside.clone()));
            }
        }

        Ok(self.insert(key, value))
    }

    /// Removes the pair `(key, value)`. The entry for `key` stays, even if empty.
    pub fn remove(&mut self, key: &E, value: &E) -> RelationResult<(), E> {
        let Some(targets) = self.adjacency.get_mut(key) else {
            trace!(?key, "remove from key without entry");
            return Err(RelationError::KeyNotPresent(key.clone()));
        };

        if !targets.contains(value) {
            trace!(?key, ?value, "remove of unrelated element");
            return not_related_err(key.clone(), value.clone());
        }

        Rc::make_mut(targets).shift_remove(value);
        Ok(())
    }

    #[inline]
    pub fn contains(&self, key: &E, value: &E) -> bool {
        self.adjacency
            .get(key)
            .is_some_and(|targets| targets.contains(value))
    }

    /// Relation holding `(y, x)` for every `(x, y)` of `self`.
    pub fn inverse(&self) -> Self {
        let mut inv = self.derived();
        for (k, v) in self.pairs() {
            inv.insert(v.clone(), k.clone());
        }
        inv
    }

    /// Pairs present in both relations.
    ///
    /// Only keys with an entry in both operands get an entry in the result.
    pub fn intersect(&self, other: &Self) -> Self {
        let mut isect = self.derived();

        for (k, targets) in &self.adjacency {
            if let Some(others) = other.adjacency.get(k) {
                let common: IndexSet<E> = targets.intersection(&**others).cloned().collect();
                isect.adjacency.insert(k.clone(), Rc::new(common));
            }
        }

        isect
    }

    /// Returns true if every pair of `self` is a pair of `other`.
    ///
    /// Keys of `self` without targets impose nothing, whether or not `other`
    /// has an entry for them.
    pub fn subset(&self, other: &Self) -> bool {
        self.adjacency
            .iter()
            .all(|(k, targets)| targets.is_subset(other.targets(k)))
    }

    /// Computes `self ∘ other`: `(k, y)` holds iff some `x` has `(k, x)` in
    /// `other` and `(x, y)` in `self`.
    pub fn compose(&self, other: &Self) -> Self {
        let mut comp = self.derived();
        for (k, x) in other.pairs() {
            for y in self.targets(x) {
                comp.insert(k.clone(), y.clone());
            }
        }
        comp
    }

    fn identity_over_base(&self) -> Self {
        let desc = RelationDesc::new()
            .kind(RelationKind::Identity)
            .base_mode(self.mode);
        Self::from_desc(desc, Rc::clone(&self.base))
    }

    pub fn reflexive(&self) -> bool {
        self.identity_over_base().subset(self)
    }

    pub fn symmetric(&self) -> bool {
        self.subset(&self.inverse())
    }

    pub fn transitive(&self) -> bool {
        self.compose(self).subset(self)
    }

    pub fn antisymmetric(&self) -> bool {
        self.intersect(&self.inverse())
            .subset(&self.identity_over_base())
    }

    /// Evaluates all four classical properties.
    pub fn classify(&self) -> RelationFlags {
        let mut flags = RelationFlags::empty();
        flags.set(RelationFlags::REFLEXIVE, self.reflexive());
        flags.set(RelationFlags::SYMMETRIC, self.symmetric());
        flags.set(RelationFlags::TRANSITIVE, self.transitive());
        flags.set(RelationFlags::ANTISYMMETRIC, self.antisymmetric());

        trace!(pairs = self.len(), %flags, "classified relation");
        flags
    }

    pub fn is_equivalence(&self) -> bool {
        self.reflexive() && self.symmetric() && self.transitive()
    }

    pub fn is_partial_order(&self) -> bool {
        self.reflexive() && self.antisymmetric() && self.transitive()
    }

    /// Checks that every key and every target belongs to the base.
    pub fn validate(&self) -> RelationResult<(), E> {
        let outside = self
            .adjacency
            .iter()
            .flat_map(|(k, targets)| std::iter::once(k).chain(targets.iter()))
            .find(|x| !self.base.contains(*x));

        match outside {
            Some(x) => Err(RelationError::ElementOutsideBase(x.clone())),
            None => Ok(()),
        }
    }
}

impl<E: Element> PartialEq for Relation<E> {
    /// Pair-set equality, independent of insertion order and of empty entries.
    fn eq(&self, other: &Self) -> bool {
        self.subset(other) && other.subset(self)
    }
}

impl<E: Element> Eq for Relation<E> {}

impl<E: Element> Debug for Relation<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Relation")
            .field("base", &self.base)
            .field("pairs", &self.to_pairs())
            .finish()
    }
}

impl<E: Element> FromIterator<Pair<E>> for Relation<E> {
    fn from_iter<I: IntoIterator<Item = Pair<E>>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
