use crate::{powerset::powerset, relation::Relation};
use proptest::prelude::*;
use std::collections::HashSet;

fn pairs() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0u8..5, 0u8..5), 0..14)
}

fn base() -> impl Strategy<Value = HashSet<u8>> {
    prop::collection::hash_set(0u8..32, 0..6)
}

fn pair_set(rel: &Relation<u8>) -> HashSet<(u8, u8)> {
    rel.to_pairs().into_iter().collect()
}

proptest! {
    /// Property: identity is reflexive, symmetric, transitive and antisymmetric
    #[test]
    fn identity_laws(base in base()) {
        let id = Relation::identity(base);

        prop_assert!(id.reflexive());
        prop_assert!(id.symmetric());
        prop_assert!(id.transitive());
        prop_assert!(id.antisymmetric());
    }

    /// Property: full is an equivalence, antisymmetric only on tiny bases
    #[test]
    fn full_laws(base in base()) {
        let size = base.len();
        let full = Relation::full(base);

        prop_assert!(full.reflexive());
        prop_assert!(full.symmetric());
        prop_assert!(full.transitive());
        prop_assert_eq!(full.antisymmetric(), size <= 1);
    }

    #[test]
    fn inverse_involution(pairs in pairs()) {
        let rel = Relation::from_pairs(pairs);
        prop_assert_eq!(pair_set(&rel.inverse().inverse()), pair_set(&rel));
    }

    /// Property: identity over the base is a two-sided unit of composition
    #[test]
    fn compose_with_identity(pairs in pairs()) {
        let rel = Relation::from_pairs(pairs);
        let id = Relation::identity(rel.base().iter().copied());

        prop_assert_eq!(pair_set(&rel.compose(&id)), pair_set(&rel));
        prop_assert_eq!(pair_set(&id.compose(&rel)), pair_set(&rel));
    }

    #[test]
    fn pairs_roundtrip(pairs in pairs()) {
        let rel = Relation::from_pairs(pairs.clone());
        let expected: HashSet<(u8, u8)> = pairs.into_iter().collect();

        prop_assert_eq!(pair_set(&rel), expected);
        prop_assert_eq!(Relation::from_pairs(rel.to_pairs()), rel);
    }

    #[test]
    fn subset_antisymmetry(left in pairs(), right in pairs()) {
        let left = Relation::from_pairs(left);
        let right = Relation::from_pairs(right);

        if left.subset(&right) && right.subset(&left) {
            prop_assert_eq!(pair_set(&left), pair_set(&right));
        }

        let reversed = Relation::from_pairs(left.to_pairs().into_iter().rev());
        prop_assert!(left.subset(&reversed) && reversed.subset(&left));
    }

    /// Property: predicates agree with their first-order definitions
    #[test]
    fn predicates_match_definitions(pairs in pairs()) {
        let rel = Relation::from_pairs(pairs);
        let set = pair_set(&rel);

        let reflexive = rel.base().iter().all(|x| set.contains(&(*x, *x)));
        let symmetric = set.iter().all(|&(x, y)| set.contains(&(y, x)));
        let transitive = set.iter().all(|&(x, y)| {
            set.iter()
                .filter(|&&(w, _)| w == y)
                .all(|&(_, z)| set.contains(&(x, z)))
        });
        let antisymmetric = set.iter().all(|&(x, y)| x == y || !set.contains(&(y, x)));

        prop_assert_eq!(rel.reflexive(), reflexive);
        prop_assert_eq!(rel.symmetric(), symmetric);
        prop_assert_eq!(rel.transitive(), transitive);
        prop_assert_eq!(rel.antisymmetric(), antisymmetric);
    }

    #[test]
    fn powerset_size(seq in prop::collection::vec(any::<u16>(), 0..10)) {
        let subsets: Vec<Vec<u16>> = powerset(&seq).unwrap().collect();

        prop_assert_eq!(subsets.len(), 1 << seq.len());
        prop_assert_eq!(subsets.iter().filter(|s| s.is_empty()).count(), 1);
        prop_assert_eq!(subsets.iter().filter(|s| **s == seq).count(), 1);
    }
}
