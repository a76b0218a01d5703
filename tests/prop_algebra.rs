use bitset::BitSet;
use proptest::prelude::*;

fn set_from(capacity: usize, elements: &[usize]) -> BitSet {
    let mut set = BitSet::new(capacity).expect("bitset allocation");
    set.insert_many(elements.iter().copied());
    set
}

// Capacities up to a few words; elements deliberately range past the
// largest capacity so the out-of-range no-op gets exercised too.
fn arb_set() -> impl Strategy<Value = BitSet> {
    (0usize..=200).prop_flat_map(|capacity| {
        proptest::collection::vec(0usize..=260, 0..64)
            .prop_map(move |elements| set_from(capacity, &elements))
    })
}

proptest! {
    #[test]
    fn union_commutes(a in arb_set(), b in arb_set()) {
        prop_assert_eq!(a.union(&b).unwrap(), b.union(&a).unwrap());
    }

    #[test]
    fn intersection_commutes(a in arb_set(), b in arb_set()) {
        prop_assert_eq!(a.intersection(&b).unwrap(), b.intersection(&a).unwrap());
    }

    #[test]
    fn double_complement_is_identity(a in arb_set()) {
        let back = a.complement().unwrap().complement().unwrap();
        prop_assert_eq!(&back, &a);
    }

    #[test]
    fn mutual_subset_is_equality(a in arb_set(), b in arb_set()) {
        prop_assert_eq!(a.is_subset(&b) && b.is_subset(&a), a == b);
    }

    #[test]
    fn symmetric_difference_identity(a in arb_set(), b in arb_set()) {
        let direct = a.symmetric_difference(&b).unwrap();
        let via_differences = a
            .difference(&b)
            .unwrap()
            .union(&b.difference(&a).unwrap())
            .unwrap();
        prop_assert_eq!(direct, via_differences);
    }

    #[test]
    fn intersection_is_subset_of_both(a in arb_set(), b in arb_set()) {
        let both = a.intersection(&b).unwrap();
        prop_assert!(both.is_subset(&a));
        prop_assert!(both.is_subset(&b));
    }

    #[test]
    fn union_is_superset_of_both(a in arb_set(), b in arb_set()) {
        let either = a.union(&b).unwrap();
        prop_assert!(either.is_superset(&a));
        prop_assert!(either.is_superset(&b));
    }

    #[test]
    fn de_morgan_at_equal_capacity(
        capacity in 0usize..=200,
        xs in proptest::collection::vec(0usize..=260, 0..64),
        ys in proptest::collection::vec(0usize..=260, 0..64),
    ) {
        let a = set_from(capacity, &xs);
        let b = set_from(capacity, &ys);
        let complement_of_union = a.union(&b).unwrap().complement().unwrap();
        let intersection_of_complements = a
            .complement()
            .unwrap()
            .intersection(&b.complement().unwrap())
            .unwrap();
        prop_assert_eq!(complement_of_union, intersection_of_complements);
    }

    #[test]
    fn members_stay_under_capacity(a in arb_set()) {
        prop_assert!(a.iter().all(|element| element < a.capacity()));
        prop_assert_eq!(a.len(), a.iter().count());
    }

    #[test]
    fn complement_holds_exactly_the_non_members(a in arb_set()) {
        let rest = a.complement().unwrap();
        prop_assert_eq!(rest.capacity(), a.capacity());
        for element in 0..a.capacity() {
            prop_assert_eq!(rest.contains(element), !a.contains(element));
        }
        prop_assert_eq!(a.len() + rest.len(), a.capacity());
    }
}
