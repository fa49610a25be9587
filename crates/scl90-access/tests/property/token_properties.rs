use proptest::prelude::*;
use scl90_access::token::{derive, is_well_formed, verify};
use scl90_access::usage::{MarkOutcome, is_consumed, mark_consumed};
use scl90_storage::store::MemoryStore;

proptest! {
    #[test]
    fn derivation_is_deterministic_and_well_formed(order_id in "[0-9A-Za-z]{5,32}") {
        let first = derive(&order_id).unwrap();
        let second = derive(&order_id).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert!(is_well_formed(first.as_str()));
        prop_assert!(verify(&order_id, first.as_str()));
    }

    #[test]
    fn distinct_orders_get_distinct_tokens(a in "[0-9]{8,20}", b in "[0-9]{8,20}") {
        prop_assume!(a != b);
        prop_assert_ne!(derive(&a).unwrap(), derive(&b).unwrap());
    }

    #[test]
    fn uppercase_or_wrong_length_is_rejected(s in "[0-9A-F]{1,40}") {
        let expected = s.len() == 32 && !s.chars().any(|c| c.is_ascii_uppercase());
        prop_assert_eq!(is_well_formed(&s), expected);
    }

    #[test]
    fn marking_is_idempotent(order_id in "[0-9]{5,20}", repeats in 1usize..5) {
        let mut store = MemoryStore::new();
        let token = derive(&order_id).unwrap();
        let newly: usize = (0..repeats)
            .map(|_| usize::from(mark_consumed(&token, &mut store) == MarkOutcome::Recorded))
            .sum();
        prop_assert_eq!(newly, 1);
        prop_assert!(is_consumed(&token, &store));
        prop_assert_eq!(store.len(), 1);
    }
}
