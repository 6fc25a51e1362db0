use proptest::prelude::*;

use pushguid::alphabet::{ASCENDING_CHARS, DESCENDING_CHARS};
use pushguid::{decode, Generator, Order};

// 63^8: timestamps at or above this wrap.
const TIMESTAMP_LIMIT: u64 = 248_155_780_267_521;

proptest! {
    #[test]
    fn ids_are_twenty_alphabet_chars(t in 0..TIMESTAMP_LIMIT, seed in any::<u64>()) {
        let generator = Generator::with_seed(seed);
        let asc = generator.ascending_from(t);
        let desc = generator.descending_from(t);

        prop_assert_eq!(asc.len(), 20);
        prop_assert_eq!(desc.len(), 20);
        prop_assert!(asc.bytes().all(|b| ASCENDING_CHARS.contains(&b)));
        prop_assert!(desc.bytes().all(|b| DESCENDING_CHARS.contains(&b)));
    }

    #[test]
    fn later_timestamps_sort_in_order(
        a in 0..TIMESTAMP_LIMIT,
        b in 0..TIMESTAMP_LIMIT,
        seed in any::<u64>(),
    ) {
        prop_assume!(a != b);
        let (earlier, later) = if a < b { (a, b) } else { (b, a) };

        let generator = Generator::with_seed(seed);
        prop_assert!(generator.ascending_from(earlier) < generator.ascending_from(later));
        prop_assert!(generator.descending_from(earlier) > generator.descending_from(later));
    }

    #[test]
    fn decoded_timestamp_matches_input(t in 0..TIMESTAMP_LIMIT, descending in any::<bool>()) {
        let order = if descending { Order::Descending } else { Order::Ascending };
        let id = Generator::with_seed(0).generate_from(t, order);
        prop_assert_eq!(decode::timestamp_ms(&id, order).unwrap(), t);
    }

    #[test]
    fn oversized_timestamps_wrap(t in 0..TIMESTAMP_LIMIT) {
        let generator = Generator::with_seed(0);
        let wrapped = generator.ascending_from(t + TIMESTAMP_LIMIT);
        let plain = generator.ascending_from(t);
        prop_assert_eq!(&wrapped[..8], &plain[..8]);
    }

    #[test]
    fn foreign_strings_are_rejected(s in "[^0-9A-Za-z_]{1,4}[0-9a-z]{16}") {
        prop_assert!(!decode::is_valid(&s, Order::Ascending));
    }
}
