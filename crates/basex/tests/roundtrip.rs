//! Property suite for the conversion core.

use basex::Alphabet;
use proptest::{collection::vec, prelude::*};

/// Random valid alphabets: 2 to 94 distinct printable symbols in random
/// order. Space is outside the pool, matching the decoder's guards.
fn alphabet_strategy() -> impl Strategy<Value = Alphabet> {
    let pool: Vec<char> = ('!'..='~').collect();
    proptest::sample::subsequence(pool, 2..=94)
        .prop_shuffle()
        .prop_map(|symbols| Alphabet::new(&symbols.into_iter().collect::<String>()).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn base58_round_trips(bytes in vec(any::<u8>(), 0..1024)) {
        let base58 = Alphabet::base58();
        let encoded = base58.encode(&bytes);
        prop_assert_eq!(base58.decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn every_radix_round_trips(alphabet in alphabet_strategy(), bytes in vec(any::<u8>(), 0..256)) {
        let encoded = alphabet.encode(&bytes);
        prop_assert_eq!(alphabet.decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn zero_run_maps_to_leader_run(zeros in 0usize..8, tail in vec(1u8..=255, 0..64)) {
        let base58 = Alphabet::base58();
        let input: Vec<u8> = std::iter::repeat_n(0u8, zeros).chain(tail).collect();
        let encoded = base58.encode(&input);
        prop_assert_eq!(encoded.chars().take_while(|&ch| ch == '1').count(), zeros);

        // The leader count survives a decode and re-encode unchanged.
        let decoded = base58.decode(&encoded).unwrap();
        prop_assert_eq!(base58.encode(&decoded), encoded.as_str());
        prop_assert_eq!(decoded, input);
    }
}

// Large enough that a scratch estimate shortfall would have panicked long
// before the final comparison.
#[test]
fn multi_kilobyte_round_trip() {
    let base58 = Alphabet::base58();
    let bytes: Vec<u8> = (0u32..4096).map(|i| (i % 251) as u8).collect();
    let encoded = base58.encode(&bytes);
    assert_eq!(base58.decode(&encoded).unwrap(), bytes);
}
