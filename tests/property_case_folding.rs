//! Property tests for breed key folding and miss counting.

mod common;

use proptest::prelude::*;
use std::sync::Arc;

use breedcache::{BreedKey, BreedLookup, CachingLookup};
use common::ScriptedLookup;

/// Re-case `name` using `flips` as an upper/lower mask.
fn recase(name: &str, flips: &[bool]) -> String {
    name.chars()
        .zip(flips.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn case_variants_share_one_key(
        name in "[a-zA-Z]{1,16}",
        flips in prop::collection::vec(any::<bool>(), 1..16),
    ) {
        let variant = recase(&name, &flips);
        prop_assert_eq!(BreedKey::normalize(&name), BreedKey::normalize(&variant));
    }

    #[test]
    fn normalize_is_idempotent(name in "\\PC{0,24}") {
        let once = BreedKey::normalize(&name);
        let twice = BreedKey::normalize(once.as_str());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn case_variants_cost_one_delegate_call(
        name in "[a-zA-Z]{1,16}",
        flips in prop::collection::vec(any::<bool>(), 1..16),
        repeats in 1usize..6,
    ) {
        let variant = recase(&name, &flips);
        let delegate = Arc::new(
            ScriptedLookup::new().with_breed(&name.to_ascii_lowercase(), &["sub"]),
        );
        let cache = CachingLookup::new(delegate);

        let calls = tokio_test::block_on(async {
            cache.fetch(&name).await.expect("breed is scripted");
            for _ in 0..repeats {
                cache.fetch(&variant).await.expect("breed is cached");
            }
            cache.calls_made()
        });
        prop_assert_eq!(calls, 1);
    }

    #[test]
    fn failures_cost_one_call_each(name in "[a-z]{1,16}", attempts in 1u64..8) {
        let cache = CachingLookup::new(Arc::new(ScriptedLookup::new()));

        let calls = tokio_test::block_on(async {
            for _ in 0..attempts {
                assert!(cache.fetch(&name).await.is_err());
            }
            cache.calls_made()
        });
        prop_assert_eq!(calls, attempts);
    }
}
