//! Property-based tests for the shortening pipeline.
//!
//! The generated tables map uppercase source code points to lowercase
//! output strings, so the mapped relation is acyclic by construction and
//! lowercase targets are already in normal form. Under that setup:
//!
//! 1. **Round trip**: normalizing the shortened string reproduces the
//!    target exactly.
//! 2. **Non-expansion**: the result is never longer than the target.
//! 3. **Identity**: targets containing no index key come back unchanged.
//! 4. **Idempotence**: optimizing the same reverse index twice yields the
//!    same shortcut index.
//! 5. **Determinism**: independently built shorteners agree on every
//!    target.

use idna_shorten::prelude::*;
use proptest::prelude::*;
use std::collections::BTreeMap;

fn arb_mappings() -> impl Strategy<Value = BTreeMap<char, String>> {
    prop::collection::btree_map(prop::char::range('A', 'Z'), "[a-z]{1,4}", 1..12)
}

fn arb_target() -> impl Strategy<Value = String> {
    "[a-z]{0,16}"
}

fn entries(mappings: &BTreeMap<char, String>) -> Vec<MappingEntry> {
    mappings
        .iter()
        .map(|(&codepoint, output)| MappingEntry {
            codepoint,
            output: output.clone(),
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn shortened_normalizes_back_to_target(
        mappings in arb_mappings(),
        target in arb_target(),
    ) {
        let entries = entries(&mappings);
        let table = MappingTable::from_entries(&entries);
        let reverse = ReverseIndex::from_entries(&entries);
        let shortener = Shortener::new(ShortcutIndex::from_reverse(&reverse));

        let shortened = shortener.shorten(&target).expect("search is infallible");
        prop_assert_eq!(
            table.normalize(&shortened),
            target,
            "shortened form must expand back into the target"
        );
    }

    #[test]
    fn shortening_never_expands(
        mappings in arb_mappings(),
        target in arb_target(),
    ) {
        let entries = entries(&mappings);
        let reverse = ReverseIndex::from_entries(&entries);
        let shortener = Shortener::new(ShortcutIndex::from_reverse(&reverse));

        let report = shortener.report(&target).expect("search is infallible");
        prop_assert!(report.shortened_chars <= report.original_chars);
    }

    #[test]
    fn unmatched_targets_come_back_unchanged(
        mappings in arb_mappings(),
        target in arb_target(),
    ) {
        let entries = entries(&mappings);
        let reverse = ReverseIndex::from_entries(&entries);
        let index = ShortcutIndex::from_reverse(&reverse);

        let any_key_occurs = index
            .entries()
            .iter()
            .any(|entry| target.contains(entry.long.as_str()));
        prop_assume!(!any_key_occurs);

        let shortener = Shortener::new(index);
        prop_assert_eq!(shortener.shorten(&target).expect("search"), target);
    }

    #[test]
    fn optimization_is_idempotent(mappings in arb_mappings()) {
        let entries = entries(&mappings);
        let reverse = ReverseIndex::from_entries(&entries);
        let once = ShortcutIndex::from_reverse(&reverse);
        let twice = ShortcutIndex::from_reverse(&reverse);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn independently_built_shorteners_agree(
        mappings in arb_mappings(),
        target in arb_target(),
    ) {
        let entries = entries(&mappings);

        let build = || {
            let reverse = ReverseIndex::from_entries(&entries);
            Shortener::new(ShortcutIndex::from_reverse(&reverse))
        };
        let first = build().shorten(&target).expect("search");
        let second = build().shorten(&target).expect("search");
        prop_assert_eq!(first, second);
    }
}
