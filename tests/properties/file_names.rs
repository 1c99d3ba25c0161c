//! Property tests for entry point discovery.

use std::path::Path;

use proptest::prelude::*;

use recipebook::domain::services::{is_inline_target, resolve_triplet, select_targets};

fn base_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,24}").unwrap()
}

fn hash() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-f0-9]{4}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every well-formed name is selected and resolves back to itself.
    #[test]
    fn property_well_formed_names_resolve(base in base_name(), hash in hash()) {
        let name = format!("{base}-{hash}.html");

        prop_assert!(is_inline_target(&name));
        let triplet = resolve_triplet(Path::new("dist"), &name).expect("resolves");
        prop_assert_eq!(triplet.html_file_name(), name.clone());
        prop_assert_eq!(triplet.hash().as_str(), hash.as_str());
        prop_assert_eq!(format!("{}-{}", triplet.base_name(), triplet.hash()), triplet.stem());
    }

    /// PROPERTY: names without the `.html` suffix are never selected.
    #[test]
    fn property_other_extensions_rejected(
        base in base_name(),
        hash in hash(),
        ext in "(js|css|map|htm|HTML|json)",
    ) {
        let name = format!("{base}-{hash}.{ext}");
        prop_assert!(!is_inline_target(&name));
    }

    /// PROPERTY: uppercase hex or the wrong hash length is never selected.
    #[test]
    fn property_malformed_hash_rejected(
        base in base_name(),
        hash in "([A-F0-9]{4}|[a-f0-9]{1,3}|[a-f0-9]{5,8})",
    ) {
        // Four plain digits are a valid hash whatever the case pattern said.
        prop_assume!(!(hash.len() == 4 && hash.chars().all(|c| c.is_ascii_digit())));

        let name = format!("{base}-{hash}.html");
        prop_assert!(!is_inline_target(&name));
        prop_assert!(resolve_triplet(Path::new("dist"), &name).is_none());
    }

    /// PROPERTY: selection is a sorted subset of its input and never panics.
    #[test]
    fn property_select_is_sorted_subset(names in proptest::collection::vec("(?s).{0,32}", 0..16)) {
        let selected = select_targets(names.clone());

        prop_assert!(selected.windows(2).all(|w| w[0] <= w[1]));
        for name in &selected {
            prop_assert!(names.contains(name));
            prop_assert!(is_inline_target(name));
        }
    }
}
