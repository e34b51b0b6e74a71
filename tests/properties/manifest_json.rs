//! Property tests for manifest parsing.

use proptest::prelude::*;

use assetprune::Manifest;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing never panics on arbitrary input.
    #[test]
    fn property_from_json_never_panics(s in "(?s).{0,512}") {
        let _ = Manifest::from_json(&s);
    }

    /// PROPERTY: single-file chunks come back in document order.
    #[test]
    fn property_single_entries_keep_order(
        files in proptest::collection::vec("[a-z]{1,8}\\.[0-9a-f]{4}\\.js", 0..10)
    ) {
        let members: Vec<String> = files
            .iter()
            .enumerate()
            .map(|(i, f)| format!("\"c{}\": \"{}\"", i, f))
            .collect();
        let doc = format!("{{\"assetsByChunkName\": {{{}}}}}", members.join(","));

        let manifest = Manifest::from_json(&doc).unwrap();
        let parsed: Vec<&str> = manifest.files().collect();

        prop_assert_eq!(parsed, files.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
