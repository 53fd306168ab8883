//! Property tests for bundle resolution against a real directory tree.

use proptest::prelude::*;

use playdeploy::domain::services::{ArtifactError, ArtifactResolver};
use playdeploy::infrastructure::LocalFs;

fn file_stem() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._-]{0,15}").unwrap()
}

fn sibling_name() -> impl Strategy<Value = String> {
    prop_oneof![
        file_stem().prop_map(|s| format!("{s}.aab")),
        file_stem().prop_map(|s| format!("{s}.apk")),
        file_stem().prop_map(|s| format!("{s}.AAB")),
        file_stem().prop_map(|s| format!(".{s}.aab")),
        file_stem(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: an existing `.aab` file resolves to itself whatever its siblings are.
    #[test]
    fn property_direct_file_resolves_to_itself(
        stem in file_stem(),
        siblings in proptest::collection::vec(sibling_name(), 0..6)
    ) {
        let dir = tempfile::tempdir().unwrap();
        for name in &siblings {
            let _ = std::fs::write(dir.path().join(name), b"x");
        }
        let target = dir.path().join(format!("{stem}.aab"));
        std::fs::write(&target, b"bundle").unwrap();

        let resolved = ArtifactResolver::new(LocalFs::new()).resolve(&target).unwrap();

        prop_assert_eq!(resolved.path(), target.as_path());
        prop_assert_eq!(resolved.size(), 6);
    }

    /// PROPERTY: a directory resolves iff it holds exactly one visible `*.aab` file.
    #[test]
    fn property_directory_needs_exactly_one_bundle(
        names in proptest::collection::btree_set(sibling_name(), 0..6)
    ) {
        let dir = tempfile::tempdir().unwrap();
        for name in &names {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        let bundles: Vec<&String> = names
            .iter()
            .filter(|n| n.ends_with(".aab") && !n.starts_with('.'))
            .collect();

        let result = ArtifactResolver::new(LocalFs::new()).resolve(dir.path());

        match bundles.len() {
            0 => prop_assert!(matches!(result, Err(ArtifactError::NoBundleInDirectory(_)))),
            1 => {
                let resolved = result.unwrap();
                let expected = dir.path().join(bundles[0]);
                prop_assert_eq!(resolved.path(), expected.as_path());
            }
            n => match result {
                Err(ArtifactError::AmbiguousBundles { candidates, .. }) => {
                    prop_assert_eq!(candidates.len(), n);
                }
                other => prop_assert!(false, "expected AmbiguousBundles, got {:?}", other),
            },
        }
    }
}
