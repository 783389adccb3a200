//! Property tests for version computation and durability.

use proptest::prelude::*;
use tempfile::tempdir;

use typepack::VersionStore;

fn package_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_-]{0,24}").unwrap()
}

fn content_hash() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9a-f]{8,40}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: computing the next version twice without an intervening
    /// `record_update` returns the same value and persists nothing.
    #[test]
    fn property_compute_is_a_pure_read(
        name in package_name(),
        hash in content_hash(),
        force in any::<bool>()
    ) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("versions.json");
        let store = VersionStore::load(&path).unwrap();

        let first = store.compute_next_version(&name, &hash, force);
        let second = store.compute_next_version(&name, &hash, force);
        prop_assert_eq!(first, second);
        prop_assert!(!path.exists());
    }

    /// PROPERTY: after a commit, the next version is the stored one or the
    /// stored one plus exactly one - and which of the two follows directly
    /// from the fingerprint comparison and the force flag.
    #[test]
    fn property_bump_is_zero_or_one(
        name in package_name(),
        first_hash in content_hash(),
        second_hash in content_hash(),
        force in any::<bool>()
    ) {
        let dir = tempdir().unwrap();
        let mut store = VersionStore::load(dir.path().join("versions.json")).unwrap();

        let v1 = store.compute_next_version(&name, &first_hash, false);
        prop_assert_eq!(v1, 1);
        store.record_update(&name, v1, &first_hash).unwrap();

        let v2 = store.compute_next_version(&name, &second_hash, force);
        if force || second_hash != first_hash {
            prop_assert_eq!(v2, v1 + 1);
        } else {
            prop_assert_eq!(v2, v1);
        }
    }

    /// PROPERTY: `record_update` followed by a fresh load round-trips the
    /// record exactly.
    #[test]
    fn property_reload_round_trips(
        name in package_name(),
        hash in content_hash(),
        version in 0u32..10_000
    ) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("versions.json");

        let mut store = VersionStore::load(&path).unwrap();
        store.record_update(&name, version, &hash).unwrap();

        let reloaded = VersionStore::load(&path).unwrap();
        let record = reloaded.record(&name).unwrap();
        prop_assert_eq!(record.last_version, version);
        prop_assert_eq!(record.last_content_hash.as_str(), hash.as_str());
    }
}
