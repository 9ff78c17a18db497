//! Property-based tests for group sets and stores.

use super::groups::GroupSet;
use super::key::{env_key, name_for_key};
use super::memory::MemorySettings;
use super::scope::WriteScope;
use super::store::SettingsStore;
use proptest::prelude::*;

fn group_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

fn groups_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(group_strategy(), 0..6)
}

fn setting_name_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z0-9]{0,7}", 1..3).prop_map(|parts| parts.join("."))
}

proptest! {
    // Encoding a decoded set never changes its meaning
    #[test]
    fn group_encoding_round_trips(groups in groups_strategy()) {
        let set: GroupSet = groups.iter().cloned().collect();
        let decoded = GroupSet::decode(&set.encode());
        prop_assert_eq!(decoded.encode(), set.encode());
        prop_assert_eq!(decoded, set);
    }

    // B - A never contains anything from A, and keeps everything else from B
    #[test]
    fn difference_removes_exactly_the_overlap(a in groups_strategy(), b in groups_strategy()) {
        let a: GroupSet = a.into_iter().collect();
        let b: GroupSet = b.into_iter().collect();
        let remainder = b.difference(&a);

        for group in remainder.iter() {
            prop_assert!(!a.contains(group));
            prop_assert!(b.contains(group));
        }
        prop_assert_eq!(remainder.len() + b.intersection(&a).len(), b.len());
    }

    // Intersection is symmetric as a set
    #[test]
    fn intersection_is_symmetric(a in groups_strategy(), b in groups_strategy()) {
        let a: GroupSet = a.into_iter().collect();
        let b: GroupSet = b.into_iter().collect();
        prop_assert_eq!(a.intersection(&b), b.intersection(&a));
    }

    // Storage keys map back to the same setting name
    #[test]
    fn env_key_round_trips(name in setting_name_strategy()) {
        prop_assert_eq!(name_for_key(&env_key(&name)), Some(name));
    }

    // A local write is immediately visible in the local scope
    #[test]
    fn local_write_round_trips(name in setting_name_strategy(), value in "[ -~]{0,20}") {
        let mut store = MemorySettings::new();
        store.set(WriteScope::Local, &name, Some(&value)).unwrap();
        prop_assert_eq!(store.locations(&name).local, Some(value));
    }
}
