//! Property-based tests for conflict repair.

use proptest::prelude::*;

use crate::operations::ConfigCommand;
use crate::output::CapturedUi;
use crate::settings::{GroupSet, MemorySettings, SettingsStore};

fn groups_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(vec!["dev", "test", "ci", "docs", "bench"]), 1..5)
        .prop_map(|groups| groups.into_iter().map(String::from).collect())
}

fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("true".to_string()),
        Just("false".to_string()),
        "[a-z/]{1,12}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // After a group write the local with/without never share a group
    #[test]
    fn group_write_leaves_no_local_overlap(
        existing in groups_strategy(),
        new in groups_strategy(),
        set_with in any::<bool>(),
    ) {
        let (name, opposite) = if set_with { ("with", "without") } else { ("without", "with") };
        let existing = existing.join(":");
        let mut store = MemorySettings::new().with_local(opposite, &existing);
        let ui = CapturedUi::new();

        let mut args = vec!["--local".to_string(), name.to_string()];
        args.extend(new.iter().cloned());
        ConfigCommand::new(&mut store, &ui, "/srv/app").execute(args, false).unwrap();

        let written = GroupSet::decode_opt(store.locations(name).local.as_deref());
        let remaining = GroupSet::decode_opt(store.locations(opposite).local.as_deref());
        prop_assert!(written.intersection(&remaining).is_empty());

        let expected = GroupSet::decode(&existing).difference(&GroupSet::from_iter(new.iter().cloned()));
        prop_assert_eq!(remaining, expected);
    }

    // path and system never both end up configured
    #[test]
    fn path_and_system_stay_exclusive(
        path in value_strategy(),
        system in value_strategy(),
        path_first in any::<bool>(),
        local in any::<bool>(),
    ) {
        let scope = if local { "--local" } else { "--global" };
        let mut store = MemorySettings::new();
        let ui = CapturedUi::new();
        let writes = if path_first {
            [("path", path), ("system", system)]
        } else {
            [("system", system), ("path", path)]
        };

        for (name, value) in writes {
            ConfigCommand::new(&mut store, &ui, "/srv/app")
                .execute([scope.to_string(), name.to_string(), value], false)
                .unwrap();
        }

        let path_set = store.locations("path").is_set();
        let system = store.locations("system").effective().map(String::from);
        prop_assert!(!(path_set && system.as_deref() == Some("true")));
    }

    // Repeating any write a second time changes nothing further
    #[test]
    fn repairs_are_idempotent(
        existing in groups_strategy(),
        new in groups_strategy(),
    ) {
        let mut store = MemorySettings::new().with_local("without", &existing.join(":"));
        let ui = CapturedUi::new();
        let mut args = vec!["--local".to_string(), "with".to_string()];
        args.extend(new);

        ConfigCommand::new(&mut store, &ui, "/srv/app").execute(args.clone(), false).unwrap();
        let after_first = (store.locations("with"), store.locations("without"));

        ConfigCommand::new(&mut store, &ui, "/srv/app").execute(args, false).unwrap();
        prop_assert_eq!((store.locations("with"), store.locations("without")), after_first);
    }
}
