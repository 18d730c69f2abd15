//! Property tests for environment resolution.

use std::collections::BTreeMap;

use proptest::prelude::*;
use serde_json::Value;

use pageit::domain::entities::{Environment, EnvironmentSet, DEFAULT_ENVIRONMENT};

fn vars() -> impl Strategy<Value = BTreeMap<String, Value>> {
    proptest::collection::btree_map(
        proptest::string::string_regex("[a-e]").unwrap(),
        any::<i64>().prop_map(Value::from),
        0..5,
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Named keys win; default keys absent from the named set survive.
    #[test]
    fn property_named_environment_shallow_merges_over_default(
        default in vars(),
        named in vars(),
    ) {
        let mut envs = BTreeMap::new();
        envs.insert(DEFAULT_ENVIRONMENT.to_string(), Environment::from_values(default.clone()));
        envs.insert("named".to_string(), Environment::from_values(named.clone()));
        let set = EnvironmentSet::new(None, envs);

        let resolved = set.resolve("named").unwrap();
        for (key, value) in &named {
            prop_assert_eq!(resolved.get(key), Some(value));
        }
        for (key, value) in &default {
            if !named.contains_key(key) {
                prop_assert_eq!(resolved.get(key), Some(value));
            }
        }
        let expected: std::collections::BTreeSet<_> =
            default.keys().chain(named.keys()).collect();
        prop_assert_eq!(resolved.len(), expected.len());
    }

    /// PROPERTY: Resolving `default` returns exactly the default set.
    #[test]
    fn property_default_resolves_to_itself(default in vars()) {
        let mut envs = BTreeMap::new();
        envs.insert(DEFAULT_ENVIRONMENT.to_string(), Environment::from_values(default.clone()));
        let set = EnvironmentSet::new(None, envs);

        let resolved = set.resolve(DEFAULT_ENVIRONMENT).unwrap();
        prop_assert_eq!(resolved.values(), &default);
    }

    /// PROPERTY: Any name the document lacks fails, whatever it contains.
    #[test]
    fn property_unknown_name_fails(name in "[a-z]{1,10}", default in vars()) {
        prop_assume!(name != DEFAULT_ENVIRONMENT);
        let mut envs = BTreeMap::new();
        envs.insert(DEFAULT_ENVIRONMENT.to_string(), Environment::from_values(default));
        let set = EnvironmentSet::new(None, envs);

        prop_assert!(set.resolve(&name).is_err());
    }
}
