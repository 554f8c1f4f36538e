use std::collections::{BTreeMap, HashMap};

use pretty_assertions::assert_eq;

use super::{EnvSnapshot, EnvSource};

#[test]
fn snapshot_from_pairs() {
    let env: EnvSnapshot = [("TZ", "UTC"), ("DEV_PORT", "3000")].into_iter().collect();
    assert_eq!(env.len(), 2);
    assert_eq!(env.get("TZ"), Some("UTC"));
    assert_eq!(env.get("HOME_DIR"), None);
}

#[test]
fn iteration_is_sorted_by_name() {
    let env: EnvSnapshot = [("b", "2"), ("a", "1")].into_iter().collect();
    let names: Vec<&str> = env.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn empty_value_counts_as_unset() {
    let env: EnvSnapshot = [("TZ", ""), ("LANG", "C")].into_iter().collect();
    assert!(!env.has_value("TZ"));
    assert!(env.has_value("LANG"));
    assert!(!env.has_value("MISSING"));
}

#[test]
fn whitespace_value_counts_as_set() {
    let env: EnvSnapshot = [("TZ", " ")].into_iter().collect();
    assert!(env.has_value("TZ"));
}

#[test]
fn names_are_case_sensitive() {
    let env: EnvSnapshot = [("tz", "UTC")].into_iter().collect();
    assert!(!env.has_value("TZ"));
}

#[test]
fn insert_replaces() {
    let mut env = EnvSnapshot::new();
    assert!(env.is_empty());
    assert_eq!(env.insert("TZ", "UTC"), None);
    assert_eq!(env.insert("TZ", "CET"), Some("UTC".to_string()));
    assert_eq!(env.get("TZ"), Some("CET"));
}

#[test]
fn std_maps_are_sources() {
    let mut hash = HashMap::new();
    hash.insert("TZ".to_string(), "UTC".to_string());
    assert!(hash.has_value("TZ"));

    let mut tree = BTreeMap::new();
    tree.insert("TZ".to_string(), String::new());
    assert!(!tree.has_value("TZ"));
    assert!(EnvSource::get(&&tree, "TZ").is_some());
}

#[test]
fn process_snapshot_matches_std_env() {
    let env = EnvSnapshot::from_process();
    for (name, value) in std::env::vars() {
        assert_eq!(env.get(&name), Some(value.as_str()), "{name}");
    }
}
