//! Human-readable difference reports.
//!
//! The report builder walks the one-level diff of two values. Whenever a
//! child differs and both sides are non-empty maps, or both are non-empty
//! lists, it descends into that child instead of reporting it whole. Every
//! other difference becomes a leaf entry, at most one per path.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use assay_types::{stringify, try_resolve, Lookup, Path, Value, ValueKind};
use tracing::debug;

use crate::value_diff::{diff_values, DiffOp};

/// One reported difference at a full path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportEntry {
    /// Location of the difference, from the compared root.
    pub path: Path,
    /// Formatted expected-side value, empty if absent.
    pub expected: String,
    /// Formatted actual-side value, empty if absent.
    pub actual: String,
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nExpected: {}\nActual: {}\n\n",
            self.path, self.expected, self.actual
        )
    }
}

/// The ordered, deduplicated differences between two values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiffReport {
    /// Entries in depth-first path order.
    pub entries: Vec<ReportEntry>,
}

impl DiffReport {
    /// Returns `true` if the values were equal.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The entry at serialized path `path`, if reported.
    pub fn get(&self, path: &str) -> Option<&ReportEntry> {
        self.entries.iter().find(|e| e.path.to_string() == path)
    }

    /// Serialized paths of all entries, in report order.
    pub fn paths(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.path.to_string()).collect()
    }
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// Format a leaf value: strings single-quoted, absent values empty.
pub fn format_leaf(value: Lookup<'_>) -> String {
    match value {
        Lookup::Undefined => String::new(),
        Lookup::Found(Value::String(s)) => format!("'{s}'"),
        Lookup::Found(other) => stringify(other),
    }
}

/// Build the difference report from `actual` to `expected`.
///
/// Never fails: absent values render as empty text and kind mismatches are
/// reported as leaf entries.
pub fn build_report(actual: &Value, expected: &Value) -> DiffReport {
    let mut reported = BTreeSet::new();
    let mut entries = Vec::new();
    collect_entries(actual, expected, &Path::root(), &mut reported, &mut entries);
    debug!(entries = entries.len(), "diff report built");
    DiffReport { entries }
}

/// The ops reported for one child name.
#[derive(Default)]
struct NameGroup<'a> {
    removed: Option<&'a Value>,
    added: Option<&'a Value>,
    changed: Option<(&'a Value, &'a Value)>,
}

fn collect_entries(
    actual: &Value,
    expected: &Value,
    prefix: &Path,
    reported: &mut BTreeSet<String>,
    entries: &mut Vec<ReportEntry>,
) {
    let mut groups: BTreeMap<Path, NameGroup<'_>> = BTreeMap::new();
    for op in diff_values(actual, expected) {
        match op {
            DiffOp::Removed { path, value } => groups.entry(path).or_default().removed = Some(value),
            DiffOp::Added { path, value } => groups.entry(path).or_default().added = Some(value),
            DiffOp::Changed { path, old, new } => {
                groups.entry(path).or_default().changed = Some((old, new))
            }
        }
    }

    for (name, group) in groups {
        // Changes fall back to the values they carry.
        let (old, new) = group.changed.unzip();
        let missing = Lookup::from(group.removed)
            .or(lookup(actual, &name))
            .or(Lookup::from(old));
        let extra = Lookup::from(group.added)
            .or(lookup(expected, &name))
            .or(Lookup::from(new));

        let full_path = prefix.join(&name);

        if let (Lookup::Found(missing_val), Lookup::Found(extra_val)) = (missing, extra) {
            if same_non_empty_composite(missing_val, extra_val) {
                collect_entries(missing_val, extra_val, &full_path, reported, entries);
                continue;
            }
        }

        if reported.insert(full_path.to_string()) {
            entries.push(ReportEntry {
                path: full_path,
                expected: format_leaf(extra),
                actual: format_leaf(missing),
            });
        }
    }
}

fn lookup<'a>(root: &'a Value, name: &Path) -> Lookup<'a> {
    try_resolve(root, name).unwrap_or(Lookup::Undefined)
}

fn same_non_empty_composite(a: &Value, b: &Value) -> bool {
    let kind = ValueKind::of(a);
    kind.is_composite() && kind == ValueKind::of(b) && has_children(a) && has_children(b)
}

fn has_children(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn entry(path: &str, expected: &str, actual: &str) -> ReportEntry {
        ReportEntry {
            path: Path::parse(path),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    #[test]
    fn equal_values_produce_no_entries() {
        let value = json!({"a": [1, {"b": null}], "c": "c"});
        assert!(build_report(&value, &value).is_empty());
    }

    #[test]
    fn scalar_mismatch_reports_root() {
        let report = build_report(&json!("a"), &json!("b"));
        assert_eq!(report.entries, vec![entry("", "'b'", "'a'")]);
    }

    #[test]
    fn number_and_null_are_unquoted() {
        let report = build_report(&json!(null), &json!(2));
        assert_eq!(report.entries, vec![entry("", "2", "null")]);
    }

    #[test]
    fn list_elements() {
        let report = build_report(&json!([1, 2, 3]), &json!([1, 3, 4, 5]));
        assert_eq!(
            report.entries,
            vec![
                entry("[1]", "3", "2"),
                entry("[2]", "4", "3"),
                entry("[3]", "5", ""),
            ]
        );
    }

    #[test]
    fn flat_objects() {
        let actual = json!({"a": "a", "b": "b", "c": "c"});
        let expected = json!({"a": "a", "c": "d", "e": "e"});

        let report = build_report(&actual, &expected);
        assert_eq!(
            report.entries,
            vec![
                entry("b", "", "'b'"),
                entry("c", "'d'", "'c'"),
                entry("e", "'e'", ""),
            ]
        );
    }

    #[test]
    fn lists_of_objects_refine_per_field() {
        let expected = json!({
            "alpha": "alpha",
            "beta": [1, 2, 3],
            "gamma": [
                {"i": "a", "j": "b"},
                {"i": "c", "j": "d"},
                {"i": "e", "j": "f"},
            ],
        });
        let actual = json!({
            "alpha": "alpha",
            "beta": [1, 2, 3],
            "gamma": [
                {"j": "b"},
                {"i": "c", "j": "D"},
                {"i": "e", "j": "f", "k": "k"},
            ],
        });

        let report = build_report(&actual, &expected);
        assert_eq!(
            report.entries,
            vec![
                entry("gamma[0].i", "'a'", ""),
                entry("gamma[1].j", "'d'", "'D'"),
                entry("gamma[2].k", "", "'k'"),
            ]
        );
    }

    #[test]
    fn map_against_absent_is_not_refined() {
        let report = build_report(&json!({"a": "a", "b": {"b": "b"}}), &json!({"a": "a"}));
        assert_eq!(report.entries, vec![entry("b", "", r#"{"b":"b"}"#)]);
    }

    #[test]
    fn nested_objects_refine_recursively() {
        let actual = json!({
            "a": "a",
            "b": {"b": "b"},
            "c": {
                "d": "d",
                "e": "e",
                "f": {"g": "g"},
                "h": [1, 2, 3],
            },
            "i": {"j": "j", "k": "k"},
        });
        let expected = json!({
            "a": "a",
            "c": {
                "e": "e2",
                "f": {"g2": "g2"},
                "h": [1, 2, 4],
            },
            "i": {"j": "j"},
        });

        let report = build_report(&actual, &expected);
        assert_eq!(
            report.entries,
            vec![
                entry("b", "", r#"{"b":"b"}"#),
                entry("c.d", "", "'d'"),
                entry("c.e", "'e2'", "'e'"),
                entry("c.f.g", "", "'g'"),
                entry("c.f.g2", "'g2'", ""),
                entry("c.h[2]", "4", "3"),
                entry("i.k", "", "'k'"),
            ]
        );
    }

    #[test]
    fn empty_composite_is_a_leaf() {
        let report = build_report(&json!({"a": {}}), &json!({"a": {"x": 1}}));
        assert_eq!(report.entries, vec![entry("a", r#"{"x":1}"#, "{}")]);

        let report = build_report(&json!({"a": [1]}), &json!({"a": []}));
        assert_eq!(report.entries, vec![entry("a", "[]", "[1]")]);
    }

    #[test]
    fn indices_order_numerically_in_reports() {
        let actual: Value = json!((0..=10).collect::<Vec<_>>());
        let mut expected = actual.clone();
        expected[2] = json!(99);
        expected[10] = json!(99);

        let report = build_report(&actual, &expected);
        assert_eq!(report.paths(), vec!["[2]", "[10]"]);
    }

    #[test]
    fn only_non_empty_composites_of_one_kind_are_refined() {
        assert!(same_non_empty_composite(&json!({"a": 1}), &json!({"b": 2})));
        assert!(same_non_empty_composite(&json!([1]), &json!([2, 3])));
        assert!(!same_non_empty_composite(&json!({"a": 1}), &json!([1])));
        assert!(!same_non_empty_composite(&json!([]), &json!([1])));
        assert!(!same_non_empty_composite(&json!("a"), &json!("b")));
    }

    #[test]
    fn kind_mismatch_is_a_leaf() {
        let report = build_report(&json!({"a": [1]}), &json!({"a": {"0": 1}}));
        assert_eq!(report.entries, vec![entry("a", r#"{"0":1}"#, "[1]")]);
    }

    #[test]
    fn present_null_differs_from_absent() {
        let report = build_report(&json!({"a": null}), &json!({}));
        assert_eq!(report.entries, vec![entry("a", "", "null")]);
    }

    #[test]
    fn numeric_map_keys_still_report_values() {
        let report = build_report(&json!({"1": "one"}), &json!({"1": "uno"}));
        assert_eq!(report.paths(), vec!["1"]);
        assert_eq!(report.entries[0].path, Path::root().child("1"));
        assert_eq!(report.entries[0].expected, "'uno'");
        assert_eq!(report.entries[0].actual, "'one'");
    }

    #[test]
    fn dotted_keys_resolve_structurally() {
        let actual = json!({"a.b": 1, "a": {"b": 2}});
        let expected = json!({"a.b": 3, "a": {"b": 2}});
        let report = build_report(&actual, &expected);
        assert_eq!(
            report.entries,
            vec![ReportEntry {
                path: Path::root().child("a.b"),
                expected: "3".into(),
                actual: "1".into(),
            }]
        );
    }

    #[test]
    fn already_reported_paths_are_skipped() {
        let actual = json!({"b": 1, "c": 2});
        let expected = json!({"b": 10, "c": 20});

        let mut reported = BTreeSet::from(["b".to_string()]);
        let mut entries = Vec::new();
        collect_entries(&actual, &expected, &Path::root(), &mut reported, &mut entries);

        assert_eq!(entries, vec![entry("c", "20", "2")]);
        assert!(reported.contains("c"));
    }

    #[test]
    fn report_renders_entry_blocks() {
        let report = build_report(&json!({"a": 1, "b": "x"}), &json!({"a": 2}));
        assert_eq!(
            report.to_string(),
            "a\nExpected: 2\nActual: 1\n\nb\nExpected: \nActual: 'x'\n\n"
        );
    }

    #[test]
    fn report_lookup_by_path() {
        let report = build_report(&json!({"c": {"e": "e"}}), &json!({"c": {"e": "e2"}}));
        assert_eq!(report.paths(), vec!["c.e"]);
        assert_eq!(report.get("c.e").map(|e| e.expected.as_str()), Some("'e2'"));
        assert!(report.get("c").is_none());
    }

    #[test]
    fn format_leaf_quotes_only_strings() {
        assert_eq!(format_leaf(Lookup::Found(&json!("s"))), "'s'");
        assert_eq!(format_leaf(Lookup::Found(&json!(true))), "true");
        assert_eq!(format_leaf(Lookup::Found(&json!([1, "a"]))), r#"[1,"a"]"#);
        assert_eq!(format_leaf(Lookup::Undefined), "");
    }

    fn arb_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            (-20i64..20).prop_map(|n| json!(n)),
            "[a-c]{0,2}".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 48, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-d]", inner, 0..4)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn report_is_empty_only_for_equal_values(a in arb_value(), b in arb_value()) {
            prop_assert!(build_report(&a, &a).is_empty());
            prop_assert_eq!(build_report(&a, &b).is_empty(), a == b);
        }

        #[test]
        fn report_paths_are_unique_and_ascending(a in arb_value(), b in arb_value()) {
            let report = build_report(&a, &b);
            for pair in report.entries.windows(2) {
                prop_assert!(pair[0].path < pair[1].path);
            }
            let unique: BTreeSet<String> = report.paths().into_iter().collect();
            prop_assert_eq!(unique.len(), report.len());
        }

        #[test]
        fn report_is_deterministic(a in arb_value(), b in arb_value()) {
            prop_assert_eq!(build_report(&a, &b), build_report(&a, &b));
        }
    }
}
