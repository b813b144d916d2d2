//! Field value extraction from JSON-shaped records.
//!
//! Given a record value and dotted path specs, pull out the values of each
//! field. A `*` component fans out over array elements, so a path with
//! wildcards yields the flattened list of every value it reaches.

use indexmap::IndexMap;
use serde_json::Value;

/// Path component matching every element of an array.
pub const ARRAY_WILDCARD: &str = "*";

/// Number of array wildcards in a path spec.
pub fn wildcard_depth(path: &str) -> usize {
    path.split('.')
        .filter(|component| *component == ARRAY_WILDCARD)
        .count()
}

/// Extract the values of each path spec from the record.
///
/// The result preserves the order of the given paths. A path that reaches
/// nothing maps to an empty list.
pub fn extract_fields<'a>(
    record: &Value,
    paths: impl IntoIterator<Item = &'a str>,
) -> IndexMap<String, Vec<Value>> {
    paths
        .into_iter()
        .map(|path| (path.to_string(), field_values(record, path)))
        .collect()
}

/// All values reached by walking `path` through `record`.
///
/// Components index into objects; the wildcard fans out over arrays.
/// Anything else on the way (a scalar where a container was expected, a
/// missing key) drops out silently.
pub fn field_values(record: &Value, path: &str) -> Vec<Value> {
    let mut current: Vec<&Value> = vec![record];
    for component in path.split('.') {
        if component == ARRAY_WILDCARD {
            current = current
                .into_iter()
                .filter_map(Value::as_array)
                .flatten()
                .collect();
        } else {
            current = current
                .into_iter()
                .filter_map(|value| value.get(component))
                .collect();
        }
    }
    current.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_wildcard_depth() {
        assert_eq!(wildcard_depth("a.b"), 0);
        assert_eq!(wildcard_depth("a.*.b"), 1);
        assert_eq!(wildcard_depth("a.*.b.*"), 2);
    }

    #[test]
    fn test_plain_path() {
        let record = json!({"owner": {"name": "data-platform"}});
        assert_eq!(
            field_values(&record, "owner.name"),
            vec![json!("data-platform")]
        );
    }

    #[test]
    fn test_absent_path_is_empty() {
        let record = json!({"owner": {}});
        assert!(field_values(&record, "owner.name").is_empty());
        assert!(field_values(&record, "missing.entirely").is_empty());
    }

    #[test]
    fn test_wildcard_fans_out() {
        let record = json!({"tags": [{"name": "pii"}, {"name": "gold"}]});
        assert_eq!(
            field_values(&record, "tags.*.name"),
            vec![json!("pii"), json!("gold")]
        );
    }

    #[test]
    fn test_nested_wildcards_flatten() {
        let record = json!({"groups": [{"members": ["a", "b"]}, {"members": ["c"]}]});
        assert_eq!(
            field_values(&record, "groups.*.members.*"),
            vec![json!("a"), json!("b"), json!("c")]
        );
    }

    #[test]
    fn test_scalar_at_wildcard_drops_out() {
        let record = json!({"tags": "not-a-list"});
        assert!(field_values(&record, "tags.*").is_empty());
    }

    #[test]
    fn test_extract_fields_keeps_path_order() {
        let record = json!({"a": 1, "b": 2});
        let extracted = extract_fields(&record, ["b", "a", "c"]);

        let paths: Vec<_> = extracted.keys().map(String::as_str).collect();
        assert_eq!(paths, vec!["b", "a", "c"]);
        assert_eq!(extracted["b"], vec![json!(2)]);
        assert!(extracted["c"].is_empty());
    }
}
