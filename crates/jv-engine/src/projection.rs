use jv_types::JsonPath;
use serde::Serialize;
use serde_json::{Map, Value};

/// Resolved fields of one record, keyed by the requested paths.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedRecord {
    pub position: usize,
    /// Requested path -> value, in request order
    pub fields: Map<String, Value>,
}

/// Split a comma separated key list, trimming blanks away.
pub fn parse_key_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resolve each of `keys` against one record. `null` counts as absent.
pub fn project_record(record: &Value, keys: &[String]) -> Map<String, Value> {
    let mut fields = Map::new();
    for key in keys {
        match record.lookup(key) {
            None | Some(Value::Null) => {}
            Some(value) => {
                fields.insert(key.clone(), value.clone());
            }
        }
    }
    fields
}

/// Project every record, dropping the ones where nothing resolved.
pub fn project(records: &[Value], keys: &[String]) -> Vec<ProjectedRecord> {
    records
        .iter()
        .enumerate()
        .filter_map(|(idx, record)| {
            let fields = project_record(record, keys);
            (!fields.is_empty()).then(|| ProjectedRecord {
                position: idx + 1,
                fields,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys(raw: &str) -> Vec<String> {
        parse_key_list(raw)
    }

    #[test]
    fn test_parse_key_list() {
        assert_eq!(keys(" type , message.model,,"), vec!["type", "message.model"]);
        assert!(keys(" , ").is_empty());
    }

    #[test]
    fn test_nested_path_resolves() {
        let fields = project_record(&json!({"a": {"b": {"c": 7}}}), &keys("a.b.c"));
        assert_eq!(fields.get("a.b.c"), Some(&json!(7)));
    }

    #[test]
    fn test_path_through_scalar_is_absent() {
        let fields = project_record(&json!({"a": {"b": 5}}), &keys("a.b.c"));
        assert!(fields.is_empty());
    }

    #[test]
    fn test_records_without_hits_are_dropped() {
        let records = vec![
            json!({"type": "user"}),
            json!({"other": 1}),
            json!({"type": "assistant", "model": null}),
        ];
        let rows = project(&records, &keys("type,model"));
        let positions: Vec<_> = rows.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![1, 3]);
        assert_eq!(rows[1].fields.len(), 1);
    }

    #[test]
    fn test_fields_follow_request_order() {
        let record = json!({"a": 1, "b": 2, "c": 3});
        let fields = project_record(&record, &keys("c,a"));
        assert_eq!(serde_json::to_string(&fields).unwrap(), r#"{"c":3,"a":1}"#);
    }
}
