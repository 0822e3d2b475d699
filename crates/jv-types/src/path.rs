use serde_json::Value;

/// Optional nested lookup over loosely typed JSON records.
///
/// Paths are dot separated (`message.usage.input_tokens`). Every step must
/// land on an object; as soon as a non-object is met the whole path is absent.
/// Array indexing is not supported, arrays are walked by the callers.
pub trait JsonPath {
    /// Resolve `path`, returning the raw value (which may be `null`).
    fn lookup(&self, path: &str) -> Option<&Value>;

    /// Resolve `path` to a string value.
    fn str_at(&self, path: &str) -> Option<&str> {
        self.lookup(path).and_then(Value::as_str)
    }

    /// Resolve `path` to an array, treating anything else as empty.
    fn array_at(&self, path: &str) -> &[Value] {
        self.lookup(path)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Resolve `path` to its value as stored, defaulting to `0` when absent or null.
    fn value_or_zero(&self, path: &str) -> Value {
        match self.lookup(path) {
            None | Some(Value::Null) => Value::from(0),
            Some(value) => value.clone(),
        }
    }

    /// Resolve `path` to a float, defaulting to zero.
    fn f64_or_zero(&self, path: &str) -> f64 {
        self.lookup(path).and_then(Value::as_f64).unwrap_or(0.0)
    }

    /// True when `path` resolves to a string equal to `expected`.
    fn has_str(&self, path: &str, expected: &str) -> bool {
        self.str_at(path) == Some(expected)
    }
}

impl JsonPath for Value {
    fn lookup(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(self, |current, segment| current.as_object()?.get(segment))
    }
}
