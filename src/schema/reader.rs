//! Rule primitives shared by the schemas.
//!
//! A [`FieldReader`] walks one JSON object, checks declared rules key by key
//! and records every failure instead of stopping at the first one.

use super::field_errors::{join_path, FieldErrors};
use regex::Regex;
use serde_json::{Map, Value};

pub(crate) const REQUIRED: &str = "Required";

/// JSON type name used in "Expected x, received y" messages.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn expected(expected: &str, value: &Value) -> String {
    format!("Expected {}, received {}", expected, type_name(value))
}

/// Length as the user sees it: characters of the untrimmed input.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub(crate) struct FieldReader<'a, 'e> {
    object: &'a Map<String, Value>,
    prefix: String,
    errors: &'e mut FieldErrors,
    recorded_at_open: usize,
}

impl<'a, 'e> FieldReader<'a, 'e> {
    /// Start reading `value` as an object located at `prefix`.
    ///
    /// A non-object is reported at `prefix` itself and yields `None`.
    pub(crate) fn open(value: &'a Value, prefix: &str, errors: &'e mut FieldErrors) -> Option<Self> {
        match value {
            Value::Object(object) => {
                let recorded_at_open = errors.len();
                Some(Self {
                    object,
                    prefix: prefix.to_string(),
                    errors,
                    recorded_at_open,
                })
            }
            other => {
                errors.add(prefix, expected("object", other));
                None
            }
        }
    }

    pub(crate) fn path(&self, key: &str) -> String {
        join_path(&self.prefix, key)
    }

    pub(crate) fn get(&self, key: &str) -> Option<&'a Value> {
        self.object.get(key)
    }

    pub(crate) fn errors(&mut self) -> &mut FieldErrors {
        &mut *self.errors
    }

    /// Whether anything failed since this reader was opened.
    pub(crate) fn failed(&self) -> bool {
        self.errors.len() > self.recorded_at_open
    }

    pub(crate) fn fail(&mut self, key: &str, message: impl Into<String>) {
        let path = self.path(key);
        self.errors.add(path, message);
    }

    pub(crate) fn fail_aggregate(&mut self, key: &str, message: impl Into<String>) {
        let path = self.path(key);
        self.errors.add_aggregate(path, message);
    }

    pub(crate) fn required_str(&mut self, key: &str) -> Option<&'a str> {
        match self.get(key) {
            Some(Value::String(s)) => Some(s.as_str()),
            Some(other) => {
                self.fail(key, expected("string", other));
                None
            }
            None => {
                self.fail(key, REQUIRED);
                None
            }
        }
    }

    /// An absent key is fine; a present one must be a string.
    pub(crate) fn optional_str(&mut self, key: &str) -> Option<&'a str> {
        match self.get(key) {
            None => None,
            Some(Value::String(s)) => Some(s.as_str()),
            Some(other) => {
                self.fail(key, expected("string", other));
                None
            }
        }
    }

    pub(crate) fn required_bool(&mut self, key: &str) -> Option<bool> {
        match self.get(key) {
            Some(Value::Bool(b)) => Some(*b),
            Some(other) => {
                self.fail(key, expected("boolean", other));
                None
            }
            None => {
                self.fail(key, REQUIRED);
                None
            }
        }
    }

    /// Required string with at least `min` characters.
    pub(crate) fn min_chars(&mut self, key: &str, min: usize, message: &str) -> Option<&'a str> {
        let value = self.required_str(key)?;
        if char_len(value) < min {
            self.fail(key, message);
            return None;
        }
        Some(value)
    }

    /// Required string matching `pattern`.
    pub(crate) fn matching(&mut self, key: &str, pattern: &Regex, message: &str) -> Option<&'a str> {
        let value = self.required_str(key)?;
        if !pattern.is_match(value) {
            self.fail(key, message);
            return None;
        }
        Some(value)
    }
}
