//! Field-path keyed validation errors.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Path used for errors about the input as a whole.
pub const ROOT_PATH: &str = "";

/// Whether an issue belongs to a single input or to a whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// A single field failed one of its rules.
    Field,
    /// A collection-level invariant failed (e.g. an empty address list).
    Aggregate,
}

/// One failing rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub message: String,
    pub kind: IssueKind,
}

/// Validation failures keyed by dotted field path (`contact.email`,
/// `addresses.2.zipCode`, ...).
///
/// Only the first issue recorded for a path is kept. Insertion order is
/// preserved so callers can render errors in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    issues: Vec<(String, FieldIssue)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Record a field-level issue.
    pub fn add(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.push(path.into(), message.into(), IssueKind::Field);
    }

    /// Record a collection-level issue, attached to the collection's own path.
    pub fn add_aggregate(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.push(path.into(), message.into(), IssueKind::Aggregate);
    }

    fn push(&mut self, path: String, message: String, kind: IssueKind) {
        if self.contains(&path) {
            return;
        }
        self.issues.push((path, FieldIssue { message, kind }));
    }

    pub fn contains(&self, path: &str) -> bool {
        self.issue(path).is_some()
    }

    pub fn issue(&self, path: &str) -> Option<&FieldIssue> {
        self.issues
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, issue)| issue)
    }

    /// Message recorded for a path, if any.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.issue(path).map(|issue| issue.message.as_str())
    }

    /// Aggregate-level message for a path, ignoring field issues on it.
    pub fn aggregate(&self, path: &str) -> Option<&str> {
        self.issue(path)
            .filter(|issue| issue.kind == IssueKind::Aggregate)
            .map(|issue| issue.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldIssue)> {
        self.issues.iter().map(|(p, issue)| (p.as_str(), issue))
    }

    /// Field-level issues only.
    pub fn field_issues(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .filter(|(_, issue)| issue.kind == IssueKind::Field)
            .map(|(p, issue)| (p, issue.message.as_str()))
    }

    /// Aggregate-level issues only.
    pub fn aggregate_issues(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .filter(|(_, issue)| issue.kind == IssueKind::Aggregate)
            .map(|(p, issue)| (p, issue.message.as_str()))
    }

    /// Issues whose path lies under `prefix` (the prefix itself included).
    pub fn under<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a str, &'a FieldIssue)> {
        self.iter().filter(move |(p, _)| {
            *p == prefix
                || prefix.is_empty()
                || (p.starts_with(prefix) && p[prefix.len()..].starts_with('.'))
        })
    }

    /// Move every issue of `other` in, nesting its paths under `prefix`.
    pub fn merge_prefixed(&mut self, prefix: &str, other: FieldErrors) {
        for (path, issue) in other.issues {
            self.push(join_path(prefix, &path), issue.message, issue.kind);
        }
    }

    /// `Ok(value)` when no issue was recorded, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Join a parent path and a key with a dot, treating the root as empty.
pub fn join_path(prefix: &str, key: &str) -> String {
    match (prefix.is_empty(), key.is_empty()) {
        (true, _) => key.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{}.{}", prefix, key),
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (path, issue)) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            let path = if path.is_empty() { "(root)" } else { path };
            write!(f, "{}: {}", path, issue.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

// Serialized as a flat `{path: message}` object for the rendering layer.
impl Serialize for FieldErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.issues.len()))?;
        for (path, issue) in &self.issues {
            map.serialize_entry(path, &issue.message)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_issue_per_path_wins() {
        let mut errors = FieldErrors::new();
        errors.add("phone", "Phone number must be at least 10 digits");
        errors.add("phone", "Please enter a valid phone number");
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("phone"),
            Some("Phone number must be at least 10 digits")
        );
    }

    #[test]
    fn test_aggregate_distinct_from_field() {
        let mut errors = FieldErrors::new();
        errors.add_aggregate("addresses", "At least one address is required");
        errors.add("addresses.3.city", "City is required");

        assert_eq!(
            errors.aggregate("addresses"),
            Some("At least one address is required")
        );
        assert_eq!(errors.aggregate("addresses.3.city"), None);
        assert_eq!(errors.field_issues().count(), 1);
        assert_eq!(errors.aggregate_issues().count(), 1);
    }

    #[test]
    fn test_merge_prefixed() {
        let mut inner = FieldErrors::new();
        inner.add("email", "Please enter a valid email address");
        inner.add(ROOT_PATH, "Expected object, received string");

        let mut outer = FieldErrors::new();
        outer.merge_prefixed("contact", inner);

        assert!(outer.contains("contact.email"));
        assert!(outer.contains("contact"));
    }

    #[test]
    fn test_under_matches_whole_segments() {
        let mut errors = FieldErrors::new();
        errors.add("addresses.1.city", "City is required");
        errors.add("addresses.10.city", "City is required");

        let under: Vec<_> = errors.under("addresses.1").map(|(p, _)| p).collect();
        assert_eq!(under, vec!["addresses.1.city"]);
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let mut errors = FieldErrors::new();
        errors.add("city", "City is required");
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({"city": "City is required"})
        );
    }

    #[test]
    fn test_display_lists_issues() {
        let mut errors = FieldErrors::new();
        errors.add(ROOT_PATH, "Expected object, received null");
        errors.add("city", "City is required");
        assert_eq!(
            errors.to_string(),
            "(root): Expected object, received null; city: City is required"
        );
    }

    #[test]
    fn test_into_result() {
        assert_eq!(FieldErrors::new().into_result(5), Ok(5));

        let mut errors = FieldErrors::new();
        errors.add("city", "City is required");
        assert!(errors.into_result(5).is_err());
    }
}
