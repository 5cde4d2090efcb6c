//! Naming - Scope paths and default resource names
//!
//! A declared resource lives in a scope (root plus any nested children).
//! When the caller supplies no name, the default is qualified by the scope
//! path so that resources with distinct logical ids get distinct names.

/// Path of a declaring scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    path: Vec<String>,
}

impl Scope {
    /// Root scope with a single path segment
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            path: vec![name.into()],
        }
    }

    /// Child scope extending this one by a segment
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut path = self.path.clone();
        path.push(segment.into());
        Self { path }
    }

    pub fn segments(&self) -> &[String] {
        &self.path
    }

    /// Scope path joined with `/`
    pub fn path(&self) -> String {
        self.path.join("/")
    }

    /// Default name for a logical id in this scope
    pub fn qualified_name(&self, logical_id: &str) -> String {
        let mut parts = self.path.clone();
        parts.push(logical_id.to_string());
        parts.join("-")
    }
}

/// Use the explicit name when present and non-empty, otherwise generate one.
pub fn resolve_name(explicit: Option<&str>, generator: impl FnOnce() -> String) -> String {
    match explicit {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => generator(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_name_wins() {
        let name = resolve_name(Some("custom"), || "generated".to_string());
        assert_eq!(name, "custom");
    }

    #[test]
    fn absent_name_falls_back_to_generator() {
        let name = resolve_name(None, || "generated".to_string());
        assert_eq!(name, "generated");
    }

    #[test]
    fn empty_name_falls_back_to_generator() {
        let name = resolve_name(Some(""), || "generated".to_string());
        assert_eq!(name, "generated");
    }

    #[test]
    fn qualified_name_is_scope_qualified() {
        let scope = Scope::root("Stack");
        assert_eq!(scope.qualified_name("testDatabase"), "Stack-testDatabase");
    }

    #[test]
    fn child_scope_extends_path() {
        let scope = Scope::root("Stack").child("Storage");
        assert_eq!(scope.path(), "Stack/Storage");
        assert_eq!(scope.qualified_name("db"), "Stack-Storage-db");
    }

    #[test]
    fn distinct_ids_give_distinct_names() {
        let scope = Scope::root("Stack");
        assert_ne!(scope.qualified_name("a"), scope.qualified_name("b"));
    }
}
