//! Pending - Two-phase attribute values
//!
//! Some resource attributes (ARNs, backend-generated names) are not known
//! when a resource is declared. A `Pending<T>` carries either the resolved
//! value or a placeholder token; factories resolve pending values before a
//! descriptor is handed to any consumer.

use uuid::Uuid;

/// Placeholder for a value resolved in a later phase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Unique identifier for this placeholder
    id: String,
    /// What the token stands for (e.g., "arn", "database_name")
    hint: String,
}

impl Token {
    pub fn new(hint: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            hint: hint.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }
}

/// A value that is either resolved or stood in for by a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pending<T> {
    /// The concrete value is known
    Resolved(T),
    /// The value is deferred to a later phase
    Deferred(Token),
}

impl<T> Pending<T> {
    /// Wrap an already-known value
    pub fn resolved(value: T) -> Self {
        Self::Resolved(value)
    }

    /// Create a deferred value with a fresh token
    pub fn deferred(hint: impl Into<String>) -> Self {
        Self::Deferred(Token::new(hint))
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// The resolved value, if present
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::Deferred(_) => None,
        }
    }

    /// Consume, returning the resolved value if present
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::Deferred(_) => None,
        }
    }

    /// The placeholder token, if the value is deferred
    pub fn token(&self) -> Option<&Token> {
        match self {
            Self::Resolved(_) => None,
            Self::Deferred(token) => Some(token),
        }
    }
}
