// 🧩 Entity - named unit with left/right neighborhood context
//
// Every concrete kind (Person, Company, Position, Pronoun) embeds an
// `EntityBase` and implements `Entity` to supply its type label.
// Equality and hashing live on the base, so they are shared by all kinds.

use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

// ============================================================================
// ENTITY BASE (shared fields + equality/hash)
// ============================================================================

/// Immutable fields shared by every entity kind.
///
/// No setters: a base is fixed once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityBase {
    name: String,
    left_neighborhood: String,
    right_neighborhood: String,
}

impl EntityBase {
    /// Base with empty neighborhoods
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_neighborhoods(name, String::new(), String::new())
    }

    pub fn with_neighborhoods(
        name: impl Into<String>,
        left_neighborhood: impl Into<String>,
        right_neighborhood: impl Into<String>,
    ) -> Self {
        EntityBase {
            name: name.into(),
            left_neighborhood: left_neighborhood.into(),
            right_neighborhood: right_neighborhood.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn left_neighborhood(&self) -> &str {
        &self.left_neighborhood
    }

    pub fn right_neighborhood(&self) -> &str {
        &self.right_neighborhood
    }

    /// Deterministic hash of all three fields
    pub fn hash_code(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

// ============================================================================
// ENTITY TRAIT
// ============================================================================

/// A named entity found in text.
///
/// Implementors only provide `base` and `entity_type`; the rest is shared.
/// Equality ignores the concrete kind: a `Person` and a `Company` with the
/// same name and neighborhoods compare equal.
pub trait Entity: fmt::Debug + Send + Sync {
    fn base(&self) -> &EntityBase;

    /// Short label for the concrete kind, e.g. "Person" or "Company"
    fn entity_type(&self) -> &str;

    fn name(&self) -> &str {
        self.base().name()
    }

    fn left_neighborhood(&self) -> &str {
        self.base().left_neighborhood()
    }

    fn right_neighborhood(&self) -> &str {
        self.base().right_neighborhood()
    }

    /// Case-sensitive substring check. An empty query always matches.
    fn is_in_left_neighborhood(&self, query: &str) -> bool {
        self.left_neighborhood().contains(query)
    }

    /// Case-sensitive substring check. An empty query always matches.
    fn is_in_right_neighborhood(&self, query: &str) -> bool {
        self.right_neighborhood().contains(query)
    }

    /// `name:EntityType`
    fn to_text(&self) -> String {
        format!("{}:{}", self.name(), self.entity_type())
    }

    /// Structural equality against any entity kind; `None` never matches.
    fn equals(&self, other: Option<&dyn Entity>) -> bool {
        other.is_some_and(|other| self.base() == other.base())
    }

    fn hash_code(&self) -> u64 {
        self.base().hash_code()
    }
}

impl<'a> PartialEq for dyn Entity + 'a {
    fn eq(&self, other: &Self) -> bool {
        self.base() == other.base()
    }
}

impl<'a> Eq for dyn Entity + 'a {}

impl<'a> Hash for dyn Entity + 'a {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base().hash(state);
    }
}

impl<'a> fmt::Display for dyn Entity + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

// ============================================================================
// TESTS
// ============================================================================
