// 👤 Person Entity - people named in a story (PERSON spans)

use super::entity::{Entity, EntityBase};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A person, e.g. an executive joining or leaving a firm
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    base: EntityBase,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Person {
            base: EntityBase::new(name),
        }
    }

    pub fn with_neighborhoods(
        name: impl Into<String>,
        left_neighborhood: impl Into<String>,
        right_neighborhood: impl Into<String>,
    ) -> Self {
        Person {
            base: EntityBase::with_neighborhoods(name, left_neighborhood, right_neighborhood),
        }
    }
}

impl Entity for Person {
    fn base(&self) -> &EntityBase {
        &self.base
    }

    fn entity_type(&self) -> &str {
        "Person"
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
