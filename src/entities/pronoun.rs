// 🗣️ Pronoun Entity - "he", "she", "they" spans resolved elsewhere (PRONOUN spans)

use super::entity::{Entity, EntityBase};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pronoun {
    base: EntityBase,
}

impl Pronoun {
    pub fn new(name: impl Into<String>) -> Self {
        Pronoun {
            base: EntityBase::new(name),
        }
    }

    pub fn with_neighborhoods(
        name: impl Into<String>,
        left_neighborhood: impl Into<String>,
        right_neighborhood: impl Into<String>,
    ) -> Self {
        Pronoun {
            base: EntityBase::with_neighborhoods(name, left_neighborhood, right_neighborhood),
        }
    }
}

impl Entity for Pronoun {
    fn base(&self) -> &EntityBase {
        &self.base
    }

    fn entity_type(&self) -> &str {
        "Pronoun"
    }
}

impl fmt::Display for Pronoun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
