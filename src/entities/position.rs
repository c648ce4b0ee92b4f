// 💼 Position Entity - job titles (POSITION spans)

use super::entity::{Entity, EntityBase};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    base: EntityBase,
}

impl Position {
    pub fn new(name: impl Into<String>) -> Self {
        Position {
            base: EntityBase::new(name),
        }
    }

    pub fn with_neighborhoods(
        name: impl Into<String>,
        left_neighborhood: impl Into<String>,
        right_neighborhood: impl Into<String>,
    ) -> Self {
        Position {
            base: EntityBase::with_neighborhoods(name, left_neighborhood, right_neighborhood),
        }
    }
}

impl Entity for Position {
    fn base(&self) -> &EntityBase {
        &self.base
    }

    fn entity_type(&self) -> &str {
        "Position"
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
