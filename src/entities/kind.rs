// 🏷️ Entity Kind - annotation labels → concrete entity types

use super::entity::Entity;
use super::{Company, Person, Position, Pronoun};
use crate::error::NetworkError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of entity kinds produced by the annotation tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    #[serde(rename = "PERSON")]
    Person,

    /// Organisation (annotated as ORG)
    #[serde(rename = "ORG")]
    Company,

    #[serde(rename = "POSITION")]
    Position,

    #[serde(rename = "PRONOUN")]
    Pronoun,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Person,
        EntityKind::Company,
        EntityKind::Position,
        EntityKind::Pronoun,
    ];

    /// Type label, matches `Entity::entity_type` of the built variant
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Person => "Person",
            EntityKind::Company => "Company",
            EntityKind::Position => "Position",
            EntityKind::Pronoun => "Pronoun",
        }
    }

    /// Annotation label as written in the JSONL
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Person => "PERSON",
            EntityKind::Company => "ORG",
            EntityKind::Position => "POSITION",
            EntityKind::Pronoun => "PRONOUN",
        }
    }

    /// Parse an annotation label (case-insensitive)
    pub fn from_label(label: &str) -> Result<Self, NetworkError> {
        let trimmed = label.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| NetworkError::UnknownEntityLabel(label.to_string()))
    }

    /// Construct the concrete entity for this kind
    pub fn build(
        &self,
        name: impl Into<String>,
        left_neighborhood: impl Into<String>,
        right_neighborhood: impl Into<String>,
    ) -> Box<dyn Entity> {
        match self {
            EntityKind::Person => Box::new(Person::with_neighborhoods(
                name,
                left_neighborhood,
                right_neighborhood,
            )),
            EntityKind::Company => Box::new(Company::with_neighborhoods(
                name,
                left_neighborhood,
                right_neighborhood,
            )),
            EntityKind::Position => Box::new(Position::with_neighborhoods(
                name,
                left_neighborhood,
                right_neighborhood,
            )),
            EntityKind::Pronoun => Box::new(Pronoun::with_neighborhoods(
                name,
                left_neighborhood,
                right_neighborhood,
            )),
        }
    }
}

impl FromStr for EntityKind {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
