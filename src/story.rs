// 📰 Story - relations annotated on one piece of news text

use crate::entities::Entity;
use crate::relation::Relation;
use serde::{Deserialize, Serialize};

/// One row of the entity export.
///
/// Serde names match the CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRecord {
    #[serde(rename = "Entity_Name")]
    pub name: String,

    /// Annotation label (PERSON, ORG, ...)
    #[serde(rename = "Type")]
    pub entity_type: String,

    #[serde(rename = "Start_Position")]
    pub start: usize,

    #[serde(rename = "End_Position")]
    pub end: usize,

    #[serde(rename = "Original_Text")]
    pub original_text: String,
}

impl EntityRecord {
    pub const HEADERS: [&'static str; 5] = [
        "Entity_Name",
        "Type",
        "Start_Position",
        "End_Position",
        "Original_Text",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub relations: Vec<Relation>,

    /// Original text, kept for context
    pub text: String,
}

impl Story {
    pub fn new(relations: Vec<Relation>, text: impl Into<String>) -> Self {
        Story {
            relations,
            text: text.into(),
        }
    }

    /// Head then child of every relation, in relation order.
    /// Mentions shared by several relations appear once per relation.
    pub fn extract_entities(&self) -> Vec<EntityRecord> {
        self.relations
            .iter()
            .flat_map(|relation| [&relation.head, &relation.child])
            .map(|mention| EntityRecord {
                name: mention.name.clone(),
                entity_type: mention.kind.label().to_string(),
                start: mention.start_in_text,
                end: mention.end_in_text,
                original_text: self.text.clone(),
            })
            .collect()
    }

    /// Same mentions as `extract_entities`, as concrete entities whose
    /// neighborhoods are `window` characters of surrounding text.
    pub fn entities(&self, window: usize) -> Vec<Box<dyn Entity>> {
        self.relations
            .iter()
            .flat_map(|relation| [&relation.head, &relation.child])
            .map(|mention| mention.to_entity(&self.text, window))
            .collect()
    }
}
