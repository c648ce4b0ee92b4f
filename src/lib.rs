// Finance Networks - Core Library
// Entity model + story pipeline, used by the CLI and tests

pub mod error;
pub mod config;
pub mod entities;       // Entity trait + concrete kinds
pub mod mention;
pub mod relation;
pub mod story;
pub mod parser;         // Prodigy JSONL → Story
pub mod export;         // Story → CSV

// Re-export commonly used types
pub use error::NetworkError;
pub use config::ExportConfig;
pub use entities::{
    Entity, EntityBase, EntityKind,
    Person, Company, Position, Pronoun,
};
pub use mention::Mention;
pub use relation::{Relation, RelationType};
pub use story::{EntityRecord, Story};
pub use parser::{
    RawStory, RawRelation, RawSpan,
    parse_jsonl, read_jsonl, parse_story, load_stories,
};
pub use export::{
    ExportSummary,
    collect_records, drop_duplicates, write_csv, export_entities,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
