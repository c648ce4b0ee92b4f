// 🏗️ Story Parser - Prodigy relation annotations (JSONL) → Story
//
// One JSON object per line. Only `text` and `relations` are read; every
// other field the annotation tool writes is ignored.

use crate::entities::EntityKind;
use crate::error::{NetworkError, Result};
use crate::mention::{char_slice, Mention};
use crate::relation::{Relation, RelationType};
use crate::story::Story;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

// ============================================================================
// RAW ANNOTATION RECORDS
// ============================================================================

/// A span as written by the annotation tool (character offsets).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawSpan {
    pub start: usize,
    pub end: usize,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRelation {
    pub label: String,
    pub head_span: RawSpan,
    pub child_span: RawSpan,
}

/// One JSONL line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawStory {
    pub text: String,

    #[serde(default)]
    pub relations: Vec<RawRelation>,
}

// ============================================================================
// PARSING
// ============================================================================

/// Decode JSONL from any reader. Blank lines are skipped.
pub fn parse_jsonl<R: BufRead>(reader: R) -> Result<Vec<RawStory>> {
    let mut stories = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| NetworkError::Io {
            path: "<reader>".into(),
            source,
        })?;

        if line.trim().is_empty() {
            continue;
        }

        let story = serde_json::from_str(&line).map_err(|source| NetworkError::MalformedLine {
            line: line_number,
            source,
        })?;
        stories.push(story);
    }

    Ok(stories)
}

/// Read a JSONL annotation file
pub fn read_jsonl(path: &Path) -> Result<Vec<RawStory>> {
    let file = File::open(path).map_err(|source| NetworkError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let stories = parse_jsonl(BufReader::new(file))?;
    debug!(path = %path.display(), records = stories.len(), "read annotation file");
    Ok(stories)
}

/// Build a mention from a span; its name is the covered text.
fn parse_span(span: &RawSpan, text: &str, text_len: usize) -> Result<Mention> {
    if span.start > span.end || span.end > text_len {
        return Err(NetworkError::SpanOutOfBounds {
            start: span.start,
            end: span.end,
            len: text_len,
        });
    }

    let kind = EntityKind::from_label(&span.label)?;
    let name = char_slice(text, span.start, span.end);
    Ok(Mention::new(name, kind, span.start, span.end))
}

/// Convert one annotation record into a Story
pub fn parse_story(raw: &RawStory) -> Result<Story> {
    let text_len = raw.text.chars().count();

    let relations = raw
        .relations
        .iter()
        .map(|relation| -> Result<Relation> {
            let relation_type = RelationType::from_label(&relation.label)?;
            let head = parse_span(&relation.head_span, &raw.text, text_len)?;
            let child = parse_span(&relation.child_span, &raw.text, text_len)?;
            Ok(Relation::new(head, child, relation_type))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Story::new(relations, raw.text.clone()))
}

/// Read and parse every story in a JSONL file
pub fn load_stories(path: &Path) -> Result<Vec<Story>> {
    let raw = read_jsonl(path)?;
    let stories = raw.iter().map(parse_story).collect::<Result<Vec<_>>>()?;

    let relations: usize = stories.iter().map(|s| s.relations.len()).sum();
    info!(
        path = %path.display(),
        stories = stories.len(),
        relations,
        "loaded stories"
    );

    Ok(stories)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const LINE: &str = r#"{"text":"Jane Doe will join Acme as CFO.","_input_hash":12,"relations":[{"label":"WILL_JOIN","head":0,"child":3,"head_span":{"start":0,"end":8,"label":"PERSON","token_start":0},"child_span":{"start":19,"end":23,"label":"ORG"}}]}"#;

    #[test]
    fn test_parse_jsonl_skips_blank_lines() {
        let input = format!("{}\n\n   \n{}\n", LINE, LINE);
        let stories = parse_jsonl(Cursor::new(input)).unwrap();
        assert_eq!(stories.len(), 2);
        assert_eq!(stories[0].relations[0].head_span.label, "PERSON");
    }

    #[test]
    fn test_parse_jsonl_reports_line_number() {
        let input = format!("{}\n{{not json\n", LINE);
        let err = parse_jsonl(Cursor::new(input)).unwrap_err();
        assert!(matches!(err, NetworkError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn test_missing_relations_defaults_to_empty() {
        let stories = parse_jsonl(Cursor::new(r#"{"text":"No arcs here."}"#)).unwrap();
        let story = parse_story(&stories[0]).unwrap();
        assert!(story.relations.is_empty());
        assert_eq!(story.text, "No arcs here.");
    }

    #[test]
    fn test_parse_story_names_come_from_text() {
        let raw: RawStory = serde_json::from_str(LINE).unwrap();
        let story = parse_story(&raw).unwrap();

        assert_eq!(story.relations.len(), 1);
        let relation = &story.relations[0];
        assert_eq!(relation.relation_type, RelationType::WillJoin);
        assert_eq!(relation.head.name, "Jane Doe");
        assert_eq!(relation.head.kind, EntityKind::Person);
        assert_eq!(relation.child.name, "Acme");
        assert_eq!(relation.child.kind, EntityKind::Company);
        assert_eq!(relation.child.start_in_text, 19);
        assert_eq!(relation.child.end_in_text, 23);
        assert!(relation.entry_date.is_none());
    }

    #[test]
    fn test_parse_story_uses_character_offsets() {
        let raw = RawStory {
            text: "Zoë Müller joins Crédit Agricole".to_string(),
            relations: vec![RawRelation {
                label: "WILL_JOIN".to_string(),
                head_span: RawSpan { start: 0, end: 10, label: "PERSON".to_string() },
                child_span: RawSpan { start: 17, end: 32, label: "ORG".to_string() },
            }],
        };

        let story = parse_story(&raw).unwrap();
        assert_eq!(story.relations[0].head.name, "Zoë Müller");
        assert_eq!(story.relations[0].child.name, "Crédit Agricole");
    }

    #[test]
    fn test_parse_story_rejects_bad_spans() {
        let mut raw: RawStory = serde_json::from_str(LINE).unwrap();
        raw.relations[0].child_span.end = 500;
        let err = parse_story(&raw).unwrap_err();
        assert!(matches!(err, NetworkError::SpanOutOfBounds { end: 500, .. }));

        let mut raw: RawStory = serde_json::from_str(LINE).unwrap();
        raw.relations[0].head_span.start = 9;
        raw.relations[0].head_span.end = 8;
        assert!(parse_story(&raw).is_err());
    }

    #[test]
    fn test_parse_story_rejects_unknown_labels() {
        let mut raw: RawStory = serde_json::from_str(LINE).unwrap();
        raw.relations[0].head_span.label = "GPE".to_string();
        assert!(matches!(
            parse_story(&raw).unwrap_err(),
            NetworkError::UnknownEntityLabel(_)
        ));

        let mut raw: RawStory = serde_json::from_str(LINE).unwrap();
        raw.relations[0].label = "LIKES".to_string();
        assert!(matches!(
            parse_story(&raw).unwrap_err(),
            NetworkError::UnknownRelationLabel(_)
        ));
    }
}
