// 📤 Entity Export - stories → deduplicated CSV of entity mentions

use crate::config::ExportConfig;
use crate::error::{NetworkError, Result};
use crate::parser::load_stories;
use crate::story::{EntityRecord, Story};
use serde::Serialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Counts reported after an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub stories: usize,
    pub raw_rows: usize,
    pub written_rows: usize,
}

impl ExportSummary {
    pub fn duplicates_dropped(&self) -> usize {
        self.raw_rows - self.written_rows
    }
}

/// Keep the first occurrence of each exact row, preserving order
pub fn drop_duplicates(records: Vec<EntityRecord>) -> Vec<EntityRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(record.clone()))
        .collect()
}

/// All stories' entity rows, concatenated in story order
pub fn collect_records(stories: &[Story], dedup: bool) -> Vec<EntityRecord> {
    let records: Vec<EntityRecord> = stories
        .iter()
        .flat_map(|story| story.extract_entities())
        .collect();

    if dedup {
        let before = records.len();
        let unique = drop_duplicates(records);
        debug!(before, after = unique.len(), "dropped duplicate rows");
        unique
    } else {
        records
    }
}

/// Write rows with a header, even when there are no rows
pub fn write_csv<W: Write>(records: &[EntityRecord], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(EntityRecord::HEADERS)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush().map_err(csv::Error::from)?;

    Ok(())
}

/// JSONL annotations in, CSV entity table out
pub fn export_entities(input: &Path, output: &Path, config: &ExportConfig) -> Result<ExportSummary> {
    let stories = load_stories(input)?;
    let raw_rows: usize = stories.iter().map(|s| s.relations.len() * 2).sum();
    let records = collect_records(&stories, config.drop_duplicates);

    let file = File::create(output).map_err(|source| NetworkError::Io {
        path: output.to_path_buf(),
        source,
    })?;
    write_csv(&records, file)?;

    let summary = ExportSummary {
        stories: stories.len(),
        raw_rows,
        written_rows: records.len(),
    };
    info!(
        output = %output.display(),
        rows = summary.written_rows,
        duplicates = summary.duplicates_dropped(),
        "exported entities"
    );

    Ok(summary)
}
