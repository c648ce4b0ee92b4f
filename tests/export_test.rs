use finance_networks::{export_entities, load_stories, ExportConfig, NetworkError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const STORY_1: &str = r#"{"text":"Jane Doe will join Acme as CFO.","relations":[{"label":"WILL_JOIN","head_span":{"start":0,"end":8,"label":"PERSON"},"child_span":{"start":19,"end":23,"label":"ORG"}},{"label":"WILL_HAVE_POSITION","head_span":{"start":0,"end":8,"label":"PERSON"},"child_span":{"start":27,"end":30,"label":"POSITION"}}]}"#;
const STORY_2: &str = r#"{"text":"She is leaving Beta Bank.","relations":[{"label":"IS_LEAVING","head_span":{"start":0,"end":3,"label":"PRONOUN"},"child_span":{"start":15,"end":24,"label":"ORG"}}]}"#;

fn write_input(dir: &TempDir, lines: &[&str]) -> PathBuf {
    let path = dir.path().join("stories.jsonl");
    fs::write(&path, lines.join("\n")).unwrap();
    path
}

#[test]
fn export_drops_duplicate_rows() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, &[STORY_1, STORY_2]);
    let output = dir.path().join("entities.csv");

    let summary = export_entities(&input, &output, &ExportConfig::default()).unwrap();
    assert_eq!(summary.stories, 2);
    assert_eq!(summary.raw_rows, 6);
    assert_eq!(summary.written_rows, 5); // "Jane Doe" appears twice in story 1
    assert_eq!(summary.duplicates_dropped(), 1);

    let csv = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Entity_Name,Type,Start_Position,End_Position,Original_Text");
    assert_eq!(lines[1], "Jane Doe,PERSON,0,8,Jane Doe will join Acme as CFO.");
    assert_eq!(lines[2], "Acme,ORG,19,23,Jane Doe will join Acme as CFO.");
    assert_eq!(lines[3], "CFO,POSITION,27,30,Jane Doe will join Acme as CFO.");
    assert_eq!(lines[4], "She,PRONOUN,0,3,She is leaving Beta Bank.");
    assert_eq!(lines[5], "Beta Bank,ORG,15,24,She is leaving Beta Bank.");
    assert_eq!(lines.len(), 6);
}

#[test]
fn export_can_keep_duplicates() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, &[STORY_1]);
    let output = dir.path().join("entities.csv");
    let config = ExportConfig::default().with_overrides(None, true);

    let summary = export_entities(&input, &output, &config).unwrap();
    assert_eq!(summary.written_rows, 4);
    assert_eq!(fs::read_to_string(&output).unwrap().lines().count(), 5);
}

#[test]
fn loaded_stories_build_entities_with_context() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, &[STORY_2]);

    let stories = load_stories(&input).unwrap();
    let entities = stories[0].entities(12);

    assert_eq!(entities[0].to_text(), "She:Pronoun");
    assert!(entities[0].is_in_right_neighborhood("leaving"));
    assert_eq!(entities[1].to_text(), "Beta Bank:Company");
    assert!(entities[1].is_in_left_neighborhood("leaving"));
    assert!(!entities[1].is_in_right_neighborhood("Bank"));
}

#[test]
fn missing_input_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_stories(&dir.path().join("nope.jsonl")).unwrap_err();
    assert!(matches!(err, NetworkError::Io { .. }));
}

#[test]
fn malformed_line_aborts_export() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, &[STORY_1, "{\"text\": 3}"]);
    let output = dir.path().join("entities.csv");

    let err = export_entities(&input, &output, &ExportConfig::default()).unwrap_err();
    assert!(matches!(err, NetworkError::MalformedLine { line: 2, .. }));
    assert!(!output.exists());
}

#[test]
fn config_window_controls_entity_neighborhoods() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, &[STORY_2]);
    let config_path = dir.path().join("financenetworks.toml");
    fs::write(&config_path, "neighborhood_window = 0\n").unwrap();

    let narrow = ExportConfig::load_or_default(Some(&config_path)).unwrap();
    let wide = ExportConfig::load_or_default(None).unwrap();
    assert_eq!(narrow.neighborhood_window, 0);

    let stories = load_stories(&input).unwrap();
    let narrow_entities = stories[0].entities(narrow.neighborhood_window);
    let wide_entities = stories[0].entities(wide.neighborhood_window);

    assert_eq!(narrow_entities[1].left_neighborhood(), "");
    assert_eq!(narrow_entities[1].right_neighborhood(), "");
    assert_eq!(wide_entities[1].left_neighborhood(), "She is leaving ");
    assert_eq!(wide_entities[1].right_neighborhood(), ".");
    assert!(*narrow_entities[1] != *wide_entities[1]);

    // CLI flag beats the file
    let overridden = narrow.with_overrides(Some(3), false);
    let entities = stories[0].entities(overridden.neighborhood_window);
    assert_eq!(entities[1].left_neighborhood(), "ng ");
}

#[test]
fn type_column_uses_canonical_label() {
    let dir = TempDir::new().unwrap();
    let line = r#"{"text":"Jane Doe joins Acme.","relations":[{"label":"will_join","head_span":{"start":0,"end":8,"label":"person"},"child_span":{"start":15,"end":19,"label":"Org"}}]}"#;
    let input = write_input(&dir, &[line]);
    let output = dir.path().join("entities.csv");

    export_entities(&input, &output, &ExportConfig::default()).unwrap();

    let csv = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[1], "Jane Doe,PERSON,0,8,Jane Doe joins Acme.");
    assert_eq!(lines[2], "Acme,ORG,15,19,Jane Doe joins Acme.");
}
