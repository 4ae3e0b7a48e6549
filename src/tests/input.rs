use super::{extract_file_headings, extract_headings, find_documents};
use crate::formats::markdown::MarkdownFormat;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

const DOC: &str = "# Title\n\nIntro text.\n\n## Part One\n\nBody.\n\n### Detail\n\n## Part Two\n";

#[test]
fn test_extracts_atx_headings_in_order() {
    let headings = extract_headings(DOC, &MarkdownFormat).unwrap();

    let outline: Vec<(&str, u8)> = headings.iter().map(|h| (h.text.as_str(), h.level)).collect();
    assert_eq!(
        outline,
        vec![("Title", 1), ("Part One", 2), ("Detail", 3), ("Part Two", 2)]
    );
}

#[test]
fn test_heading_positions() {
    let headings = extract_headings(DOC, &MarkdownFormat).unwrap();

    assert_eq!(headings[0].position.start.offset, 0);
    assert_eq!(headings[1].position.start.line, 4);
    assert_eq!(headings[1].position.start.column, 0);
    assert_eq!(
        headings[1].position.start.offset,
        DOC.find("## Part One").unwrap()
    );
    assert!(headings.iter().all(|h| h.id.is_none()));
}

#[test]
fn test_extracts_setext_headings() {
    let doc = "Top\n===\n\nSome text.\n\nSecond\n------\n";
    let headings = extract_headings(doc, &MarkdownFormat).unwrap();

    let outline: Vec<(&str, u8)> = headings.iter().map(|h| (h.text.as_str(), h.level)).collect();
    assert_eq!(outline, vec![("Top", 1), ("Second", 2)]);
}

#[test]
fn test_document_without_headings() {
    let headings = extract_headings("just a paragraph\n", &MarkdownFormat).unwrap();
    assert!(headings.is_empty());
}

#[test]
fn test_extract_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{DOC}").unwrap();

    let headings = extract_file_headings(file.path(), &MarkdownFormat).unwrap();
    assert_eq!(headings.len(), 4);
}

#[test]
fn test_find_documents_filters_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.md"), "# B\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "plain").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("a.md"), "# A\n").unwrap();

    let found = find_documents(vec![dir.path().to_path_buf()], &["md".to_string()]).unwrap();

    assert_eq!(
        found,
        vec![dir.path().join("b.md"), dir.path().join("sub").join("a.md")]
    );
}
