use super::{JumpTarget, MarkdownNavigator, Navigator};
use crate::heading::Heading;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_in_memory_navigator() {
    let mut nav = MarkdownNavigator::from_text("draft.md", "# One\n\n## Two\n", 2);
    assert_eq!(nav.default_level(), 2);
    assert_eq!(nav.path().to_str(), Some("draft.md"));
    assert_eq!(nav.headings().unwrap().len(), 2);

    nav.set_text("# One\n");
    assert_eq!(nav.headings().unwrap().len(), 1);
}

#[test]
fn test_file_navigator_rereads_on_every_call() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "# A\n").unwrap();
    let nav = MarkdownNavigator::open(file.path(), 1);
    assert_eq!(nav.headings().unwrap().len(), 1);

    std::fs::write(file.path(), "# A\n\n## B\n").unwrap();
    assert_eq!(nav.headings().unwrap().len(), 2);
}

#[test]
fn test_jump_targets() {
    let nav = MarkdownNavigator::from_text("doc.md", "intro\n\n# One\n\n## Two\n", 1);
    let headings = nav.headings().unwrap();

    assert_eq!(
        nav.jump(&headings, 1),
        Some(JumpTarget::Position { line: 4, column: 0 })
    );
    assert_eq!(nav.jump(&headings, 7), None);
}

#[test]
fn test_jump_prefers_external_id() {
    let mut card = Heading::new("Card", 1);
    card.id = Some("node-17".to_string());
    assert_eq!(JumpTarget::of(&card), JumpTarget::Id("node-17".to_string()));
}

#[test]
fn test_drop_unsupported_by_default() {
    let mut nav = MarkdownNavigator::from_text("doc.md", "# A\n# B\n", 1);
    assert!(!nav.handle_drop(0, 1).unwrap());
}
