use super::{ancestor_path, nearest_heading_before};
use crate::heading::{Heading, Point, Position};

fn headings(outline: &[(&str, u8)]) -> Vec<Heading> {
    outline.iter().map(|&(t, l)| Heading::new(t, l)).collect()
}

fn at_offsets(offsets: &[usize]) -> Vec<Heading> {
    offsets
        .iter()
        .enumerate()
        .map(|(i, &offset)| {
            let start = Point {
                line: i * 2,
                column: 0,
                offset,
            };
            Heading::new(format!("H{i}"), 1).at(Position { start, end: start })
        })
        .collect()
}

#[test]
fn test_ancestor_path_of_nested_heading() {
    let hs = headings(&[("H1", 1), ("H2", 2), ("H3", 3)]);
    assert_eq!(ancestor_path(&hs, 2), vec![0, 1, 2]);
    assert_eq!(ancestor_path(&hs, 0), vec![0]);
}

#[test]
fn test_ancestor_path_skips_siblings_and_cousins() {
    let hs = headings(&[("A", 1), ("B", 2), ("C", 3), ("D", 2), ("E", 3), ("F", 4)]);
    assert_eq!(ancestor_path(&hs, 5), vec![0, 3, 4, 5]);
    assert_eq!(ancestor_path(&hs, 3), vec![0, 3]);
}

#[test]
fn test_ancestor_path_with_skipped_levels() {
    let hs = headings(&[("A", 2), ("B", 1), ("C", 4), ("D", 3)]);
    assert_eq!(ancestor_path(&hs, 3), vec![1, 3]);
    assert_eq!(ancestor_path(&hs, 2), vec![1, 2]);
}

#[test]
fn test_ancestor_path_out_of_range() {
    let hs = headings(&[("A", 1)]);
    assert!(ancestor_path(&hs, 4).is_empty());
}

#[test]
fn test_nearest_heading_before_offset() {
    let hs = at_offsets(&[10, 40, 90]);
    assert_eq!(nearest_heading_before(&hs, 0), None);
    assert_eq!(nearest_heading_before(&hs, 9), None);
    assert_eq!(nearest_heading_before(&hs, 10), Some(0));
    assert_eq!(nearest_heading_before(&hs, 89), Some(1));
    assert_eq!(nearest_heading_before(&hs, 1_000), Some(2));
    assert_eq!(nearest_heading_before(&[], 5), None);
}
