//! Locating headings from document offsets and walking their ancestry.

use crate::heading::Heading;

#[must_use]
/// Indices of the heading at `index` and all of its ancestors, in document order.
///
/// Walks backwards with a ceiling that starts just above the heading's own level; every earlier
/// heading strictly shallower than the ceiling is an ancestor and lowers the ceiling to its level.
/// Returns an empty path for an out-of-range index.
pub fn ancestor_path(headings: &[Heading], index: usize) -> Vec<usize> {
    let Some(target) = headings.get(index) else {
        return Vec::new();
    };

    let mut path = vec![index];
    let mut ceiling = target.level;
    for i in (0..index).rev() {
        if ceiling <= 1 {
            break;
        }
        if headings[i].level < ceiling {
            path.push(i);
            ceiling = headings[i].level;
        }
    }
    path.reverse();
    path
}

#[must_use]
/// Index of the last heading starting at or before `offset`, or `None` if the offset precedes
/// every heading.
pub fn nearest_heading_before(headings: &[Heading], offset: usize) -> Option<usize> {
    headings
        .iter()
        .rposition(|h| h.position.start.offset <= offset)
}

#[cfg(test)]
#[path = "tests/locate.rs"]
mod tests;
