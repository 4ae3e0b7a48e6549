//! Renders headings as text lines for copying or export.
//!
//! A format template mixes literal text with placeholders:
//!
//! - `{title}`: the heading text
//! - `{path}`: a link target, the document path followed by `#` and the heading text
//! - `{bullet}`: a list bullet (`-`)
//! - `{num}`: the heading's counter within its level
//! - `{num-nest}`: counters of every level down to this one, joined with `.`
//! - `{num-nest[sep]}`: the same joined with a custom separator
//!
//! Each line is indented with one tab per level below the first.

use crate::heading::Heading;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Title,
    Path,
    Bullet,
    Num,
    NumNest(String),
}

/// Placeholder at the start of `rest`, with the number of bytes it spans.
fn placeholder(rest: &str) -> Option<(usize, Piece)> {
    if !rest.starts_with('{') {
        return None;
    }
    let simple = [
        ("{title}", Piece::Title),
        ("{path}", Piece::Path),
        ("{bullet}", Piece::Bullet),
        ("{num}", Piece::Num),
        ("{num-nest}", Piece::NumNest(".".to_string())),
    ];
    if let Some((tag, piece)) = simple.into_iter().find(|(tag, _)| rest.starts_with(tag)) {
        return Some((tag.len(), piece));
    }
    let inner = rest.strip_prefix("{num-nest[")?;
    let end = inner.find("]}")?;
    let consumed = "{num-nest[".len() + end + "]}".len();
    Some((consumed, Piece::NumNest(inner[..end].to_string())))
}

/// A parsed export template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    #[must_use]
    /// Parses a template. Unknown or unterminated placeholders are kept as literal text.
    pub fn parse(template: &str) -> Self {
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(ch) = rest.chars().next() {
            if let Some((consumed, piece)) = placeholder(rest) {
                if !literal.is_empty() {
                    pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                }
                pieces.push(piece);
                rest = &rest[consumed..];
            } else {
                literal.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }

        Self { pieces }
    }

    fn render(&self, heading: &Heading, level: usize, nums: &[usize], doc_path: &str) -> String {
        let mut out = "\t".repeat(level.saturating_sub(1));
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Title => out.push_str(&heading.text),
                Piece::Path => {
                    out.push_str(doc_path);
                    out.push('#');
                    out.push_str(&heading.text);
                }
                Piece::Bullet => out.push('-'),
                Piece::Num => out.push_str(&nums[level].to_string()),
                Piece::NumNest(sep) => {
                    let nest: Vec<String> =
                        nums[1..=level].iter().map(ToString::to_string).collect();
                    out.push_str(&nest.join(sep));
                }
            }
        }
        out
    }
}

#[must_use]
/// Renders one line per heading.
///
/// Numbering keeps a counter per level: a heading bumps its own level's counter and resets every
/// deeper one, so a level-2 count restarts under each new level-1 heading.
pub fn stringify(headings: &[Heading], template: &Template, doc_path: &str) -> Vec<String> {
    let mut nums = [0usize; 7];
    headings
        .iter()
        .map(|heading| {
            let level = usize::from(heading.level).clamp(1, 6);
            nums[level] += 1;
            nums[level + 1..].fill(0);
            template.render(heading, level, &nums, doc_path)
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/export.rs"]
mod tests;
