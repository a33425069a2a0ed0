//! Match highlighting for filtered labels.
//!
//! [`segments`] splits a label into alternating plain and matched runs for a
//! search term, case-insensitively and for every non-overlapping occurrence.
//! It holds no state: the same `(label, term)` always yields the same runs.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// A run of a label, either matching the search term or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

fn same_letter(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Byte length of the term match starting at `start`, if there is one.
fn match_at(label: &str, start: usize, term: &[char]) -> Option<usize> {
    let mut chars = label[start..].char_indices();
    for &t in term {
        match chars.next() {
            Some((_, c)) if same_letter(c, t) => {}
            _ => return None,
        }
    }
    Some(chars.next().map_or(label.len() - start, |(i, _)| i))
}

/// Split `label` into plain and matched segments for `term`.
///
/// An empty term yields the whole label as one plain segment. Concatenating
/// the segment texts always reproduces `label`.
pub fn segments<'a>(label: &'a str, term: &str) -> Vec<Segment<'a>> {
    let term: Vec<char> = term.chars().collect();
    if term.is_empty() || label.is_empty() {
        return vec![Segment {
            text: label,
            matched: false,
        }];
    }

    let mut out = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;
    while pos < label.len() {
        if let Some(len) = match_at(label, pos, &term) {
            if plain_start < pos {
                out.push(Segment {
                    text: &label[plain_start..pos],
                    matched: false,
                });
            }
            out.push(Segment {
                text: &label[pos..pos + len],
                matched: true,
            });
            pos += len;
            plain_start = pos;
        } else {
            pos += label[pos..].chars().next().map_or(1, char::len_utf8);
        }
    }
    if plain_start < label.len() {
        out.push(Segment {
            text: &label[plain_start..],
            matched: false,
        });
    }
    out
}

/// Render `label` as a line with the matched runs in `matched` style.
pub fn highlight_line(label: &str, term: &str, base: Style, matched: Style) -> Line<'static> {
    let spans: Vec<Span<'static>> = segments(label, term)
        .into_iter()
        .map(|seg| {
            let style = if seg.matched { base.patch(matched) } else { base };
            Span::styled(seg.text.to_string(), style)
        })
        .collect();
    Line::from(spans)
}
