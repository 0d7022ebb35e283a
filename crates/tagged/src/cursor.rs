//! Mapping between tagged offsets and caret positions.
//!
//! A cursor position counts untagged characters. Between two characters
//! there may be any number of tags, so one cursor position corresponds to
//! a range of tagged offsets; a [`Movement`] picks one of them.

use crate::scanner::{Piece, Pieces};
use std::ops::Range;

/// Which end of an ambiguous range to prefer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Movement {
    Left,
    #[default]
    Mid,
    Right,
}

/// Number of untagged characters, i.e. the largest valid cursor position.
pub fn cursor_count(s: &str) -> usize {
    Pieces::new(s).filter(|p| !p.is_tag()).count()
}

/// Cursor position for the tagged offset `index`.
///
/// Offsets inside a tag resolve to the position before the tag. Offsets
/// that split a multi-byte character are rounded according to `dir`.
pub fn index_to_cursor(s: &str, index: usize, dir: Movement) -> usize {
    let mut count = 0;
    for piece in Pieces::new(s) {
        if piece.start() >= index {
            break;
        }
        if let Piece::Char { start, .. } = piece {
            let end = piece.end();
            if end > index {
                let round_up = match dir {
                    Movement::Left => false,
                    Movement::Right => true,
                    Movement::Mid => index - start > end - index,
                };
                if round_up {
                    count += 1;
                }
                break;
            }
            count += 1;
        }
    }
    count
}

/// All tagged offsets whose caret is at `cursor`.
///
/// Runs from just after the preceding character up to and including the
/// offset of the following one (or one past the end of the string). Never
/// empty; cursors beyond the end clamp to the end.
pub fn cursor_to_index_range(s: &str, cursor: usize) -> Range<usize> {
    let mut begin = 0;
    let mut count = 0;
    for piece in Pieces::new(s) {
        if let Piece::Char { start, .. } = piece {
            if count == cursor {
                return begin..start + 1;
            }
            count += 1;
            begin = piece.end();
        }
    }
    begin..s.len() + 1
}

/// A single tagged offset for `cursor`.
///
/// `Mid` takes the left end of the range, except at the very start where it
/// takes the right end so that text typed there picks up the formatting of
/// the first character.
pub fn cursor_to_index(s: &str, cursor: usize, dir: Movement) -> usize {
    let range = cursor_to_index_range(s, cursor);
    match dir {
        Movement::Left => range.start,
        Movement::Right => range.end - 1,
        Movement::Mid if cursor == 0 => range.end - 1,
        Movement::Mid => range.start,
    }
}
