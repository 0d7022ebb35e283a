//! Substring replacement that keeps the markup balanced.

use crate::cursor::{Movement, cursor_count, cursor_to_index, cursor_to_index_range};
use crate::scanner::{Piece, Pieces, base_name, closed_name};
use crate::transform::escape;

/// Replace the untagged characters `start..end` of `s` with `replacement`.
///
/// Seen through [`untag`](crate::untag) this is a plain text replacement.
/// Tags outside the replaced range are kept verbatim. Tags inside it whose
/// partner lies outside are kept, closers before openers; pairs entirely
/// inside are dropped. A deletion also cancels tag pairs left empty at the
/// edit point.
///
/// An empty range inserts at the [`Movement::Mid`] offset of `start`. A
/// non-empty range starts at the first replaced character, so the
/// replacement takes over its formatting.
pub fn tagged_substr_replace(s: &str, start: usize, end: usize, replacement: &str) -> String {
    let count = cursor_count(s);
    let start = start.min(count);
    let end = end.clamp(start, count);

    let (ts, te) = if start == end {
        let at = cursor_to_index(s, start, Movement::Mid);
        (at, at)
    } else {
        (
            cursor_to_index_range(s, start).end - 1,
            cursor_to_index_range(s, end).start,
        )
    };

    let middle = &s[ts..te];
    let mut openers: Vec<(&str, &str)> = Vec::new();
    let mut closers: Vec<&str> = Vec::new();
    for piece in Pieces::new(middle) {
        let Piece::Tag { start: at, end: to, name } = piece else {
            continue;
        };
        let token = &middle[at..to];
        match closed_name(name) {
            Some(closed) => {
                let closes_top = openers.last().is_some_and(|(open, _)| {
                    closed.is_empty() || base_name(open) == base_name(closed)
                });
                if closes_top {
                    openers.pop();
                } else {
                    closers.push(token);
                }
            }
            None => openers.push((name, token)),
        }
    }

    let mut junction = closers;
    junction.extend(openers.iter().map(|(_, token)| *token));

    let head = &s[..ts];
    let tail = &s[te..];
    if start < end && replacement.is_empty() {
        return join_cancelling(head, &junction, tail);
    }

    let mut out = String::with_capacity(s.len() + replacement.len());
    out.push_str(head);
    out.push_str(&escape(replacement));
    for token in junction {
        out.push_str(token);
    }
    out.push_str(tail);
    out
}

/// Where a tag in [`join_cancelling`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Head,
    Junction,
    Tail,
}

/// Concatenate `head`, `tags` and `tail`, cancelling the tag pairs that the
/// deletion left empty.
///
/// Only pairs that meet across the deleted span cancel. A pair lying wholly
/// in the tags before it, or wholly in the tags after it, was already empty
/// and is kept.
fn join_cancelling(head: &str, tags: &[&str], tail: &str) -> String {
    let head_split = Pieces::new(head)
        .filter(|p| !p.is_tag())
        .last()
        .map_or(0, |p| p.end());
    let tail_split = Pieces::new(tail)
        .find(|p| !p.is_tag())
        .map_or(tail.len(), |p| p.start());

    let head_tags = &head[head_split..];
    let tail_tags = &tail[..tail_split];
    let tokens = Pieces::new(head_tags)
        .map(|p| (&head_tags[p.start()..p.end()], Side::Head))
        .chain(tags.iter().map(|t| (*t, Side::Junction)))
        .chain(Pieces::new(tail_tags).map(|p| (&tail_tags[p.start()..p.end()], Side::Tail)));

    let mut kept: Vec<Option<&str>> = Vec::new();
    // Indices into `kept` of openers still waiting for a closer.
    let mut open: Vec<(usize, Side)> = Vec::new();
    for (token, side) in tokens {
        let Some(closed) = token.strip_prefix("</") else {
            open.push((kept.len(), side));
            kept.push(Some(token));
            continue;
        };
        let closed = closed.trim_end_matches('>');
        let matched = open.last().copied().filter(|&(i, _)| {
            kept[i].is_some_and(|top| {
                let name = top.trim_start_matches('<').trim_end_matches('>');
                closed.is_empty() || base_name(name) == base_name(closed)
            })
        });
        match matched {
            Some((i, open_side)) => {
                open.pop();
                if open_side == side && side != Side::Junction {
                    kept.push(Some(token));
                } else {
                    kept[i] = None;
                }
            }
            None => {
                open.clear();
                kept.push(Some(token));
            }
        }
    }

    let mut out = String::with_capacity(head.len() + tail.len());
    out.push_str(&head[..head_split]);
    for token in kept.into_iter().flatten() {
        out.push_str(token);
    }
    out.push_str(&tail[tail_split..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::untag;

    #[test]
    fn test_replace_plain_text() {
        assert_eq!(tagged_substr_replace("abcd", 1, 3, "XY"), "aXYd");
        assert_eq!(tagged_substr_replace("abcd", 4, 4, "!"), "abcd!");
        assert_eq!(tagged_substr_replace("", 0, 0, "x"), "x");
    }

    #[test]
    fn test_replace_inherits_first_character_format() {
        assert_eq!(tagged_substr_replace("<b>ab</b>cd", 1, 3, "X"), "<b>aX</b>d");
        assert_eq!(tagged_substr_replace("ab<i>cd</i>", 1, 3, "X"), "aX<i>d</i>");
    }

    #[test]
    fn test_insert_position() {
        // Inside the bold run after its last character.
        assert_eq!(tagged_substr_replace("<b>a</b>c", 1, 1, "X"), "<b>aX</b>c");
        // At the very start: inside the leading tag.
        assert_eq!(tagged_substr_replace("<b>a</b>", 0, 0, "X"), "<b>Xa</b>");
    }

    #[test]
    fn test_replace_drops_inner_pairs() {
        assert_eq!(tagged_substr_replace("a<i>b</i>c", 0, 3, "X"), "X");
        assert_eq!(tagged_substr_replace("x<i>a<b>b</b>c</i>y", 1, 4, "Z"), "x<i>Z</i>y");
    }

    #[test]
    fn test_delete_cancels_empty_pairs() {
        assert_eq!(tagged_substr_replace("<x>a</x>", 0, 1, ""), "");
        assert_eq!(tagged_substr_replace("q<x>a</x>r", 1, 2, ""), "qr");
        assert_eq!(tagged_substr_replace("<x>a", 0, 1, ""), "<x>");
        assert_eq!(tagged_substr_replace("<x>ab</x>", 0, 1, ""), "<x>b</x>");
    }

    #[test]
    fn test_delete_keeps_empty_pairs_outside_the_span() {
        assert_eq!(tagged_substr_replace("a<b></b>cd", 1, 2, ""), "a<b></b>d");
        assert_eq!(tagged_substr_replace("ab<i></i>c", 1, 2, ""), "a<i></i>c");
        // Still cancels the pair that meets across the deleted text.
        assert_eq!(tagged_substr_replace("<i><b></b>x</i>y", 0, 1, ""), "<b></b>y");
    }

    #[test]
    fn test_replacement_is_escaped() {
        let out = tagged_substr_replace("ab", 1, 1, "<b>");
        assert_eq!(out, "a\u{1}b>b");
        assert_eq!(untag(&out), "a<b>b");
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(tagged_substr_replace("a<b></b>", 1, 5, "!"), "a!<b></b>");
        assert_eq!(tagged_substr_replace("ab", 3, 1, "!"), "ab!");
    }
}
