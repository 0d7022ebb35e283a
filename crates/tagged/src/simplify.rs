//! Repair and normalization passes over tagged strings.

use crate::scanner::{ESCAPE_MARKER, Piece, Pieces, base_name, close_tag, closed_name};
use log::debug;

/// Tags whose nested re-opens carry no extra meaning.
fn is_formatting(name: &str) -> bool {
    matches!(base_name(name), "b" | "i" | "sym" | "line")
}

/// Repair a string so it is a well-formed tagged string.
///
/// A `<` that does not start a proper token (no `>` before the next `<`, or
/// an empty `<>`) is escaped. Closers with nothing to close are dropped and
/// tags still open at the end are closed there.
pub fn verify_tagged(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut open: Vec<&str> = Vec::new();
    let mut pos = 0;
    while pos < s.len() {
        let rest = &s[pos..];
        let Some(body) = rest.strip_prefix('<') else {
            let Some(ch) = rest.chars().next() else {
                break;
            };
            out.push(ch);
            pos += ch.len_utf8();
            continue;
        };

        let gt = body.find('>');
        let lt = body.find('<');
        let len = match gt {
            Some(g) if g > 0 && lt.is_none_or(|l| l > g) => g,
            _ => {
                debug!("escaping stray '<' at offset {pos}");
                out.push(ESCAPE_MARKER);
                pos += 1;
                continue;
            }
        };
        let name = &body[..len];
        let token = &rest[..len + 2];
        pos += len + 2;

        match closed_name(name) {
            Some("") => {
                if open.pop().is_some() {
                    out.push_str(token);
                } else {
                    debug!("dropping generic closer with nothing open");
                }
            }
            Some(closed) => {
                match open.iter().rposition(|n| base_name(n) == base_name(closed)) {
                    Some(i) => {
                        open.remove(i);
                        out.push_str(token);
                    }
                    None => debug!("dropping unmatched closer {token}"),
                }
            }
            None => {
                open.push(name);
                out.push_str(token);
            }
        }
    }
    for name in open.iter().rev() {
        debug!("closing unclosed tag <{name}>");
        out.push_str(&close_tag(name));
    }
    out
}

/// Cancel empty tag pairs and merge adjacent spans of the same format.
///
/// Looks at each run of consecutive tags: `<x></x>` (or `<x></>`) vanishes,
/// and for formatting tags `</b><b>` joins the two bold spans.
pub fn simplify_tagged_merge(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending: Vec<(&str, &str)> = Vec::new();
    for piece in Pieces::new(s) {
        let text = &s[piece.start()..piece.end()];
        let Piece::Tag { name, .. } = piece else {
            for (_, token) in pending.drain(..) {
                out.push_str(token);
            }
            out.push_str(text);
            continue;
        };
        let cancels = match (pending.last(), closed_name(name)) {
            (Some((top, _)), Some(closed)) => {
                closed_name(top).is_none()
                    && (closed.is_empty() || base_name(top) == base_name(closed))
            }
            (Some((top, _)), None) => {
                closed_name(top) == Some(name) && is_formatting(name)
            }
            (None, _) => false,
        };
        if cancels {
            pending.pop();
        } else {
            pending.push((name, text));
        }
    }
    for (_, token) in pending {
        out.push_str(token);
    }
    out
}

struct OpenTag<'a> {
    name: &'a str,
    redundant: bool,
}

/// Drop re-opens of formatting tags that are already open, with their
/// closers: `<b>a<b>b</b>c</b>` becomes `<b>abc</b>`.
pub fn simplify_tagged_overlap(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut open: Vec<OpenTag> = Vec::new();
    for piece in Pieces::new(s) {
        let text = &s[piece.start()..piece.end()];
        let Piece::Tag { name, .. } = piece else {
            out.push_str(text);
            continue;
        };
        match closed_name(name) {
            Some(closed) => {
                let found = if closed.is_empty() {
                    open.len().checked_sub(1)
                } else {
                    open.iter()
                        .rposition(|t| base_name(t.name) == base_name(closed))
                };
                match found {
                    Some(i) => {
                        if !open.remove(i).redundant {
                            out.push_str(text);
                        }
                    }
                    None => out.push_str(text),
                }
            }
            None => {
                let redundant = is_formatting(name)
                    && open
                        .iter()
                        .any(|t| !t.redundant && base_name(t.name) == base_name(name));
                if !redundant {
                    out.push_str(text);
                }
                open.push(OpenTag { name, redundant });
            }
        }
    }
    out
}

/// Apply [`simplify_tagged_merge`] and [`simplify_tagged_overlap`] until
/// nothing changes.
pub fn simplify_tagged(s: &str) -> String {
    let mut current = s.to_string();
    loop {
        let next = simplify_tagged_overlap(&simplify_tagged_merge(&current));
        if next == current {
            return current;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::untag;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_verify_escapes_stray_brackets() {
        init_logger();
        assert_eq!(verify_tagged("1 < 2"), "1 \u{1} 2");
        assert_eq!(verify_tagged("a<>b"), "a\u{1}>b");
        assert_eq!(verify_tagged("a<b<i>c</i>"), "a\u{1}b<i>c</i>");
        assert_eq!(verify_tagged("<b>ok</b>"), "<b>ok</b>");
    }

    #[test]
    fn test_verify_balances_tags() {
        init_logger();
        assert_eq!(verify_tagged("<b>x"), "<b>x</b>");
        assert_eq!(verify_tagged("x</b>y</>"), "xy");
        assert_eq!(verify_tagged("<b><i>x"), "<b><i>x</i></b>");
        assert_eq!(verify_tagged("<b>x</>"), "<b>x</>");
    }

    #[test]
    fn test_merge_cancels_empty_pairs() {
        assert_eq!(simplify_tagged_merge("a<kw-x></kw-x>b"), "ab");
        assert_eq!(simplify_tagged_merge("a<i></>b"), "ab");
        assert_eq!(simplify_tagged_merge("<b><i></i></b>"), "");
    }

    #[test]
    fn test_merge_joins_adjacent_formatting() {
        assert_eq!(simplify_tagged_merge("<b>a</b><b>c</b>"), "<b>ac</b>");
        assert_eq!(
            simplify_tagged_merge("<i><b>a</b></i><i><b>c</b></i>"),
            "<i><b>ac</b></i>"
        );
        assert_eq!(
            simplify_tagged_merge("<kw-a>x</kw-a><kw-a>y</kw-a>"),
            "<kw-a>x</kw-a><kw-a>y</kw-a>"
        );
    }

    #[test]
    fn test_overlap_removes_nested_reopens() {
        assert_eq!(simplify_tagged_overlap("<i>a<i>b</i>c</i>"), "<i>abc</i>");
        assert_eq!(
            simplify_tagged_overlap("<b>x<i><b>y</b></i></b>"),
            "<b>x<i>y</i></b>"
        );
        assert_eq!(
            simplify_tagged_overlap("<atom>a<atom>b</atom></atom>"),
            "<atom>a<atom>b</atom></atom>"
        );
    }

    #[test]
    fn test_simplify_reaches_fixed_point() {
        let s = "<b>a</b><b><i></i>b<b>c</b></b>";
        let once = simplify_tagged(s);
        assert_eq!(once, "<b>abc</b>");
        assert_eq!(simplify_tagged(&once), once);
        assert_eq!(untag(&once), untag(s));
    }
}
