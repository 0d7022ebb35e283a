//! Whole-string transforms: stripping, escaping and removing tags.

use crate::scanner::{ESCAPE_MARKER, Piece, Pieces, base_name, closed_name, match_close_tag, skip_tag};

/// Plain text of a tagged string, with escaped `<` restored.
pub fn untag(s: &str) -> String {
    Pieces::new(s)
        .filter_map(|piece| match piece {
            Piece::Char { ch: ESCAPE_MARKER, .. } => Some('<'),
            Piece::Char { ch, .. } => Some(ch),
            Piece::Tag { .. } => None,
        })
        .collect()
}

/// Plain text of a tagged string, leaving escape markers in place.
pub fn untag_no_escape(s: &str) -> String {
    Pieces::new(s)
        .filter_map(|piece| match piece {
            Piece::Char { ch, .. } => Some(ch),
            Piece::Tag { .. } => None,
        })
        .collect()
}

/// Like [`untag`], but also drops everything inside `<sep-soft>` spans.
pub fn untag_hide_sep(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut hidden = 0usize;
    for piece in Pieces::new(s) {
        match piece {
            Piece::Tag { name, .. } => match closed_name(name) {
                Some(closed) if closed.starts_with("sep-soft") => {
                    hidden = hidden.saturating_sub(1)
                }
                None if name.starts_with("sep-soft") => hidden += 1,
                _ => {}
            },
            Piece::Char { .. } if hidden > 0 => {}
            Piece::Char { ch: ESCAPE_MARKER, .. } => out.push('<'),
            Piece::Char { ch, .. } => out.push(ch),
        }
    }
    out
}

/// Make arbitrary text safe to splice into a tagged string.
pub fn escape(s: &str) -> String {
    s.replace('<', &ESCAPE_MARKER.to_string())
}

/// Remove every tag token starting with `prefix`, keeping the rest.
///
/// `"<kw-"` removes `<kw-a>` but not `</kw-a>`.
pub fn remove_tag_exact(s: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for piece in Pieces::new(s) {
        let text = &s[piece.start()..piece.end()];
        if !(piece.is_tag() && text.starts_with(prefix)) {
            out.push_str(text);
        }
    }
    out
}

/// Remove the openers matching `prefix` and their named closers.
pub fn remove_tag(s: &str, prefix: &str) -> String {
    let opened = remove_tag_exact(s, prefix);
    match prefix.strip_prefix('<') {
        Some(rest) => remove_tag_exact(&opened, &format!("</{rest}")),
        None => opened,
    }
}

/// Remove `prefix`-matched tags together with everything they enclose.
///
/// Stops at the first matching tag that has no closer.
pub fn remove_tag_contents(s: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pos = 0;
    while let Some(found) = s[pos..].find(prefix) {
        let open = pos + found;
        let Some(close) = match_close_tag(s, open) else {
            break;
        };
        out.push_str(&s[pos..open]);
        pos = skip_tag(s, close);
    }
    out.push_str(&s[pos..]);
    out
}

/// Rewrite legacy generic closers `</>` into explicit named closers.
///
/// A generic closer with nothing open is dropped.
pub fn fix_old_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut open: Vec<&str> = Vec::new();
    for piece in Pieces::new(s) {
        let text = &s[piece.start()..piece.end()];
        match piece {
            Piece::Tag { name, .. } => match closed_name(name) {
                Some("") => {
                    if let Some(top) = open.pop() {
                        out.push_str("</");
                        out.push_str(top);
                        out.push('>');
                    }
                }
                Some(closed) => {
                    if let Some(i) = open.iter().rposition(|n| base_name(n) == base_name(closed)) {
                        open.remove(i);
                    }
                    out.push_str(text);
                }
                None => {
                    open.push(name);
                    out.push_str(text);
                }
            },
            Piece::Char { .. } => out.push_str(text),
        }
    }
    out
}
