//! Boundary detection and matching for single tag tokens.

/// Stands in for a literal `<` inside tagged text.
pub const ESCAPE_MARKER: char = '\u{1}';

/// One unit of a tagged string: either a whole tag token or a content char.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    /// A tag token occupying `start..end`. `name` is the text between `<`
    /// and `>`, so closers start with `/` and the generic closer is `"/"`.
    Tag {
        start: usize,
        end: usize,
        name: &'a str,
    },
    Char { start: usize, ch: char },
}

impl Piece<'_> {
    pub fn start(&self) -> usize {
        match *self {
            Piece::Tag { start, .. } | Piece::Char { start, .. } => start,
        }
    }

    pub fn end(&self) -> usize {
        match *self {
            Piece::Tag { end, .. } => end,
            Piece::Char { start, ch } => start + ch.len_utf8(),
        }
    }

    pub fn is_tag(&self) -> bool {
        matches!(self, Piece::Tag { .. })
    }
}

/// Iterator splitting a tagged string into tag tokens and content chars.
#[derive(Debug, Clone)]
pub struct Pieces<'a> {
    s: &'a str,
    pos: usize,
}

impl<'a> Pieces<'a> {
    pub fn new(s: &'a str) -> Self {
        Self::at(s, 0)
    }

    /// Start iterating at byte offset `pos`, which must be a char boundary.
    pub fn at(s: &'a str, pos: usize) -> Self {
        Self {
            s,
            pos: pos.min(s.len()),
        }
    }
}

impl<'a> Iterator for Pieces<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Piece<'a>> {
        let start = self.pos;
        let ch = self.s[start..].chars().next()?;
        if ch == '<' {
            let end = skip_tag(self.s, start);
            self.pos = end;
            Some(Piece::Tag {
                start,
                end,
                name: token_name(&self.s[start..end]),
            })
        } else {
            self.pos += ch.len_utf8();
            Some(Piece::Char { start, ch })
        }
    }
}

/// `"<b>"` -> `"b"`, `"</b>"` -> `"/b"`; an unterminated token keeps its tail.
fn token_name(token: &str) -> &str {
    let inner = token.strip_prefix('<').unwrap_or(token);
    inner.strip_suffix('>').unwrap_or(inner)
}

/// The base name a tag name matches on: no leading `/`, no `-suffix`.
pub fn base_name(name: &str) -> &str {
    let name = name.strip_prefix('/').unwrap_or(name);
    name.split('-').next().unwrap_or(name)
}

/// For a closer name (`"/b"`), the name it closes; `None` for openers.
pub fn closed_name(name: &str) -> Option<&str> {
    name.strip_prefix('/')
}

/// Offset of the `<` of the tag containing `pos`, if any.
///
/// A position is inside a tag when it lies after the `<` and at or before
/// the tag's `>`.
pub fn tag_start(s: &str, pos: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    let pos = pos.min(bytes.len());
    bytes[..pos]
        .iter()
        .rposition(|&b| b == b'<' || b == b'>')
        .filter(|&i| bytes[i] == b'<')
}

/// Offset just past the `>` of the token starting at `start`.
///
/// An unterminated token runs to the end of the string.
pub fn skip_tag(s: &str, start: usize) -> usize {
    let bytes = s.as_bytes();
    let start = start.min(bytes.len());
    bytes[start..]
        .iter()
        .position(|&b| b == b'>')
        .map_or(bytes.len(), |i| start + i + 1)
}

/// Offset of the closer matching the opening tag at `start`.
///
/// Openers and closers of the same base name nest. A generic `</>` closes
/// whatever other tag is open inside, and the tag itself otherwise.
pub fn match_close_tag(s: &str, start: usize) -> Option<usize> {
    let mut pieces = Pieces::at(s, start);
    let base = match pieces.next()? {
        Piece::Tag { name, .. } if closed_name(name).is_none() => base_name(name),
        _ => return None,
    };
    let mut depth = 1usize;
    let mut others = 0usize;
    for piece in pieces {
        let Piece::Tag { start, name, .. } = piece else {
            continue;
        };
        match closed_name(name) {
            Some("") if others > 0 => others -= 1,
            Some("") => depth -= 1,
            Some(closed) if base_name(closed) == base => depth -= 1,
            Some(_) => others = others.saturating_sub(1),
            None if base_name(name) == base => depth += 1,
            None => others += 1,
        }
        if depth == 0 {
            return Some(start);
        }
    }
    None
}

/// Start of the last occurrence of `tag` (a token prefix such as `"<kw-"`)
/// that begins before `pos`.
pub fn last_start_tag_before(s: &str, tag: &str, pos: usize) -> Option<usize> {
    if tag.is_empty() {
        return None;
    }
    s.match_indices(tag)
        .map(|(i, _)| i)
        .take_while(|&i| i < pos)
        .last()
}

/// Offset of a `tag`-prefixed opener whose block encloses `start..end`.
///
/// The block is the text between the opener and its closer, so a range
/// starting inside the opening token itself is not in it. Candidates are
/// tried from the innermost outward.
pub fn in_tag(s: &str, tag: &str, start: usize, end: usize) -> Option<usize> {
    let mut pos = start;
    loop {
        let open = last_start_tag_before(s, tag, pos)?;
        if let Some(close) = match_close_tag(s, open) {
            if start >= skip_tag(s, open) && end <= close {
                return Some(open);
            }
        }
        pos = open;
    }
}

/// Name of the tag starting at `pos`, or `""` if no tag starts there.
pub fn tag_at(s: &str, pos: usize) -> &str {
    match s.as_bytes().get(pos) {
        Some(b'<') => token_name(&s[pos..skip_tag(s, pos)]),
        _ => "",
    }
}

/// Like [`tag_at`], truncated at the first `-`.
pub fn tag_type_at(s: &str, pos: usize) -> &str {
    let name = tag_at(s, pos);
    name.split('-').next().unwrap_or(name)
}

pub fn close_tag(name: &str) -> String {
    format!("</{name}>")
}

/// Turn an opening token into its closer and vice versa.
pub fn anti_tag(tag: &str) -> String {
    if let Some(rest) = tag.strip_prefix("</") {
        format!("<{rest}")
    } else if let Some(rest) = tag.strip_prefix('<') {
        format!("</{rest}")
    } else {
        tag.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pieces_split_tags_and_chars() {
        let pieces: Vec<_> = Pieces::new("a<b>é</>").collect();
        assert_eq!(
            pieces,
            vec![
                Piece::Char { start: 0, ch: 'a' },
                Piece::Tag { start: 1, end: 4, name: "b" },
                Piece::Char { start: 4, ch: 'é' },
                Piece::Tag { start: 6, end: 9, name: "/" },
            ]
        );
        assert_eq!(pieces[2].end(), 6);
    }

    #[test]
    fn test_pieces_unterminated_tag() {
        let pieces: Vec<_> = Pieces::new("x<sym").collect();
        assert_eq!(pieces[1], Piece::Tag { start: 1, end: 5, name: "sym" });
    }

    #[test]
    fn test_tag_start() {
        let s = "a<b>c";
        assert_eq!(tag_start(s, 1), None);
        assert_eq!(tag_start(s, 2), Some(1));
        assert_eq!(tag_start(s, 3), Some(1));
        assert_eq!(tag_start(s, 4), None);
        assert_eq!(tag_start(s, 0), None);
    }

    #[test]
    fn test_skip_tag() {
        assert_eq!(skip_tag("<b>abc", 0), 3);
        assert_eq!(skip_tag("<b", 0), 2);
    }

    #[test]
    fn test_match_close_tag() {
        assert_eq!(match_close_tag("<b>abc</b>def", 0), Some(6));
        assert_eq!(match_close_tag("<i>a<i>b</i>c</i>", 0), Some(13));
        assert_eq!(match_close_tag("<sym-auto>T</sym>", 0), Some(11));
        assert_eq!(match_close_tag("<b>abc", 0), None);
        assert_eq!(match_close_tag("abc", 0), None);
    }

    #[test]
    fn test_match_close_tag_generic_closers() {
        // The first </> closes the <i>, the second the <b>.
        assert_eq!(match_close_tag("<b><i>x</>y</>", 0), Some(11));
        assert_eq!(match_close_tag("<b>x</>", 0), Some(4));
    }

    #[test]
    fn test_last_start_tag_before_and_in_tag() {
        let s = "<kw-a>x <atom>y</atom></kw-a>";
        assert_eq!(last_start_tag_before(s, "<kw-", 10), Some(0));
        assert_eq!(last_start_tag_before(s, "<atom", 8), None);
        assert_eq!(last_start_tag_before(s, "<atom", 9), Some(8));
        assert_eq!(in_tag(s, "<kw-", 14, 15), Some(0));
        assert_eq!(in_tag(s, "<atom", 14, 15), Some(8));
        assert_eq!(in_tag(s, "<atom", 6, 7), None);
    }

    #[test]
    fn test_in_tag_tries_outer_candidates() {
        let s = "<i>a<i>b</i>cd</i>";
        assert_eq!(in_tag(s, "<i", 7, 8), Some(4));
        assert_eq!(in_tag(s, "<i", 7, 13), Some(0));
    }

    #[test]
    fn test_in_tag_excludes_the_opening_token() {
        let s = "<atom>x</atom>";
        assert_eq!(in_tag(s, "<atom", 2, 3), None);
        assert_eq!(in_tag(s, "<atom", 6, 7), Some(0));
        // Inside the inner opener, but within the outer block.
        assert_eq!(in_tag("<i>a<i>b</i></i>", "<i", 5, 6), Some(0));
    }

    #[test]
    fn test_tag_names() {
        let s = "x<kw-a>y</kw-a>";
        assert_eq!(tag_at(s, 1), "kw-a");
        assert_eq!(tag_type_at(s, 1), "kw");
        assert_eq!(tag_at(s, 8), "/kw-a");
        assert_eq!(tag_at(s, 0), "");
        assert_eq!(close_tag("b"), "</b>");
        assert_eq!(anti_tag("<b>"), "</b>");
        assert_eq!(anti_tag("</b>"), "<b>");
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("sym-auto"), "sym");
        assert_eq!(base_name("/atom-kwpph"), "atom");
        assert_eq!(base_name("/"), "");
        assert_eq!(closed_name("/b"), Some("b"));
        assert_eq!(closed_name("b"), None);
    }
}
