//! Tagged strings: plain text with embedded `<name>`...`</name>` markup.
//!
//! All functions here are pure string transforms. Offsets into a tagged
//! string ("indices") are byte offsets; untagged positions and cursor
//! positions count characters of the untagged text.

pub mod cursor;
pub mod replace;
pub mod scanner;
pub mod simplify;
pub mod transform;

pub use cursor::{Movement, cursor_count, cursor_to_index, cursor_to_index_range, index_to_cursor};
pub use replace::tagged_substr_replace;
pub use scanner::{
    ESCAPE_MARKER, Piece, Pieces, anti_tag, close_tag, in_tag, last_start_tag_before,
    match_close_tag, skip_tag, tag_at, tag_start, tag_type_at,
};
pub use simplify::{simplify_tagged, simplify_tagged_merge, simplify_tagged_overlap, verify_tagged};
pub use transform::{
    escape, fix_old_tags, remove_tag, remove_tag_contents, remove_tag_exact, untag,
    untag_hide_sep, untag_no_escape,
};
