mod common;

use cardtext::tagged::{
    ESCAPE_MARKER, Movement, cursor_count, cursor_to_index, cursor_to_index_range,
    fix_old_tags, index_to_cursor, match_close_tag, remove_tag, remove_tag_contents,
    simplify_tagged, tagged_substr_replace, untag, untag_hide_sep, verify_tagged,
};
use common::init_logger;

#[test]
fn test_editing_session_keeps_markup_balanced() {
    init_logger();
    let mut text = String::from("<b>Flying</b>, <i>haste</i>");
    assert_eq!(untag(&text), "Flying, haste");

    // Delete ", ": the bold and italic spans become adjacent.
    text = tagged_substr_replace(&text, 6, 8, "");
    assert_eq!(text, "<b>Flying</b><i>haste</i>");

    // Typing at the join continues the span on the left.
    text = tagged_substr_replace(&text, 6, 6, " ");
    assert_eq!(text, "<b>Flying </b><i>haste</i>");
    assert_eq!(untag(&text), "Flying haste");
    assert_eq!(simplify_tagged(&text), text);
    assert_eq!(verify_tagged(&text), text);
}

#[test]
fn test_deleting_only_content_drops_its_tags() {
    assert_eq!(tagged_substr_replace("a<b>x</b>c", 1, 2, ""), "ac");
}

#[test]
fn test_replacing_across_a_tag_boundary() {
    let text = tagged_substr_replace("a<i>bc</i>d", 0, 2, "Z");
    assert_eq!(text, "Z<i>c</i>d");
    assert_eq!(match_close_tag(&text, 1), Some(5));
}

#[test]
fn test_inserted_brackets_are_escaped() {
    let text = tagged_substr_replace("ab", 1, 1, "<");
    assert_eq!(text, format!("a{ESCAPE_MARKER}b"));
    assert_eq!(untag(&text), "a<b");
    assert_eq!(cursor_count(&text), 3);
}

#[test]
fn test_legacy_text_is_normalized() {
    let text = fix_old_tags("<b>Flying</>, <i>vigilance</>");
    assert_eq!(text, "<b>Flying</b>, <i>vigilance</i>");
    assert_eq!(verify_tagged(&text), text);
}

#[test]
fn test_repairing_hand_typed_markup() {
    init_logger();
    let text = verify_tagged("a < b <i>c");
    assert_eq!(text, format!("a {ESCAPE_MARKER} b <i>c</i>"));
    assert_eq!(untag(&text), "a < b c");
}

#[test]
fn test_reminder_text_removal() {
    let text = "Flying<kw-a> (This creature can't be blocked.)</kw-a>";
    assert_eq!(remove_tag_contents(text, "<kw-"), "Flying");
    assert_eq!(
        remove_tag(text, "<kw-"),
        "Flying (This creature can't be blocked.)"
    );
}

#[test]
fn test_soft_separators_hidden_in_plain_view() {
    let text = "Flying<sep-soft>, </sep-soft>haste";
    assert_eq!(untag(text), "Flying, haste");
    assert_eq!(untag_hide_sep(text), "Flyinghaste");
}

#[test]
fn test_caret_walk_over_formatted_text() {
    let text = "<b>ab</b>c<i>é</i>";
    let count = cursor_count(text);
    assert_eq!(count, 4);
    for cursor in 0..=count {
        let range = cursor_to_index_range(text, cursor);
        assert!(range.start < range.end);
        for dir in [Movement::Left, Movement::Mid, Movement::Right] {
            let index = cursor_to_index(text, cursor, dir);
            assert!(range.contains(&index));
            assert_eq!(index_to_cursor(text, index, dir), cursor);
        }
    }
    // Typing at the start lands inside the bold span.
    assert_eq!(cursor_to_index(text, 0, Movement::Mid), 3);
    assert_eq!(cursor_to_index(text, 0, Movement::Left), 0);
}
