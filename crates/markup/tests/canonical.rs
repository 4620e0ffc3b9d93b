//! Canonical outputs the editor relies on.

use markup::{CleanupConfig, normalize};

fn clean(input: &str) -> String {
    normalize(input, &CleanupConfig::default())
}

#[test]
fn empty_paragraphs_hold_one_nbsp() {
    assert_eq!(clean("<p><br></p>"), "<p>\u{a0}</p>");
    assert_eq!(clean("<p>&nbsp;</p>"), "<p>\u{a0}</p>");
    assert_eq!(clean("<p> \u{a0} </p>"), "<p>\u{a0}</p>");
}

#[test]
fn legacy_tags_rewrite() {
    assert_eq!(clean("<b>x</b>"), "<strong>x</strong>");
    assert_eq!(clean("<i>y</i>"), "<em>y</em>");
    assert_eq!(clean(r#"<b class="z">x</b>"#), "<strong>x</strong>");
}

#[test]
fn tags_and_attributes_lowercased_and_quoted() {
    assert_eq!(clean("<DIV CLASS=foo>"), r#"<div class="foo">"#);
}

#[test]
fn every_config_is_idempotent_on_mixed_content() {
    let input = "<P>Intro<BR></P><ul><li><div>one</div></li></ul>tail <B>b</B>";
    for cleanup in [true, false] {
        for xhtml in [true, false] {
            for semantics in [true, false] {
                let config = CleanupConfig {
                    cleanup,
                    xhtml,
                    semantics,
                };
                let once = normalize(input, &config);
                assert_eq!(normalize(&once, &config), once, "{config:?}");
            }
        }
    }
}
