// Host-side tests for the section markup helper.
// The main crate is wasm-only, so we mount the pure-Rust core directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod scene;

use scene::section::render;

#[test]
fn wraps_children_in_section_and_container() {
    assert_eq!(
        render("<p>A</p>", Some("x")),
        r#"<section class="x"><div class="container"><p>A</p></div></section>"#
    );
}

#[test]
fn class_is_optional() {
    let expected = r#"<section><div class="container"><p>A</p></div></section>"#;
    assert_eq!(render("<p>A</p>", None), expected);
    assert_eq!(render("<p>A</p>", Some("")), expected);
}

#[test]
fn rendering_is_idempotent() {
    let a = render("<ul><li>1</li></ul>", Some("hero dark"));
    let b = render("<ul><li>1</li></ul>", Some("hero dark"));
    assert_eq!(a, b);
}

#[test]
fn class_attribute_is_escaped() {
    assert_eq!(
        render("", Some(r#"a"b<c"#)),
        r#"<section class="a&quot;b&lt;c"><div class="container"></div></section>"#
    );
}
