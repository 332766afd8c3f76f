#![cfg(test)]

use css_syntax::Declaration;
use css_wireframe::{derive_background_from_selector, derive_colors, expand};

fn init_logging() {
    let _ignored = env_logger::builder().is_test(true).try_init();
}

fn decl(name: &str, value: &str) -> Declaration {
    Declaration::new(name, value)
}

#[test]
/// # Panics
/// Panics if a colored outline box is not emitted in the documented order.
fn red_outline_box() {
    init_logging();
    let trio = derive_colors("red").unwrap();
    assert_eq!(
        expand("red outline", Some(".box")),
        vec![
            decl("font-family", "Comic Neue"),
            decl("background-color", "red"),
            decl("color", trio.foreground.as_str()),
            decl("padding", "1rem"),
            decl("border", "2px solid #660000"),
        ]
    );
}

#[test]
/// # Panics
/// Panics if a bare at-rule emits more than the font.
fn bare_wireframe() {
    init_logging();
    assert_eq!(
        expand("", Some(".empty")),
        vec![decl("font-family", "Comic Neue")]
    );
}

#[test]
/// # Panics
/// Panics if an outline without background lacks the fallback border or padding.
fn outline_only() {
    init_logging();
    assert_eq!(
        expand("outline", Some(".frame")),
        vec![
            decl("font-family", "Comic Neue"),
            decl("border", "2px solid #aaa"),
            decl("padding", "1rem"),
        ]
    );
}

#[test]
/// # Panics
/// Panics if `auto` does not reuse the selector-derived grey verbatim.
fn auto_uses_selector_grey() {
    init_logging();
    let background = derive_background_from_selector(".card-42");
    assert_eq!(background, "rgba(137, 137, 137, 0.8)");
    assert_eq!(
        expand("auto", Some(".card-42")),
        vec![
            decl("font-family", "Comic Neue"),
            decl("background-color", &background),
            decl("color", "black"),
            decl("padding", "1rem"),
        ]
    );
    assert_eq!(expand("auto", Some(".card-42")), expand("auto", Some(".card-42")));
}

#[test]
/// # Panics
/// Panics if a dark background does not get white text and a lighter border.
fn dark_background_outline() {
    init_logging();
    assert_eq!(
        expand("#000000 outline", Some(".night")),
        vec![
            decl("font-family", "Comic Neue"),
            decl("background-color", "#000000"),
            decl("color", "white"),
            decl("padding", "1rem"),
            decl("border", "2px solid #4d4d4d"),
        ]
    );
}

#[test]
/// # Panics
/// Panics if a mistyped color produces color declarations.
fn typo_in_color_falls_back_to_plain_box() {
    init_logging();
    assert_eq!(
        expand("rde outline", Some(".typo")),
        vec![
            decl("font-family", "Comic Neue"),
            decl("border", "2px solid #aaa"),
            decl("padding", "1rem"),
        ]
    );
}
