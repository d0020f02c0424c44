// Host-side checks on the bundled WGSL sources.

const CARD_WGSL: &str = include_str!("../shaders/card.wgsl");
const BANNER_WGSL: &str = include_str!("../shaders/banner.wgsl");

fn fragment_body(src: &str) -> &str {
    let start = src.find("fn fs_main").expect("fragment entry point");
    &src[start..]
}

#[test]
fn both_shaders_expose_vertex_and_fragment_entry_points() {
    for src in [CARD_WGSL, BANNER_WGSL] {
        assert!(src.contains("fn vs_main"));
        assert!(src.contains("fn fs_main"));
    }
}

#[test]
fn banner_fragment_is_opaque() {
    let body = fragment_body(BANNER_WGSL);
    let ret = body
        .lines()
        .find(|l| l.trim_start().starts_with("return"))
        .expect("return statement");
    assert!(ret.trim_end().ends_with(", 1.0);"), "banner returns {}", ret.trim());
}

#[test]
fn card_fragment_cuts_rounded_corners() {
    let body = fragment_body(CARD_WGSL);
    assert!(body.contains("discard"));
}
