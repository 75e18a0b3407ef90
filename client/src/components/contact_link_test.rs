use super::*;

#[test]
fn external_links_open_isolated_new_context() {
    assert_eq!(link_target(true), Some("_blank"));
    assert_eq!(link_rel(true), Some("noopener noreferrer"));
}

#[test]
fn internal_links_carry_no_target_or_rel() {
    assert_eq!(link_target(false), None);
    assert_eq!(link_rel(false), None);
}

#[test]
fn hover_scales_and_lifts() {
    assert_eq!(CONTACT_HOVER.scale, 1.05);
    assert_eq!(CONTACT_HOVER.y, -2.0);
    assert_eq!(CONTACT_HOVER.rotate, 0.0);
}
