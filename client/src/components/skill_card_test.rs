use super::*;

#[test]
fn hover_lifts_five_pixels() {
    assert_eq!(SKILL_CARD_HOVER, Hover { scale: 1.02, y: -5.0, rotate: 0.0 });
}
