use super::*;

#[test]
fn entry_delay_is_proportional_to_position() {
    let delays: Vec<u32> = (0..4).map(|i| entry_motion(i).delay_ms).collect();
    assert_eq!(delays, vec![0, 200, 400, 600]);
}

#[test]
fn entries_slide_in_from_the_left() {
    let motion = entry_motion(0);
    assert_eq!(motion.initial.x, -30.0);
    assert_eq!(motion.initial.opacity, 0.0);
    assert_eq!(motion.once(), Some("true"));
}

#[test]
fn entry_meta_joins_company_and_period_verbatim() {
    assert_eq!(entry_meta("Kritek (Remote)", "2022"), "Kritek (Remote) · 2022");
    assert_eq!(entry_meta("Xelton Technologies", "2017 – 2022"), "Xelton Technologies · 2017 – 2022");
}
