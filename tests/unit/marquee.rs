use super::*;

#[test]
fn slides_half_width_per_period_and_wraps() {
    let mut m = Marquee::new(22.0);
    assert_eq!(m.offset_pct(), 0.0);
    m.tick(11.0);
    assert_eq!(m.offset_pct(), -25.0);
    m.tick(11.0);
    assert_eq!(m.offset_pct(), 0.0);
    m.tick(27.5);
    assert_eq!(m.offset_pct(), -12.5);
}

#[test]
fn ignores_bad_timesteps() {
    let mut m = Marquee::new(22.0);
    m.tick(f64::NAN);
    m.tick(-4.0);
    assert_eq!(m.offset_pct(), 0.0);
}
