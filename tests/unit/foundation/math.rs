use super::*;

#[test]
fn unpremultiply_restores_half_alpha_channels() {
    let mut px = [64u8, 0, 128, 128];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, [128, 0, 255, 128]);
}

#[test]
fn unpremultiply_leaves_opaque_and_transparent_alone() {
    let mut px = [10u8, 20, 30, 255, 0, 0, 0, 0];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, [10, 20, 30, 255, 0, 0, 0, 0]);
}
