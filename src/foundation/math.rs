/// Convert premultiplied RGBA8 pixels back to straight alpha, in place.
pub(crate) fn unpremultiply_rgba8_in_place(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = div255_inv(u16::from(*c), a);
        }
    }
}

fn div255_inv(c: u16, a: u16) -> u8 {
    (((u32::from(c) * 255) + u32::from(a) / 2) / u32::from(a)).min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
