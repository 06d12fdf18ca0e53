#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

/// Packs 8-bit channels into an ARGB word.
#[must_use]
pub const fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Splits an ARGB word into `[a, r, g, b]`.
#[must_use]
pub const fn unpack_argb(color: u32) -> [u8; 4] {
    [
        (color >> 24) as u8,
        (color >> 16) as u8,
        (color >> 8) as u8,
        color as u8,
    ]
}

#[must_use]
pub fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    (f64::from(from) * (1.0 - t) + f64::from(to) * t)
        .round()
        .clamp(0.0, 255.0) as u8
}

/// Per-channel linear interpolation, alpha included.
#[must_use]
pub fn lerp_color(from: u32, to: u32, t: f64) -> u32 {
    let [a1, r1, g1, b1] = unpack_argb(from);
    let [a2, r2, g2, b2] = unpack_argb(to);
    pack_argb(
        lerp_channel(a1, a2, t),
        lerp_channel(r1, r2, t),
        lerp_channel(g1, g2, t),
        lerp_channel(b1, b2, t),
    )
}

#[must_use]
pub const fn gray(level: u8) -> u32 {
    pack_argb(0xFF, level, level, level)
}
