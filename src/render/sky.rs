#![allow(clippy::cast_precision_loss)]

use crate::render::{color::lerp_color, frame::FrameContext};

/// Vertical gradient from `top` (row 0) to `bottom` (last row), one color per row.
pub fn fill_sky_gradient(ctx: &mut FrameContext<'_>, top: u32, bottom: u32) {
    if !ctx.is_paintable() {
        return;
    }
    let denom = ctx.height().saturating_sub(1).max(1) as f64;
    for y in 0..ctx.height() {
        let row_color = lerp_color(top, bottom, y as f64 / denom);
        if let Some(row) = ctx.row_mut(y) {
            row.fill(row_color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::frame::Framebuffer;

    const TOP: u32 = 0xFF28_78DC;
    const BOTTOM: u32 = 0xFFE8_F4FF;

    #[test]
    fn first_and_last_rows_hit_the_endpoints() {
        let mut fb = Framebuffer::new(6, 12);
        fill_sky_gradient(&mut fb.context(), TOP, BOTTOM);
        for x in 0..6 {
            assert_eq!(fb.pixel(x, 0), Some(TOP));
            assert_eq!(fb.pixel(x, 11), Some(BOTTOM));
        }
    }

    #[test]
    fn rows_are_uniform_and_monotonic() {
        let mut fb = Framebuffer::new(4, 9);
        fill_sky_gradient(&mut fb.context(), 0xFF00_0000, 0xFFFF_FFFF);
        let mut previous = 0u32;
        for y in 0..9 {
            let row: Vec<u32> = (0..4).filter_map(|x| fb.pixel(x, y)).collect();
            assert!(row.iter().all(|&p| p == row[0]));
            let blue = row[0] & 0xFF;
            assert!(blue >= previous);
            previous = blue;
        }
    }

    #[test]
    fn single_row_frame_uses_top_color() {
        let mut fb = Framebuffer::new(3, 1);
        fill_sky_gradient(&mut fb.context(), TOP, BOTTOM);
        assert_eq!(fb.pixel(2, 0), Some(TOP));
    }
}
