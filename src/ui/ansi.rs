use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};

use crate::render::{color::unpack_argb, frame::Framebuffer};

use super::canvas::HALF_BLOCK;

/// Writes the framebuffer as true-color half blocks, one text line per pixel-row pair.
///
/// An odd last row repeats its color in the background so the image keeps its shape.
pub fn write_frame<W: Write>(out: &mut W, framebuffer: &Framebuffer) -> io::Result<()> {
    for top_y in (0..framebuffer.height()).step_by(2) {
        for x in 0..framebuffer.width() {
            let Some(top) = framebuffer.pixel(x, top_y) else {
                continue;
            };
            let bottom = framebuffer.pixel(x, top_y + 1).unwrap_or(top);
            queue!(
                out,
                SetForegroundColor(rgb(top)),
                SetBackgroundColor(rgb(bottom)),
                Print(HALF_BLOCK)
            )?;
        }
        queue!(out, ResetColor, Print("\n"))?;
    }
    out.flush()
}

fn rgb(pixel: u32) -> Color {
    let [_, r, g, b] = unpack_argb(pixel);
    Color::Rgb { r, g, b }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_row_pair() {
        let fb = Framebuffer::new(3, 5);
        let mut out = Vec::new();
        write_frame(&mut out, &fb).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text.matches('\n').count(), 3);
        assert_eq!(text.matches(HALF_BLOCK).count(), 9);
    }

    #[test]
    fn emits_true_color_sequences() {
        let mut fb = Framebuffer::new(1, 2);
        {
            let mut ctx = fb.context();
            ctx.set(0, 0, 0xFF0A_141E);
            ctx.set(0, 1, 0xFF28_323C);
        }
        let mut out = Vec::new();
        write_frame(&mut out, &fb).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("38;2;10;20;30"));
        assert!(text.contains("48;2;40;50;60"));
    }

    #[test]
    fn empty_framebuffer_writes_nothing() {
        let mut out = Vec::new();
        write_frame(&mut out, &Framebuffer::new(0, 0)).expect("write");
        assert!(out.is_empty());
    }
}
