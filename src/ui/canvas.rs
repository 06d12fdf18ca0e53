use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use crate::render::{color::unpack_argb, frame::Framebuffer};

/// Upper half block: the foreground paints the top pixel, the background the bottom one.
pub const HALF_BLOCK: &str = "▀";

/// Draws a framebuffer with two pixels per cell. Pixels outside the framebuffer leave the cell
/// untouched.
pub struct FramebufferView<'a> {
    framebuffer: &'a Framebuffer,
}

impl<'a> FramebufferView<'a> {
    #[must_use]
    pub fn new(framebuffer: &'a Framebuffer) -> Self {
        Self { framebuffer }
    }
}

impl Widget for FramebufferView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            let top_y = usize::from(row) * 2;
            for column in 0..area.width {
                let x = usize::from(column);
                let Some(top) = self.framebuffer.pixel(x, top_y) else {
                    continue;
                };
                let bottom = self.framebuffer.pixel(x, top_y + 1).unwrap_or(top);
                if let Some(cell) = buf.cell_mut((area.x + column, area.y + row)) {
                    cell.set_symbol(HALF_BLOCK)
                        .set_fg(to_color(top))
                        .set_bg(to_color(bottom));
                }
            }
        }
    }
}

/// Terminal color for an ARGB pixel; alpha is ignored because the framebuffer is opaque.
#[must_use]
pub fn to_color(pixel: u32) -> Color {
    let [_, r, g, b] = unpack_argb(pixel);
    Color::Rgb(r, g, b)
}
