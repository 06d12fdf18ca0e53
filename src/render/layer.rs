#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

use std::fmt::Debug;

use crate::render::{
    clouds::{Cloud, composite_clouds},
    frame::FrameContext,
};

/// Auxiliary visual drawn by the scene after the sky and before the mountains.
pub trait Layer: Debug {
    /// Moves the layer's animation forward by `dt` seconds.
    fn advance(&mut self, dt: f64);

    fn paint(&self, ctx: &mut FrameContext<'_>);
}

/// Soft sun with a faint halo that bobs slowly above the horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct SunLayer {
    color: u32,
    /// Horizontal position as a fraction of the frame width.
    anchor_x: f64,
    /// Resting height as a fraction of the frame height.
    anchor_y: f64,
    phase: f64,
}

impl SunLayer {
    const BOB_SPEED: f64 = 0.35;
    const BOB_AMPLITUDE: f64 = 0.025;

    #[must_use]
    pub fn new(color: u32) -> Self {
        Self {
            color,
            anchor_x: 0.74,
            anchor_y: 0.24,
            phase: 0.0,
        }
    }

    #[must_use]
    pub fn color(&self) -> u32 {
        self.color
    }

    /// Pixel center and disc radius for a frame of the given size.
    #[must_use]
    pub fn placement(&self, width: usize, height: usize) -> (f64, f64, f64) {
        let (w, h) = (width as f64, height as f64);
        let y = (self.anchor_y + Self::BOB_AMPLITUDE * self.phase.sin()) * h;
        let radius = 0.06 * w.min(h * 2.0);
        (self.anchor_x * w, y, radius)
    }
}

impl Layer for SunLayer {
    fn advance(&mut self, dt: f64) {
        if dt > 0.0 {
            self.phase = (self.phase + dt * Self::BOB_SPEED) % std::f64::consts::TAU;
        }
    }

    fn paint(&self, ctx: &mut FrameContext<'_>) {
        let (x, y, radius) = self.placement(ctx.width(), ctx.height());
        if radius <= 0.0 {
            return;
        }
        // pixels are twice as tall as wide on a half-block terminal
        let glow = [
            Cloud {
                x,
                y,
                radius_x: radius * 3.0,
                radius_y: radius * 1.5,
                alpha: 0.3,
            },
            Cloud {
                x,
                y,
                radius_x: radius,
                radius_y: radius * 0.5,
                alpha: 1.0,
            },
        ];
        composite_clouds(ctx, &glow, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::frame::Framebuffer;

    #[test]
    fn sun_center_takes_sun_color() {
        let sun = SunLayer::new(0xFFFF_EE88);
        let mut fb = Framebuffer::new(100, 50);
        sun.paint(&mut fb.context());
        let (x, y, _) = sun.placement(100, 50);
        assert_eq!(fb.pixel(x.round() as usize, y.round() as usize), Some(0xFFFF_EE88));
    }

    #[test]
    fn advance_moves_the_sun_and_stays_periodic() {
        let mut sun = SunLayer::new(0xFFFF_FFFF);
        let start = sun.placement(100, 60);
        sun.advance(2.0);
        assert_ne!(sun.placement(100, 60), start);
        for _ in 0..1_000 {
            sun.advance(0.5);
        }
        let (_, y, _) = sun.placement(100, 60);
        assert!((12.0..=17.0).contains(&y));
    }

    #[test]
    fn negative_time_step_is_ignored() {
        let mut sun = SunLayer::new(0xFFFF_FFFF);
        let start = sun.clone();
        sun.advance(-1.0);
        assert_eq!(sun, start);
    }
}
