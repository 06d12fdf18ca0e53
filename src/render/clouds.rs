#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

use crate::{
    render::{
        color::{pack_argb, unpack_argb},
        frame::FrameContext,
    },
    terrain::sequence::SequenceGenerator,
};

/// Falloff below which a pixel is left alone.
pub const FALLOFF_CUTOFF: f64 = 1e-3;

/// Soft elliptical blob in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cloud {
    pub x: f64,
    pub y: f64,
    pub radius_x: f64,
    pub radius_y: f64,
    /// Opacity at the center, in `[0, 1]`.
    pub alpha: f64,
}

/// Blends each cloud over the current frame with `exp(-2 d²)` falloff. Later clouds blend over
/// earlier ones; the written pixels are always opaque.
pub fn composite_clouds(ctx: &mut FrameContext<'_>, clouds: &[Cloud], tint: u32) {
    if !ctx.is_paintable() {
        return;
    }
    for cloud in clouds {
        blend_cloud(ctx, cloud, tint);
    }
}

fn blend_cloud(ctx: &mut FrameContext<'_>, cloud: &Cloud, tint: u32) {
    let peak = cloud.alpha.clamp(0.0, 1.0);
    if !(peak > 0.0 && cloud.radius_x > 0.0 && cloud.radius_y > 0.0) {
        return;
    }
    let Some((x0, x1)) = clamped_span(cloud.x, cloud.radius_x, ctx.width()) else {
        return;
    };
    let Some((y0, y1)) = clamped_span(cloud.y, cloud.radius_y, ctx.height()) else {
        return;
    };

    let [_, tr, tg, tb] = unpack_argb(tint);
    for y in y0..=y1 {
        let dy = (y as f64 - cloud.y) / cloud.radius_y;
        for x in x0..=x1 {
            let dx = (x as f64 - cloud.x) / cloud.radius_x;
            let falloff = (-2.0 * (dx * dx + dy * dy)).exp();
            if falloff < FALLOFF_CUTOFF {
                continue;
            }
            let alpha = peak * falloff;
            let Some(dst) = ctx.get(x, y) else {
                continue;
            };
            let [_, r, g, b] = unpack_argb(dst);
            ctx.set(
                x,
                y,
                pack_argb(
                    0xFF,
                    blend_channel(tr, r, alpha),
                    blend_channel(tg, g, alpha),
                    blend_channel(tb, b, alpha),
                ),
            );
        }
    }
}

fn blend_channel(src: u8, dst: u8, alpha: f64) -> u8 {
    (f64::from(src) * alpha + f64::from(dst) * (1.0 - alpha))
        .round()
        .clamp(0.0, 255.0) as u8
}

/// Inclusive pixel range covering `center ± radius`, clipped to `0..limit`.
fn clamped_span(center: f64, radius: f64, limit: usize) -> Option<(usize, usize)> {
    if limit == 0 || !center.is_finite() || !radius.is_finite() {
        return None;
    }
    let lo = (center - radius).floor().max(0.0);
    let hi = (center + radius).ceil().min((limit - 1) as f64);
    if hi < lo {
        return None;
    }
    Some((lo as usize, hi as usize))
}

/// A cloud in frame-relative units plus its drift speed (frame widths per second).
#[derive(Debug, Clone, Copy, PartialEq)]
struct Puff {
    x: f64,
    y: f64,
    radius_x: f64,
    radius_y: f64,
    alpha: f64,
    speed: f64,
}

/// Seeded population of drifting clouds. Positions are kept relative to the frame so the field
/// survives resizes; [`CloudField::clouds`] converts them to pixels for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudField {
    count: usize,
    puffs: Vec<Puff>,
}

impl CloudField {
    #[must_use]
    pub fn new(count: usize, seed: u32) -> Self {
        let mut field = Self {
            count,
            puffs: Vec::with_capacity(count),
        };
        field.reseed(seed);
        field
    }

    pub fn reseed(&mut self, seed: u32) {
        let mut seq = SequenceGenerator::new(seed);
        self.puffs = (0..self.count)
            .map(|_| Puff {
                x: seq.unit(),
                y: seq.range(0.08, 0.4),
                radius_x: seq.range(0.06, 0.16),
                radius_y: seq.range(0.03, 0.08),
                alpha: seq.range(0.35, 0.8),
                speed: seq.range(0.004, 0.02),
            })
            .collect();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.puffs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.puffs.is_empty()
    }

    /// Drifts every cloud right; a cloud that fully leaves the frame re-enters on the left.
    pub fn advance(&mut self, dt: f64) {
        if !(dt > 0.0) {
            return;
        }
        for puff in &mut self.puffs {
            puff.x += puff.speed * dt;
            if puff.x - puff.radius_x > 1.0 {
                puff.x = -puff.radius_x;
            }
        }
    }

    #[must_use]
    pub fn clouds(&self, width: usize, height: usize) -> Vec<Cloud> {
        let (w, h) = (width as f64, height as f64);
        self.puffs
            .iter()
            .map(|puff| Cloud {
                x: puff.x * w,
                y: puff.y * h,
                radius_x: puff.radius_x * w,
                radius_y: puff.radius_y * h,
                alpha: puff.alpha,
            })
            .collect()
    }
}
