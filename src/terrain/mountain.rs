#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

use serde::{Deserialize, Serialize};

use crate::{
    error::ParamError,
    render::frame::FrameContext,
    terrain::profile::{Displacement, HeightProfile},
};

/// Largest boundary height or initial displacement a spec may carry. Keeps every midpoint sum
/// and the normalization range finite.
pub const HEIGHT_LIMIT: f64 = 1e6;

/// Shape, placement and color of one ridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MountainSpec {
    /// Number of samples to generate, usually the framebuffer width.
    pub width: usize,
    pub seed: u32,
    pub left_height: f64,
    pub right_height: f64,
    pub initial_displacement: f64,
    pub roughness: f64,
    pub min_height: f64,
    pub max_height: f64,
    /// Fraction of the frame height a sample of 1.0 reaches.
    pub vertical_span: f64,
    /// Pixels the ridge is lifted by.
    pub vertical_offset: i32,
    #[serde(with = "crate::config::argb_hex")]
    pub color: u32,
}

impl Default for MountainSpec {
    fn default() -> Self {
        Self {
            width: 1024,
            seed: 12_345,
            left_height: 0.2,
            right_height: 0.2,
            initial_displacement: 0.8,
            roughness: 0.5,
            min_height: 0.0,
            max_height: 1.0,
            vertical_span: 0.75,
            vertical_offset: 0,
            color: 0xFF1E_1E1E,
        }
    }
}

impl MountainSpec {
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.width < 2 {
            return Err(ParamError::WidthTooSmall(self.width));
        }
        if self.min_height.is_nan() || self.max_height.is_nan() || self.min_height > self.max_height
        {
            return Err(ParamError::InvertedHeightRange {
                min: self.min_height,
                max: self.max_height,
            });
        }
        if !(self.min_height.is_finite() && self.max_height.is_finite()) {
            return Err(ParamError::NonFiniteHeightRange {
                min: self.min_height,
                max: self.max_height,
            });
        }
        for height in [self.left_height, self.right_height] {
            if !(height.abs() <= HEIGHT_LIMIT) {
                return Err(ParamError::BoundaryHeight(height));
            }
        }
        if !(self.vertical_span > 0.0 && self.vertical_span <= 1.0) {
            return Err(ParamError::VerticalSpan(self.vertical_span));
        }
        if !(self.roughness > 0.0 && self.roughness < 1.5) {
            return Err(ParamError::Roughness(self.roughness));
        }
        if !(0.0..=HEIGHT_LIMIT).contains(&self.initial_displacement) {
            return Err(ParamError::Displacement(self.initial_displacement));
        }
        Ok(())
    }

    #[must_use]
    pub fn displacement(&self) -> Displacement {
        Displacement {
            left_height: self.left_height,
            right_height: self.right_height,
            initial: self.initial_displacement,
            roughness: self.roughness,
        }
    }

    /// First painted row for a normalized sample in a frame `frame_height` rows tall.
    #[must_use]
    pub fn top_row(&self, sample: f64, frame_height: usize) -> usize {
        let last = frame_height.saturating_sub(1);
        let extent = self.max_height - self.min_height;
        let effective = if extent.is_finite() {
            self.min_height + sample * extent
        } else {
            self.min_height * (1.0 - sample) + self.max_height * sample
        };
        let scaled = effective * self.vertical_span;
        // stays in f64 until clamped; huge heights would overflow an integer row
        let top = ((1.0 - scaled) * frame_height as f64).floor() - f64::from(self.vertical_offset);
        if top.is_nan() {
            return last;
        }
        top.clamp(0.0, last as f64) as usize
    }
}

/// A validated spec together with the profile generated from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Mountain {
    spec: MountainSpec,
    profile: HeightProfile,
}

impl Mountain {
    pub fn new(spec: MountainSpec) -> Result<Self, ParamError> {
        spec.validate()?;
        let profile = HeightProfile::generate(spec.width, spec.seed, spec.displacement());
        Ok(Self { spec, profile })
    }

    #[must_use]
    pub fn spec(&self) -> &MountainSpec {
        &self.spec
    }

    #[must_use]
    pub fn profile(&self) -> &HeightProfile {
        &self.profile
    }

    /// Replaces the seed and rebuilds the profile from scratch.
    pub fn regenerate(&mut self, seed: u32) {
        self.spec.seed = seed;
        self.profile = HeightProfile::generate(self.spec.width, seed, self.spec.displacement());
    }

    /// Fills every column from the ridge line down with the solid color, overwriting what is
    /// already there.
    pub fn paint(&self, ctx: &mut FrameContext<'_>) {
        if !ctx.is_paintable() || self.profile.is_empty() {
            return;
        }
        let (width, height) = (ctx.width(), ctx.height());
        for x in 0..width {
            let sample = self.profile.sample_for_column(x, width);
            let top = self.spec.top_row(sample, height);
            ctx.fill_column(x, top, self.spec.color);
        }
    }
}
