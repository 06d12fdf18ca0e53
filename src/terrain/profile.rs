#![allow(clippy::cast_precision_loss)]

use crate::terrain::sequence::SequenceGenerator;

/// Boundary heights and amplitude schedule for one midpoint-displacement run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Displacement {
    pub left_height: f64,
    pub right_height: f64,
    pub initial: f64,
    /// Multiplier applied to the amplitude at every recursion level.
    pub roughness: f64,
}

/// Normalized height samples, one per column of the width they were generated for.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightProfile {
    samples: Vec<f64>,
}

impl HeightProfile {
    /// Runs midpoint displacement on the smallest `2^k + 1` grid covering `width`, normalizes
    /// it into `[0, 1]` and keeps the first `width` samples. Widths below 3 still run on the
    /// 3-point grid.
    #[must_use]
    pub fn generate(width: usize, seed: u32, shape: Displacement) -> Self {
        let mut samples = raw_samples(width, seed, shape);
        normalize(&mut samples);
        samples.truncate(width);
        Self { samples }
    }

    #[must_use]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample shown in `column` when the profile is stretched over `pixel_width` columns.
    #[must_use]
    pub fn sample_for_column(&self, column: usize, pixel_width: usize) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples[resample_index(column, pixel_width, self.samples.len())]
    }
}

/// Nearest-lower source index for `column` of a `pixel_width`-wide target, always inside
/// `0..len`. `len` must be non-zero.
#[must_use]
pub fn resample_index(column: usize, pixel_width: usize, len: usize) -> usize {
    let last = len.saturating_sub(1);
    if pixel_width == 0 || pixel_width == len {
        return column.min(last);
    }
    let scaled = (column as u128 * len as u128) / pixel_width as u128;
    usize::try_from(scaled).map_or(last, |idx| idx.min(last))
}

/// Smallest `2^k + 1` (k >= 1) that is at least `width`.
#[must_use]
pub fn grid_len(width: usize) -> usize {
    let mut k = 1u32;
    while (1usize << k) + 1 < width {
        k += 1;
    }
    (1usize << k) + 1
}

/// Un-normalized grid: endpoints hold the boundary heights exactly.
pub(crate) fn raw_samples(width: usize, seed: u32, shape: Displacement) -> Vec<f64> {
    let n = grid_len(width.max(3));
    let mut samples = vec![0.0; n];
    samples[0] = shape.left_height;
    samples[n - 1] = shape.right_height;
    let mut seq = SequenceGenerator::new(seed);
    displace(
        &mut samples,
        0,
        n - 1,
        shape.initial,
        shape.roughness,
        &mut seq,
    );
    samples
}

fn displace(
    h: &mut [f64],
    left: usize,
    right: usize,
    amplitude: f64,
    roughness: f64,
    seq: &mut SequenceGenerator,
) {
    if right - left <= 1 {
        return;
    }
    let mid = left + (right - left) / 2;
    h[mid] = 0.5 * (h[left] + h[right]) + seq.symmetric(amplitude);
    let next = amplitude * roughness;
    displace(h, left, mid, next, roughness, seq);
    displace(h, mid, right, next, roughness, seq);
}

fn normalize(samples: &mut [f64]) {
    let (min, max) = samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let range = max - min;
    if range.is_infinite() {
        // halved operands cannot overflow when subtracted
        let half_range = 0.5 * max - 0.5 * min;
        for v in samples.iter_mut() {
            *v = (0.5 * *v - 0.5 * min) / half_range;
        }
        return;
    }
    let range = if range.is_nan() || range <= 0.0 { 1.0 } else { range };
    for v in samples.iter_mut() {
        *v = (*v - min) / range;
    }
}
