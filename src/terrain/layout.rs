#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

use crate::{
    domain::palette::{ColorScheme, Palette},
    render::color::{gray, lerp_color},
    terrain::{mountain::MountainSpec, sequence::SequenceGenerator},
};

/// Knuth's multiplicative hash constant, spreads per-ridge seeds apart.
const SEED_SPREAD: u32 = 2_654_435_761;

/// Vertical lift of the nearest ridge relative to the frame height (30 px at 512 px).
const OFFSET_FRACTION: f64 = 30.0 / 512.0;

/// Depth of ridge `index` among `count`: 0.0 for the farthest, 1.0 for the nearest.
#[must_use]
pub fn depth(index: usize, count: usize) -> f64 {
    index as f64 / count.saturating_sub(1).max(1) as f64
}

/// Randomized back-to-front ridges colored from the palette ramp. Distant ridges fade toward
/// the scheme's fog color by `haze`.
#[must_use]
pub fn random_specs(
    count: usize,
    width: usize,
    height: usize,
    palette: Palette,
    scheme: &ColorScheme,
    haze: f64,
    rng: &mut SequenceGenerator,
) -> Vec<MountainSpec> {
    let ramp = palette.ramp();
    (0..count)
        .map(|i| {
            let t = depth(i, count);
            let seed = rng.next_seed() ^ (i as u32).wrapping_mul(SEED_SPREAD);
            let left_height = 0.05 + 0.15 * rng.unit() + 0.06 * t;
            let right_height = 0.05 + 0.15 * rng.unit() + 0.06 * t;
            let initial_displacement = 0.5 + 0.9 * rng.unit() + 0.4 * t;

            let base = match ramp {
                [] => gray(rng.range(30.0, 170.0) as u8),
                _ => ramp[i.min(ramp.len() - 1)],
            };
            let fog_strength = (haze * (1.0 - t)).clamp(0.0, 1.0);

            MountainSpec {
                width,
                seed,
                left_height,
                right_height,
                initial_displacement,
                roughness: 0.48,
                min_height: 0.0,
                max_height: 1.5 - t,
                vertical_span: 0.5 + 0.45 * t,
                vertical_offset: (height as f64 * OFFSET_FRACTION * (1.0 + t)).round() as i32,
                // Fog colors may carry zero alpha; ridges are always opaque.
                color: lerp_color(base, scheme.fog, fog_strength) | 0xFF00_0000,
            }
        })
        .collect()
}

/// Fixed gray-ramp layout: far ridges are lower, lighter and gentler.
#[must_use]
pub fn default_specs(count: usize, width: usize) -> Vec<MountainSpec> {
    (0..count)
        .map(|i| {
            let t = depth(i, count);
            MountainSpec {
                width,
                seed: 1000 + (i as u32 + 1) * 111,
                left_height: 0.1 + 0.2 * t,
                right_height: 0.1 + 0.15 * t,
                initial_displacement: 0.8 + 0.3 * t,
                min_height: 0.1 * (1.0 - t),
                max_height: 0.5 + 0.4 * t,
                vertical_span: 0.6 + 0.25 * (1.0 - t),
                color: gray((40.0 + 40.0 * (1.0 - t)) as u8),
                ..MountainSpec::default()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_spans_zero_to_one() {
        assert_eq!(depth(0, 1), 0.0);
        assert_eq!(depth(0, 4), 0.0);
        assert_eq!(depth(3, 4), 1.0);
    }

    #[test]
    fn random_specs_are_valid_and_follow_the_ramp() {
        let scheme = Palette::Nord.scheme();
        let mut rng = SequenceGenerator::new(3);
        let specs = random_specs(10, 120, 80, Palette::Nord, &scheme, 0.0, &mut rng);
        assert_eq!(specs.len(), 10);
        for (i, spec) in specs.iter().enumerate() {
            assert!(spec.validate().is_ok(), "spec {i} invalid: {spec:?}");
            assert_eq!(spec.width, 120);
        }
        assert_eq!(specs[0].color, 0xFF2E_3440);
        // ramp has 8 entries, later ridges reuse the last one
        assert_eq!(specs[9].color, 0xFF81_A1C1);
        assert_eq!(specs[0].vertical_offset, 5);
        assert_eq!(specs[9].vertical_offset, 9);
    }

    #[test]
    fn random_specs_replay_for_a_fixed_seed() {
        let scheme = ColorScheme::default();
        let a = random_specs(
            4,
            64,
            40,
            Palette::Random,
            &scheme,
            0.3,
            &mut SequenceGenerator::new(9),
        );
        let b = random_specs(
            4,
            64,
            40,
            Palette::Random,
            &scheme,
            0.3,
            &mut SequenceGenerator::new(9),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn haze_pulls_far_ridges_toward_fog() {
        let scheme = Palette::Nord.scheme();
        let clear = random_specs(
            3,
            64,
            40,
            Palette::Nord,
            &scheme,
            0.0,
            &mut SequenceGenerator::new(1),
        );
        let hazy = random_specs(
            3,
            64,
            40,
            Palette::Nord,
            &scheme,
            1.0,
            &mut SequenceGenerator::new(1),
        );
        assert_eq!(hazy[0].color, scheme.fog);
        assert_ne!(hazy[0].color, clear[0].color);
        // the nearest ridge is untouched
        assert_eq!(hazy[2].color, clear[2].color);
    }

    #[test]
    fn default_specs_step_from_light_to_dark() {
        let specs = default_specs(3, 256);
        assert_eq!(
            specs.iter().map(|s| s.seed).collect::<Vec<_>>(),
            vec![1111, 1222, 1333]
        );
        assert_eq!(specs[0].color, gray(80));
        assert_eq!(specs[2].color, gray(40));
        assert!(specs.iter().all(|s| s.validate().is_ok()));
    }
}
