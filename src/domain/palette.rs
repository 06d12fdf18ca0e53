use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::render::color::{gray, lerp_color};

/// Colors shared by the whole scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    #[serde(with = "crate::config::argb_hex")]
    pub sky_top: u32,
    #[serde(with = "crate::config::argb_hex")]
    pub sky_bottom: u32,
    #[serde(with = "crate::config::argb_hex")]
    pub mountain: u32,
    #[serde(with = "crate::config::argb_hex")]
    pub cloud: u32,
    /// Distant ridges are tinted toward this color.
    #[serde(with = "crate::config::argb_hex")]
    pub fog: u32,
    #[serde(with = "crate::config::argb_hex")]
    pub sun: u32,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            sky_top: 0xFF28_78DC,
            sky_bottom: 0xFFE8_F4FF,
            mountain: 0xFF2E_2E2E,
            cloud: 0xFFFF_FFFF,
            fog: 0xFFE8_F4FF,
            sun: 0xFFFF_F2C4,
        }
    }
}

const NORD_RAMP: &[u32] = &[
    0xFF2E_3440,
    0xFF3B_4252,
    0xFF43_4C5E,
    0xFF4C_566A,
    0xFFD8_DEE9,
    0xFF8F_BCBB,
    0xFF88_C0D0,
    0xFF81_A1C1,
];

const EVERFOREST_RAMP: &[u32] = &[
    0xFF1B_3B2B,
    0xFF2A_5B3A,
    0xFF3B_7B49,
    0xFF4C_9B58,
    0xFF6B_BA6B,
];

const CLASSIC_RAMP: &[u32] = &[gray(80), gray(62), gray(46), gray(34)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Palette {
    #[default]
    Nord,
    Everforest,
    Classic,
    /// Default sky with random gray ridges.
    Random,
}

impl Palette {
    #[must_use]
    pub fn scheme(self) -> ColorScheme {
        match self {
            Self::Nord => {
                let sky_bottom = 0xFFD8_DEE9;
                ColorScheme {
                    sky_top: 0xFF2E_3440,
                    sky_bottom,
                    fog: lerp_color(sky_bottom, 0xFF88_C0D0, 0.07),
                    sun: 0xFF8F_BCBB,
                    ..ColorScheme::default()
                }
            }
            Self::Everforest => ColorScheme {
                sky_top: 0xFF1E_2326,
                sky_bottom: 0xFFE6_7E80,
                fog: 0x00D8_DEE9,
                sun: 0xFFF6_E9B3,
                ..ColorScheme::default()
            },
            Self::Classic | Self::Random => ColorScheme::default(),
        }
    }

    /// Back-to-front ridge colors; empty means random grays.
    #[must_use]
    pub fn ramp(self) -> &'static [u32] {
        match self {
            Self::Nord => NORD_RAMP,
            Self::Everforest => EVERFOREST_RAMP,
            Self::Classic => CLASSIC_RAMP,
            Self::Random => &[],
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Nord => "nord",
            Self::Everforest => "everforest",
            Self::Classic => "classic",
            Self::Random => "random",
        }
    }
}
