use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{
    domain::palette::{ColorScheme, Palette},
    terrain::mountain::MountainSpec,
};

/// Scene description loaded with `--config`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    pub palette: Option<Palette>,
    /// Overrides the palette's scheme when present.
    pub scheme: Option<ColorScheme>,
    /// Back-to-front ridges. Empty means a random layout.
    pub mountains: Vec<MountainSpec>,
}

impl SceneConfig {
    /// Parses and validates a scene file; every mountain must pass validation.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading scene config {} failed", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid scene config {}", path.display()))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Self =
            serde_json::from_str(content).context("failed to decode scene config")?;
        for (index, spec) in config.mountains.iter().enumerate() {
            spec.validate()
                .with_context(|| format!("mountain #{index} rejected"))?;
        }
        Ok(config)
    }
}

/// ARGB colors as `#AARRGGBB` (or `#RRGGBB`, taken as opaque) strings.
pub mod argb_hex {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub fn serialize<S: Serializer>(color: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("#{color:08X}"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid color {raw:?}")))
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<u32> {
        let digits = raw
            .trim()
            .strip_prefix('#')
            .or_else(|| raw.trim().strip_prefix("0x"))?;
        if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            6 => Some(0xFF00_0000 | value),
            8 => Some(value),
            _ => None,
        }
    }
}
