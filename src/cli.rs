#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::domain::palette::Palette;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "ridgeline",
    version,
    about = "Fractal mountain silhouettes in the terminal"
)]
pub struct Cli {
    /// Number of ridges (1..10)
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub mountains: u8,

    /// Color palette
    #[arg(long, value_enum, default_value_t = Palette::Nord)]
    pub palette: Palette,

    /// Ridge layout: randomized from the palette, or the fixed gray ramp
    #[arg(long, value_enum, default_value_t = LayoutArg::Random)]
    pub layout: LayoutArg,

    /// Number of drifting clouds (0 disables them)
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(0..=16))]
    pub clouds: u8,

    /// Fixed layout seed for reproducible scenes
    #[arg(long)]
    pub seed: Option<u32>,

    /// Fade distant ridges toward the fog color (0..1)
    #[arg(long, default_value_t = 0.0)]
    pub haze: f64,

    /// Target FPS (5..60)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(5..=60))]
    pub fps: u8,

    /// Freeze clouds and sun
    #[arg(long)]
    pub no_animation: bool,

    /// Scene description file (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (RUST_LOG sets the filter)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print one frame to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,

    /// Output width in columns for --one-shot
    #[arg(long, requires = "one_shot")]
    pub width: Option<u16>,

    /// Output height in rows for --one-shot
    #[arg(long, requires = "one_shot")]
    pub height: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    Random,
    Gray,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.haze) {
            anyhow::bail!("--haze must be between 0 and 1, got {}", self.haze);
        }
        if self.width == Some(0) || self.height == Some(0) {
            anyhow::bail!("--width and --height must be positive");
        }
        Ok(())
    }

    #[must_use]
    pub fn mountain_count(&self) -> usize {
        usize::from(self.mountains)
    }
}

#[cfg(test)]
mod tests {
    use clap::{Parser, ValueEnum};

    use super::{Cli, LayoutArg};
    use crate::domain::palette::Palette;

    #[test]
    fn defaults_match_the_classic_setup() {
        let cli = Cli::parse_from(["ridgeline"]);
        assert_eq!(cli.mountains, 3);
        assert_eq!(cli.palette, Palette::Nord);
        assert_eq!(cli.clouds, 4);
        assert_eq!(cli.fps, 30);
        assert!(cli.seed.is_none());
        assert_eq!(cli.layout, LayoutArg::Random);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn parses_palette_and_seed() {
        let cli = Cli::parse_from(["ridgeline", "--palette", "everforest", "--seed", "42"]);
        assert_eq!(cli.palette, Palette::Everforest);
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn rejects_mountain_count_out_of_range() {
        assert!(Cli::try_parse_from(["ridgeline", "--mountains", "0"]).is_err());
        assert!(Cli::try_parse_from(["ridgeline", "--mountains", "11"]).is_err());
        assert!(Cli::try_parse_from(["ridgeline", "--mountains", "10"]).is_ok());
    }

    #[test]
    fn frame_size_requires_one_shot() {
        let err = Cli::try_parse_from(["ridgeline", "--width", "80"]).expect_err("needs one-shot");
        assert!(err.to_string().contains("--one-shot"));
        let cli = Cli::parse_from(["ridgeline", "--one-shot", "--width", "80", "--height", "20"]);
        assert_eq!(cli.width, Some(80));
    }

    #[test]
    fn validate_rejects_haze_outside_unit_range() {
        let cli = Cli::parse_from(["ridgeline", "--haze", "1.5"]);
        let err = cli.validate().expect_err("haze out of range");
        assert!(err.to_string().contains("--haze"));
    }

    #[test]
    fn parses_gray_layout() {
        let cli = Cli::parse_from(["ridgeline", "--layout", "gray"]);
        assert_eq!(cli.layout, LayoutArg::Gray);
        assert!(Cli::try_parse_from(["ridgeline", "--layout", "hills"]).is_err());
    }
}
