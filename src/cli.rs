use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::core::font_select::{RandomFont, SelectedFont};
use crate::core::rotation::{Random45, RandomRotation};
use crate::core::spread::{ExactSpread, RandomSpread};
use crate::core::text_filter::{Identity, RemoveDuplicates};
use crate::core::{FontStrategy, RotationStrategy, SpreadStrategy, TextFilter};

// Build version with backend info
const VERSION_INFO: &str = const_format::concatcp!(
    env!("CARGO_PKG_VERSION"), "\n",
    "Fonts:  cosmic-text 0.15 (fontdb)\n",
    "Output: svg 0.14\n",
    "Target: ", std::env::consts::ARCH, "-", std::env::consts::OS
);

/// Text function choice
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TextFnArg {
    Identity,
    Dedup,
}

/// Font function choice
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FontFnArg {
    Selected,
    Random,
}

/// Rotation function choice
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RotationFnArg {
    Random,
    Random45,
}

/// Spread function choice
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SpreadFnArg {
    Exact,
    Random,
}

impl TextFnArg {
    pub fn build(self) -> TextFilter {
        match self {
            TextFnArg::Identity => Identity.into(),
            TextFnArg::Dedup => RemoveDuplicates.into(),
        }
    }
}

impl FontFnArg {
    pub fn build(self, seed: Option<u64>) -> FontStrategy {
        match self {
            FontFnArg::Selected => SelectedFont.into(),
            FontFnArg::Random => seed.map_or_else(RandomFont::new, RandomFont::with_seed).into(),
        }
    }
}

impl RotationFnArg {
    pub fn build(self, seed: Option<u64>) -> RotationStrategy {
        match self {
            RotationFnArg::Random => seed.map_or_else(RandomRotation::new, RandomRotation::with_seed).into(),
            RotationFnArg::Random45 => seed.map_or_else(Random45::new, Random45::with_seed).into(),
        }
    }
}

impl SpreadFnArg {
    pub fn build(self, seed: Option<u64>) -> SpreadStrategy {
        match self {
            SpreadFnArg::Exact => ExactSpread.into(),
            SpreadFnArg::Random => seed.map_or_else(RandomSpread::new, RandomSpread::with_seed).into(),
        }
    }
}

/// Sigil generator: renders text as rotated, spread-out glyphs and exports SVG
#[derive(Parser, Debug)]
#[command(author, version = VERSION_INFO, about, long_about = None)]
pub struct Args {
    /// Intent text; pre-fills the window, or is rendered directly with --output
    #[arg(short = 't', long = "text", value_name = "TEXT")]
    pub text: Option<String>,

    /// Render headless and write the SVG to this file (no window)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Text function
    #[arg(long = "text-fn", value_enum, default_value = "identity")]
    pub text_fn: TextFnArg,

    /// Font function
    #[arg(long = "font-fn", value_enum, default_value = "random")]
    pub font_fn: FontFnArg,

    /// Font family used by the "selected" font function
    #[arg(short = 'f', long = "font", value_name = "FAMILY")]
    pub font: Option<String>,

    /// Rotation function
    #[arg(long = "rotation-fn", value_enum, default_value = "random45")]
    pub rotation_fn: RotationFnArg,

    /// Base spread distance (default: 250)
    #[arg(short = 's', long = "spread", value_name = "N", allow_negative_numbers = true)]
    pub spread: Option<i32>,

    /// Spread function
    #[arg(long = "spread-fn", value_enum, default_value = "random")]
    pub spread_fn: SpreadFnArg,

    /// Seed for all random choices (reproducible output)
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// Canvas width in pixels (default: 640)
    #[arg(long = "width", value_name = "PX")]
    pub width: Option<u32>,

    /// Canvas height in pixels (default: 480)
    #[arg(long = "height", value_name = "PX")]
    pub height: Option<u32>,

    /// Font cache capacity in descriptors (default: 256)
    #[arg(long = "font-cache", value_name = "N")]
    pub font_cache: Option<usize>,

    /// Print available font families and exit
    #[arg(long = "list-fonts")]
    pub list_fonts: bool,

    /// Enable logging to file (default: sigiltron.log in the data directory)
    #[arg(short = 'l', long = "log", value_name = "LOG_FILE")]
    pub log_file: Option<Option<PathBuf>>,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Custom data directory (overrides default platform paths)
    #[arg(short = 'c', long = "config-dir", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

impl Args {
    /// True when the run should not open a window.
    pub fn is_headless(&self) -> bool {
        self.output.is_some() || self.list_fonts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_window_defaults() {
        let args = Args::parse_from(["sigiltron"]);
        assert_eq!(args.text_fn, TextFnArg::Identity);
        assert_eq!(args.font_fn, FontFnArg::Random);
        assert_eq!(args.rotation_fn, RotationFnArg::Random45);
        assert_eq!(args.spread_fn, SpreadFnArg::Random);
        assert!(!args.is_headless());
    }

    #[test]
    fn test_headless_args() {
        let args = Args::parse_from([
            "sigiltron", "-t", "AAB", "-o", "out.svg", "--text-fn", "dedup", "--font-fn", "selected",
            "-f", "Serif", "--spread-fn", "exact", "-s", "-40",
        ]);
        assert!(args.is_headless());
        assert_eq!(args.text.as_deref(), Some("AAB"));
        assert_eq!(args.spread, Some(-40));
        assert_eq!(args.text_fn.build().to_string(), "Remove duplicates");
        assert_eq!(args.font_fn.build(None).to_string(), "Use selected font");
        assert_eq!(args.spread_fn.build(Some(1)).to_string(), "Exact spread");
    }

    #[test]
    fn test_log_flag_optional_value() {
        let args = Args::parse_from(["sigiltron", "--log"]);
        assert_eq!(args.log_file, Some(None));
        let args = Args::parse_from(["sigiltron", "--log", "x.log"]);
        assert_eq!(args.log_file, Some(Some(PathBuf::from("x.log"))));
    }
}
