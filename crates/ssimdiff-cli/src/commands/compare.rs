use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use ssimdiff_core::{ImageSsim, SsimConfig, SsimFormula};
use tracing::debug;

use crate::summary::{print_regions, print_scores};

#[derive(Clone, Copy, ValueEnum)]
pub enum FormulaArg {
    Reference,
    Textbook,
}

impl From<FormulaArg> for SsimFormula {
    fn from(arg: FormulaArg) -> Self {
        match arg {
            FormulaArg::Reference => SsimFormula::Reference,
            FormulaArg::Textbook => SsimFormula::Textbook,
        }
    }
}

#[derive(Args)]
pub struct CompareArgs {
    /// The two images to compare
    #[arg(value_name = "IMAGE")]
    pub images: Vec<PathBuf>,

    /// Save a copy of the second image with difference regions outlined
    #[arg(short, long)]
    pub diff: Option<PathBuf>,

    /// Outline color as R,G,B
    #[arg(long, value_parser = parse_rgb)]
    pub color: Option<[u8; 3]>,

    /// Denominator variant of the SSIM formula
    #[arg(long, value_enum)]
    pub formula: Option<FormulaArg>,

    /// Comparison config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Also print the difference regions
    #[arg(long)]
    pub regions: bool,

    /// Process the color channels one after another
    #[arg(long)]
    pub sequential: bool,
}

pub fn run(args: &CompareArgs) -> Result<()> {
    let config = build_config(args)?;
    debug!(
        image1 = %args.images[0].display(),
        image2 = %args.images[1].display(),
        formula = %config.formula,
        "Comparing images"
    );
    let mut ssim = ImageSsim::new(args.images[0].clone(), args.images[1].clone())
        .with_config(config);

    ssim.compute()?;
    let scores = ssim.scores()?;
    print_scores(&scores);

    if args.regions {
        print_regions(ssim.regions()?);
    }

    Ok(())
}

fn build_config(args: &CompareArgs) -> Result<SsimConfig> {
    let mut config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid comparison config")?
    } else {
        SsimConfig::default()
    };

    if let Some(ref diff) = args.diff {
        config.diff_output = Some(diff.clone());
    }
    if let Some(color) = args.color {
        config.rect_color = color;
    }
    if let Some(formula) = args.formula {
        config.formula = formula.into();
    }
    if args.sequential {
        config.parallel_channels = false;
    }

    Ok(config)
}

fn parse_rgb(s: &str) -> std::result::Result<[u8; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected R,G,B but got '{s}'"));
    }
    let mut rgb = [0u8; 3];
    for (slot, part) in rgb.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| format!("'{part}' is not a value in 0..=255"))?;
    }
    Ok(rgb)
}
