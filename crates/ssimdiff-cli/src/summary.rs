use console::Style;
use ssimdiff_core::{ChannelScores, Region};

struct Styles {
    label: Style,
    value: Style,
    header: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            label: Style::new().dim(),
            value: Style::new().bold(),
            header: Style::new().cyan().bold(),
        }
    }
}

pub fn print_scores(scores: &ChannelScores) {
    let s = Styles::new();

    for (label, value) in [
        ("SSIM_All:", scores.combined),
        ("SSIM_Red:", scores.red),
        ("SSIM_Green:", scores.green),
        ("SSIM_Blue:", scores.blue),
    ] {
        println!("{} {}", s.label.apply_to(label), s.value.apply_to(value));
    }
}

pub fn print_regions(regions: &[Region]) {
    let s = Styles::new();

    println!(
        "{} {}",
        s.header.apply_to("Regions:"),
        s.value.apply_to(regions.len())
    );
    for (i, region) in regions.iter().enumerate() {
        println!(
            "  {:>3}. x={} y={} w={} h={}",
            s.label.apply_to(i + 1),
            region.x,
            region.y,
            region.width,
            region.height
        );
    }
}
