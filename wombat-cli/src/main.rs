//! Wombat CLI
//!
//! Composes a background declaration block from command-line options,
//! prints it, and optionally writes a selector-wrapped stylesheet and an
//! HTML preview document, the way an interactive editing surface would
//! drive the model.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use wombat_css::{
    AngularGradient, Background, Direction, Gradient, GradientVariant, LinearGradient,
    PositionUnit, Radial, RadialExtent, RadialGradient, RadialSize, Rgb, SAMPLE_IMAGES,
    parse_keyword,
};

/// Compose and render a CSS background declaration block.
#[derive(Parser)]
#[command(name = "wombat", about = "CSS background and gradient declaration builder")]
struct Args {
    /// Gradient variant to compose: angular, linear, or radial.
    #[arg(long)]
    gradient: Option<String>,

    /// Gradient angle in degrees (angular variant).
    #[arg(long, default_value_t = -90, allow_negative_numbers = true)]
    angle: i32,

    /// Gradient color stops (hex or HTML names), in order.
    #[arg(long = "stop", value_name = "COLOR")]
    stops: Vec<String>,

    /// Solid background color (hex or HTML name).
    #[arg(long)]
    color: Option<String>,

    /// Fallback image URL placed ahead of the gradient.
    #[arg(long)]
    image: Option<String>,

    /// Emit the repeating gradient family.
    #[arg(long)]
    repeating: bool,

    /// Selector wrapped around the block when writing output files.
    #[arg(long, default_value = "div.result")]
    selector: String,

    /// Write the selector-wrapped block to this stylesheet path.
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Write a self-contained HTML preview document to this path.
    #[arg(long, value_name = "FILE")]
    preview: Option<PathBuf>,

    /// Dump the composed model as JSON instead of CSS.
    #[arg(long)]
    json: bool,

    /// List the bundled sample image names and exit.
    #[arg(long)]
    list_images: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.list_images {
        for name in SAMPLE_IMAGES {
            println!("{name}");
        }
        return Ok(());
    }

    let mut background = Background::default();
    if let Some(color) = &args.color {
        background.color = Some(Rgb::parse(color));
    }
    if let Some(name) = &args.gradient {
        let (variant, ok) = parse_keyword::<GradientVariant>(name);
        if !ok {
            bail!("unknown gradient variant '{name}' (expected angular, linear, or radial)");
        }
        background.gradient = Some(build_gradient(variant, &args));
    }
    if background.color.is_none() && background.gradient.is_none() {
        // Nothing requested: mirror the default demo composition.
        background.color = Some(Rgb::parse("gray"));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&background)?);
        return Ok(());
    }

    let css = background.render();
    println!("{}", "=== Declarations ===".green());
    println!("{css}");

    let stylesheet = format!("{}{{\n{css}\n}}\n", args.selector);
    if let Some(out) = &args.out {
        fs::write(out, &stylesheet)
            .with_context(|| format!("writing stylesheet {}", out.display()))?;
        println!("{} {}", "wrote".cyan(), out.display());
    }
    if let Some(preview) = &args.preview {
        let html = format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<style>\n{stylesheet}</style>\n</head>\n\
             <body>\n<div class=\"result\">Wombat preview</div>\n</body>\n</html>\n"
        );
        fs::write(preview, &html)
            .with_context(|| format!("writing preview {}", preview.display()))?;
        println!("{} {}", "wrote".cyan(), preview.display());
    }

    Ok(())
}

/// Build the requested gradient variant from the demo defaults and flags.
fn build_gradient(variant: GradientVariant, args: &Args) -> Gradient {
    let stops = if args.stops.is_empty() {
        vec![Rgb::parse("#74c2e1"), Rgb::parse("#0191c8")]
    } else {
        args.stops.iter().map(|stop| Rgb::parse(stop)).collect()
    };
    let mut gradient = match variant {
        GradientVariant::Angular => Gradient::Angular(AngularGradient::new(args.angle, stops)),
        GradientVariant::Linear => Gradient::Linear(LinearGradient::toward(Direction::Top, stops)),
        GradientVariant::Radial => Gradient::Radial(RadialGradient::new(
            Radial::new(
                None,
                Some(RadialSize::Keyword(RadialExtent::ClosestCorner)),
                Some(PositionUnit::from(Direction::Center)),
                None,
            ),
            stops,
        )),
    };
    gradient.set_image_url(args.image.clone());
    gradient.set_repeat(args.repeating);
    gradient
}
