//! Render a scene with hard shadows and report how much of the frame is in shadow
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rtshadow::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML scene file. The built-in five-sphere scene is used when omitted.
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Color render, plain-text PPM
    #[arg(short, long, default_value = "rtcase2.ppm")]
    output: PathBuf,

    /// Shadow mask, plain-text PPM
    #[arg(short, long, default_value = "rtcase2_shadowmask.ppm")]
    mask: PathBuf,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Brightness below which a pixel counts as shadow
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Render rows in parallel
    #[arg(short, long)]
    parallel: bool,

    /// Also write PNG copies next to the PPM files
    #[arg(long)]
    png: bool,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = match &args.scene {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(width) = args.width {
        config.image.width = width;
    }
    if let Some(height) = args.height {
        config.image.height = height;
    }
    if let Some(threshold) = args.threshold {
        config.shadow_threshold = threshold;
    }
    config.validate().context("Invalid configuration")?;

    if args.dump_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    let (width, height) = (config.image.width, config.image.height);
    println!("=== {} ===", config.name);
    println!("Image: {width} x {height}");

    let scene = config.build_scene();
    let camera = config.camera();

    let bar = ProgressBar::new(height as u64);
    bar.set_style(
        ProgressStyle::with_template("Progress: {percent:>3}% [{bar:40}] {pos}/{len} rows")
            .context("Invalid progress template")?,
    );
    let settings = RenderSettings {
        parallel: args.parallel,
    };
    let out = render(&scene, &camera, &settings, Some(&bar));
    bar.finish();

    out.image
        .save_ppm(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    out.shadow_mask
        .save_ppm(&args.mask)
        .with_context(|| format!("Failed to write {}", args.mask.display()))?;
    if args.png {
        for (img, path) in [(&out.image, &args.output), (&out.shadow_mask, &args.mask)] {
            let png = png_path(path);
            img.save_png(&png)
                .with_context(|| format!("Failed to write {}", png.display()))?;
        }
    }

    let metrics = evaluate(&out.image, config.shadow_threshold).with_render_time(out.elapsed);
    println!();
    println!("=== SHADOW METRICS ===");
    println!(
        "Shadow pixels (brightness < {}): {}",
        config.shadow_threshold, metrics.shadow_pixels
    );
    println!(
        "Shadow area ratio: {:.2} %",
        metrics.shadow_area_ratio * 100.0
    );
    println!("Render time: {:.3} ms", metrics.render_time_ms());
    println!(
        "Pixels per second: {:.0}",
        metrics.pixels_per_second(out.image.len())
    );

    Ok(())
}

fn png_path(ppm: &Path) -> PathBuf {
    ppm.with_extension("png")
}
