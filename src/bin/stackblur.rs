use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use stackblur::{BlurOpts, Narrowing};

/// Blur an image file with StackBlur.
#[derive(Parser, Debug)]
#[command(name = "stackblur", version)]
struct Cli {
    /// Input image (any format the `image` crate can decode).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output image; the format follows the file extension.
    #[arg(long)]
    out: PathBuf,

    /// Blur radius in pixels (overrides `--opts`; required without it).
    #[arg(long, required_unless_present = "opts")]
    radius: Option<u32>,

    /// Saturate channels at 255 instead of wrapping.
    #[arg(long, default_value_t = false)]
    clamp: bool,

    /// JSON file with blur options, e.g. `{ "radius": 8, "narrowing": "clamp" }`.
    #[arg(long)]
    opts: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let opts = resolve_opts(&cli)?;

    let src = image::open(&cli.in_path)
        .with_context(|| format!("decode image '{}'", cli.in_path.display()))?;
    let out = stackblur::stack_blur_image(&src, &opts)?;

    if let Some(parent) = cli.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    out.save(&cli.out)
        .with_context(|| format!("write image '{}'", cli.out.display()))?;

    eprintln!("wrote {}", cli.out.display());
    Ok(())
}

fn resolve_opts(cli: &Cli) -> anyhow::Result<BlurOpts> {
    let mut opts = match &cli.opts {
        Some(path) => read_opts(path)?,
        None => BlurOpts::default(),
    };
    if let Some(radius) = cli.radius {
        opts.radius = radius;
    }
    if cli.clamp {
        opts.narrowing = Narrowing::Clamp;
    }
    opts.validate()?;
    Ok(opts)
}

fn read_opts(path: &Path) -> anyhow::Result<BlurOpts> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read blur options '{}'", path.display()))?;
    BlurOpts::from_json_str(&json)
        .with_context(|| format!("parse blur options '{}'", path.display()))
}
