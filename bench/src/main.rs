use std::time::{Duration, Instant};

use anyhow::Context as _;
use stackblur::{Grid, Rgba8, stack_blur};

#[derive(Clone, Debug)]
struct BenchArgs {
    width: u32,
    height: u32,
    repeats: u32,
    radii: Vec<u32>,
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let args = parse_args()?;
    if args.width == 0 || args.height == 0 {
        anyhow::bail!("--width/--height must be > 0");
    }
    if args.repeats == 0 {
        anyhow::bail!("--repeats must be > 0");
    }

    let src = synthetic_image(args.width, args.height)?;
    let pixels = f64::from(args.width) * f64::from(args.height);

    println!(
        "stackblur-bench {}x{} repeats={}",
        args.width, args.height, args.repeats
    );
    println!("{:>8} {:>12} {:>12} {:>12}", "radius", "p50 ms", "p90 ms", "ns/px");

    for &radius in &args.radii {
        let mut samples = Vec::with_capacity(args.repeats as usize);
        for _ in 0..args.repeats {
            let t0 = Instant::now();
            let out = stack_blur(&src, radius)?;
            samples.push(t0.elapsed());
            std::hint::black_box(out);
        }
        samples.sort();
        let p50 = percentile(&samples, 0.50);
        let p90 = percentile(&samples, 0.90);
        println!(
            "{:>8} {:>12.3} {:>12.3} {:>12.2}",
            radius,
            p50.as_secs_f64() * 1e3,
            p90.as_secs_f64() * 1e3,
            p50.as_secs_f64() * 1e9 / pixels,
        );
    }
    Ok(())
}

fn synthetic_image(width: u32, height: u32) -> anyhow::Result<Grid> {
    let mut grid = Grid::new(width, height, Rgba8::transparent())?;
    for y in 0..height {
        for x in 0..width {
            let v = (x ^ y) as u8;
            grid.set(x, y, Rgba8::new(v, v.wrapping_mul(3), 255 - v, 255))?;
        }
    }
    Ok(grid)
}

fn percentile(sorted: &[Duration], q: f64) -> Duration {
    if sorted.is_empty() {
        return Duration::ZERO;
    }
    let idx = ((sorted.len() - 1) as f64 * q).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

fn parse_args() -> anyhow::Result<BenchArgs> {
    let mut args = std::env::args().skip(1);

    let mut out = BenchArgs {
        width: 1920,
        height: 1080,
        repeats: 20,
        radii: vec![1, 4, 16, 64, 256],
    };

    while let Some(a) = args.next() {
        match a.as_str() {
            "--width" => out.width = parse_u32(args.next(), "--width")?,
            "--height" => out.height = parse_u32(args.next(), "--height")?,
            "--repeats" => out.repeats = parse_u32(args.next(), "--repeats")?,
            "--radii" => {
                let v = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("missing value for --radii (e.g. 1,8,64)"))?;
                out.radii = v
                    .split(',')
                    .map(|s| {
                        s.trim()
                            .parse::<u32>()
                            .with_context(|| format!("parse --radii entry '{s}'"))
                    })
                    .collect::<anyhow::Result<Vec<_>>>()?;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => anyhow::bail!("unknown arg '{a}' (try --help)"),
        }
    }

    Ok(out)
}

fn print_help() {
    eprintln!(
        r#"stackblur-bench

Blurs a synthetic image repeatedly for each radius and reports p50/p90 timings.
Per-pixel cost should stay flat as the radius grows.

Usage:
  cargo run --release -q
  cargo run --release -q -- --width 640 --height 360 --radii 1,8,64

Args:
  --width N        (default 1920)
  --height N       (default 1080)
  --repeats N      (default 20)
  --radii LIST     (default 1,4,16,64,256)
"#
    );
}

fn parse_u32(v: Option<String>, flag: &str) -> anyhow::Result<u32> {
    let v = v.ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))?;
    v.parse::<u32>()
        .with_context(|| format!("parse {flag} value '{v}'"))
}
