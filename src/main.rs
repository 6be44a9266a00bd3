// main.rs
//
// Command-line front end: read polygon parameters (from flags, or by asking
// on stdin until valid), draw the fractal and write it out as SVG.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use kochgon::float_types::Real;
use kochgon::io::svg::{SvgOptions, save_svg};
use kochgon::polygon::{Centering, ComposeOptions, PolygonSpec, compose_with};

/// Depth past which the stroke count gets impractical.
const DEEP_WARNING: i64 = 8;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CenteringArg {
    TrueBounds,
    Circumradius,
    None,
}

impl From<CenteringArg> for Centering {
    fn from(value: CenteringArg) -> Self {
        match value {
            CenteringArg::TrueBounds => Centering::TrueBounds,
            CenteringArg::Circumradius => Centering::Circumradius,
            CenteringArg::None => Centering::None,
        }
    }
}

/// Draw a regular polygon with Koch-curve edges.
#[derive(Parser, Debug)]
#[command(name = "kochgon", version, about, long_about = None)]
struct Cli {
    /// Number of polygon sides (at least 3); asked for if omitted
    sides: Option<i64>,

    /// Length of each side; asked for if omitted
    side_length: Option<Real>,

    /// Recursion depth (0 draws the plain polygon); asked for if omitted
    depth: Option<i64>,

    /// Turn right between sides so bumps point outward
    #[arg(long)]
    outward: bool,

    /// How to center the figure
    #[arg(long, value_enum, default_value = "true-bounds")]
    centering: CenteringArg,

    /// Output file
    #[arg(short, long, default_value = "kochgon.svg")]
    output: PathBuf,

    /// Stroke width in figure units
    #[arg(long, default_value_t = 1.0)]
    stroke_width: Real,
}

/// Asks for `label` until the answer parses and passes `valid`.
fn prompt<T, R>(input: &mut R, label: &str, valid: impl Fn(&T) -> bool) -> Result<T>
where
    T: FromStr,
    R: BufRead,
{
    let mut line = String::new();
    loop {
        print!("Enter the {label}: ");
        io::stdout().flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("stdin closed before a {label} was given");
        }
        match line.trim().parse::<T>() {
            Ok(value) if valid(&value) => return Ok(value),
            _ => println!("Invalid {label}, please try again."),
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();

    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let sides = match cli.sides {
        Some(sides) => sides,
        None => prompt(&mut input, "number of sides", |s: &i64| *s >= 3)?,
    };
    let side_length = match cli.side_length {
        Some(len) => len,
        None => prompt(&mut input, "side length", |l: &Real| *l > 0.0 && l.is_finite())?,
    };
    let depth = match cli.depth {
        Some(depth) => depth,
        None => prompt(&mut input, "recursion depth", |d: &i64| *d >= 0)?,
    };

    let spec = PolygonSpec::new(sides, side_length, depth).context("invalid polygon parameters")?;
    if depth > DEEP_WARNING {
        warn!(depth, segments = spec.segment_count(), "large recursion depth");
    }

    let options = ComposeOptions {
        inward: !cli.outward,
        centering: cli.centering.into(),
        ..Default::default()
    };
    let figure = compose_with(spec, &options);
    let bounds = figure.bounds();
    info!(
        segments = figure.segments.len(),
        width = bounds.width(),
        height = bounds.height(),
        "drew fractal polygon"
    );

    let svg_options = SvgOptions {
        stroke_width: cli.stroke_width,
        ..Default::default()
    };
    save_svg(&figure, &cli.output, &svg_options)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    info!(path = %cli.output.display(), "saved");
    Ok(())
}
