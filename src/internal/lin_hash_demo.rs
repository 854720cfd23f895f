//! Demonstration driver: fills a table, prints it and looks keys up

#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::cast_precision_loss)]

use clap::{ArgAction, Parser};
use linhash::{LinHashMap, TableStats};
use plotters::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    prelude::*,
    registry::Registry,
};

macro_rules! die {
    ($fmt:literal, $($arg:tt)*) => {{
        eprintln!($fmt, $($arg)*);
        #[allow(clippy::exit)]
        std::process::exit(1);
    }};
}

/// Fill a linear hash table, print it and look every key up
#[derive(Parser, Debug)]
#[command(name = "lin_hash_demo")]
struct DemoArgs {
    /// Number of keys to probe; odd keys up to this bound are inserted
    #[arg(default_value_t = 30)]
    total_keys: u64,

    /// Insert random keys in [0, 2 * TOTAL_KEYS) instead of the odd numbers
    #[arg(short, long)]
    random: bool,

    /// Seed for --random
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Render the growth of the table to a PNG file
    #[arg(long, value_name = "PNG")]
    plot: Option<PathBuf>,

    /// Suppress all output except for errors. This overrides the -v flag.
    #[arg(short, long)]
    quiet: bool,

    /// Turn on verbose output. Supply -v multiple times to increase verbosity.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(quiet: bool, verbose: u8) {
    let level_filter = if quiet {
        LevelFilter::ERROR
    } else {
        match verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    // Bridge log crate macros to tracing (the library logs through `log`)
    if tracing_log::LogTracer::init().is_err() {
        die!("INTERNAL ERROR: {}", "setting log tracer failed");
    }

    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("LINHASH_LOG")
        .from_env_lossy();

    let subscriber = Registry::default()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).compact());

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        die!("INTERNAL ERROR: {}", "setting default tracing::subscriber failed");
    }
}

/// Produces the keys to insert, each paired with the square of its position
fn seed_keys(args: &DemoArgs) -> Vec<(u64, u64)> {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let upper = args.total_keys.saturating_mul(2).max(1);

    (1..=args.total_keys)
        .step_by(2)
        .map(|i| {
            let key = if args.random { rng.random_range(0..upper) } else { i };
            (key, i.saturating_mul(i))
        })
        .collect()
}

/// One sample of the table after an insert
struct Sample {
    inserted: usize,
    size: usize,
    stats: TableStats,
}

fn plot_growth(path: &Path, samples: &[Sample]) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_x = samples.last().map_or(1, |s| s.inserted.max(1));
    let max_y = samples.iter().map(|s| s.size).max().unwrap_or(1) as f64 * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Linear Hashing Growth", ("sans-serif", 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..max_x, 0.0..max_y)?;

    chart
        .configure_mesh()
        .x_desc("Number of Keys Inserted")
        .y_desc("Slots / Keys / Buckets")
        .axis_desc_style(("sans-serif", 16))
        .draw()?;

    let series: [(&str, RGBColor, fn(&Sample) -> f64); 3] = [
        ("size()", RGBColor(220, 50, 50), |s| s.size as f64),
        ("stored keys", RGBColor(50, 90, 220), |s| s.stats.keys as f64),
        ("overflow buckets", RGBColor(50, 180, 50), |s| s.stats.overflow_buckets as f64),
    ];

    for (label, color, value) in series {
        let style = ShapeStyle::from(&color).stroke_width(2);
        chart
            .draw_series(LineSeries::new(samples.iter().map(|s| (s.inserted, value(s))), style))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

fn main() {
    let args = DemoArgs::parse();
    init_tracing(args.quiet, args.verbose);

    info!("starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let keys = seed_keys(&args);
    let mut map = LinHashMap::new();
    let mut samples = Vec::with_capacity(keys.len());

    for (inserted, (key, value)) in keys.into_iter().enumerate() {
        map.put(key, value);
        debug!("put key = {key}, value = {value}, size() = {}", map.size());
        samples.push(Sample {
            inserted: inserted.saturating_add(1),
            size: map.size(),
            stats: map.stats(),
        });
    }

    println!("{map}");
    for key in 0..=args.total_keys {
        match map.get(&key) {
            Some(value) => println!("key = {key} value = {value}"),
            None => println!("key = {key} value = none"),
        }
    }
    println!("-------------------------------------------");

    let stats = map.stats();
    println!(
        "Average number of buckets accessed = {}",
        stats.average_accesses(usize::try_from(args.total_keys).unwrap_or(usize::MAX))
    );
    info!("{stats}");

    if let Err(e) = map.verify() {
        die!("Table verification failed: {}", e);
    }

    if let Some(path) = &args.plot {
        if let Err(e) = plot_growth(path, &samples) {
            die!("Failed to plot growth to {}: {}", path.display(), e);
        }
        println!("Generated growth plot: {}", path.display());
    }
}
