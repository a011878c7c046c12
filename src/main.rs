//! u-nntour CLI: nearest-neighbor tour over a city file.

use std::path::PathBuf;
use std::time::Instant;

use clap::{ArgAction, Parser};
use log::{LevelFilter, Log, Metadata, Record};
use u_nntour::geometry::City;
use u_nntour::loader::{self, LoaderConfig};
use u_nntour::nn::{NnConfig, NnRunner};
use u_nntour::{TourError, TourResult};

#[derive(Parser)]
#[command(name = "u-nntour")]
#[command(about = "Nearest-neighbor TSP tour over a delimited city file")]
#[command(version)]
struct Cli {
    /// City file, one `name|x|y` record per line
    #[arg(required_unless_present = "generate")]
    input: Option<PathBuf>,

    /// Generate this many random cities instead of reading INPUT
    #[arg(long, conflicts_with = "input")]
    generate: Option<usize>,

    /// Side of the square that generated cities are drawn from
    #[arg(long, default_value = "100.0")]
    side: f64,

    /// Seed for generated cities
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Write the loaded or generated cities to this file
    #[arg(long)]
    save: Option<PathBuf>,

    /// Field delimiter of the city file
    #[arg(short, long, default_value = "|")]
    delimiter: char,

    /// Index of the city the tour starts from
    #[arg(long, default_value = "0")]
    start: usize,

    /// Do not print the visiting order
    #[arg(long)]
    no_tour: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> TourResult<()> {
    let loader_config = LoaderConfig::default().with_delimiter(cli.delimiter);

    let load_start = Instant::now();
    let cities = match (&cli.input, cli.generate) {
        (_, Some(count)) => loader::random_cities(count, cli.side, cli.seed),
        (Some(path), None) => loader::load_path(path, &loader_config)?,
        (None, None) => return Err(TourError::InvalidConfig("no input file given".into())),
    };
    let load_ms = elapsed_ms(load_start);

    if let Some(path) = &cli.save {
        loader::save_path(path, &cities, &loader_config)?;
    }

    let config = NnConfig::default().with_start(cli.start);
    let solve_start = Instant::now();
    let tour = NnRunner::run(&cities, &config)?;
    let solve_ms = elapsed_ms(solve_start);

    println!("Cities:          {}", cities.len());
    println!("Load time:       {load_ms:.4} ms");
    println!("Solve time:      {solve_ms:.4} ms");
    println!("Total distance:  {:.2}", tour.total_distance());

    if !cli.no_tour && !tour.is_empty() {
        let names: Vec<&str> = tour.cities().iter().map(City::name).collect();
        println!("Tour:");
        println!("{}", names.join(" -> "));
    }

    Ok(())
}

fn elapsed_ms(since: Instant) -> f64 {
    since.elapsed().as_secs_f64() * 1000.0
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
