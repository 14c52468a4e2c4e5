use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use panchanga_core::{
    Element, PanchangaConfig, PanchangaReport, PanchangaRequest, PlaceCatalog, PlaceQuery, SanskritNames,
    TithiStrategy, ahargana, elapsed_year, label, panchanga_for_date, samvatsara,
};
use panchanga_ephem::MeanEphemeris;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "panchanga", about = "Hindu almanac (panchanga) calculator")]
struct Cli {
    /// Log engine internals (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Panchanga for a civil date at a city or coordinates
    Day {
        /// YYYY-MM-DD, DD/MM/YYYY or an RFC 3339 date-time
        #[arg(long)]
        date: String,
        /// Built-in city name (see `cities`)
        #[arg(long, conflicts_with_all = ["lat", "lon", "elevation", "tz"])]
        city: Option<String>,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
        /// Elevation in metres (default 0)
        #[arg(long)]
        elevation: Option<f64>,
        /// Offset in hours ("5.5"), "+05:30" or an IANA zone
        #[arg(long, allow_hyphen_values = true)]
        tz: Option<String>,
        /// Tithi end method (overrides the config file)
        #[arg(long, value_enum)]
        strategy: Option<Strategy>,
        /// JSON config file with PanchangaConfig fields
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Ahargana, elapsed years and samvatsara for a Julian Day
    Year {
        /// Julian Day (UT)
        #[arg(long)]
        jd: f64,
        /// Current masa, 1 (Chaitra) to 12 (Phalguna)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=12))]
        masa: u8,
    },
    /// List the built-in cities
    Cities,
    /// Describe each panchanga element
    Elements,
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    Interpolated,
    PhaseSearch,
}

impl From<Strategy> for TithiStrategy {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::Interpolated => TithiStrategy::Interpolated,
            Strategy::PhaseSearch => TithiStrategy::PhaseSearch,
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn load_config(path: Option<&Path>) -> Result<PanchangaConfig, String> {
    let Some(path) = path else {
        return Ok(PanchangaConfig::default());
    };
    let text = std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("Invalid config {}: {e}", path.display()))
}

fn place_query(
    city: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    elevation: Option<f64>,
    tz: Option<String>,
) -> PlaceQuery {
    match city {
        Some(name) => PlaceQuery::Named(name),
        None => PlaceQuery::Coordinates {
            latitude: lat,
            longitude: lon,
            elevation_m: elevation,
            zone: tz,
        },
    }
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Day {
            date,
            city,
            lat,
            lon,
            elevation,
            tz,
            strategy,
            config,
            json,
        } => {
            let mut config = load_config(config.as_deref()).unwrap_or_else(|e| fail(e));
            if let Some(s) = strategy {
                config = config.with_tithi_strategy(s.into());
            }
            let request = PanchangaRequest::new(date, place_query(city, lat, lon, elevation, tz));
            let ephem = MeanEphemeris::new();
            let catalog = PlaceCatalog::builtin();

            let snapshot = panchanga_for_date(&ephem, &catalog, &request, &config).unwrap_or_else(|e| fail(e));
            tracing::info!(julian_day = snapshot.julian_day, "panchanga computed");
            let report = PanchangaReport::new(&snapshot, &SanskritNames).unwrap_or_else(|e| fail(e));
            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(text) => println!("{text}"),
                    Err(e) => fail(format!("Failed to encode report: {e}")),
                }
            } else {
                println!("{report}");
            }
        }

        Commands::Year { jd, masa } => {
            let a = ahargana(jd);
            let year = elapsed_year(a, masa);
            let cycle = samvatsara(year.kali);
            println!("Ahargana:   {}", a.floor() as i64);
            println!("Kali year:  {}", year.kali);
            println!("Saka year:  {}", year.saka);
            println!(
                "Samvatsara: {} (index {cycle})",
                label(&SanskritNames, Element::Samvatsara, u32::from(cycle))
            );
        }

        Commands::Cities => {
            for name in PlaceCatalog::builtin().names() {
                println!("{name}");
            }
        }

        Commands::Elements => {
            for element in Element::ALL {
                println!("{:<12} {}", element.label(), element.description());
            }
        }
    }
}
