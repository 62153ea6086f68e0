use clap::{Parser, Subcommand};
use log::debug;

use chhaya_ephem::{AnalyticEphemeris, GeoLocation, Observer};
use chhaya_search::{
    EclipseConfig, EclipseKind, EclipseQuery, EclipseResult, Language, MaximumRefiner,
    SeparationMinimumRefiner, solve, solve_solar_eclipse,
};
use chhaya_time::{CalendarTime, tt_to_ut_jd, ut_to_tt_jd};

#[derive(Parser)]
#[command(name = "chhaya", about = "Brute-force eclipse circumstances")]
struct Cli {
    /// Log search progress (overrides RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Output language: en or es
    #[arg(long, global = true, default_value = "en")]
    lang: String,

    /// Days a single search pass may cover
    #[arg(long, global = true, default_value = "36525")]
    max_span_days: f64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Next lunar eclipse after a date
    Lunar {
        /// UT datetime (YYYY-MM-DDThh:mm:ss)
        #[arg(long)]
        date: String,
    },
    /// Next solar eclipse after a date, for a site
    Solar {
        /// UT datetime (YYYY-MM-DDThh:mm:ss)
        #[arg(long)]
        date: String,
        /// Geodetic latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Height above the ellipsoid in meters
        #[arg(long, default_value = "0")]
        height: f64,
        /// Report the contact midpoint instead of the refined maximum
        #[arg(long)]
        no_refine: bool,
    },
}

fn parse_ut(s: &str) -> Result<f64, String> {
    let cal: CalendarTime = s
        .parse()
        .map_err(|e| format!("Invalid date '{s}': {e}"))?;
    Ok(ut_to_tt_jd(cal.to_jd()))
}

fn format_ut(jd_tdb: f64) -> String {
    CalendarTime::from_jd(tt_to_ut_jd(jd_tdb)).to_string()
}

/// Contact slot names, in `EclipseResult::events` order.
fn contact_labels(kind: EclipseKind) -> &'static [&'static str] {
    match kind {
        EclipseKind::Lunar => &["P1", "PT1", "U1", "UT1", "UT4", "U4", "PT4", "P4"],
        EclipseKind::Solar => &["C1", "C2", "C3", "C4"],
    }
}

fn print_result(result: &EclipseResult, lang: Language) {
    let noun = match (result.kind(), lang) {
        (EclipseKind::Lunar, Language::English) => "lunar eclipse",
        (EclipseKind::Solar, Language::English) => "solar eclipse",
        (EclipseKind::Lunar, Language::Spanish) => "eclipse lunar",
        (EclipseKind::Solar, Language::Spanish) => "eclipse solar",
    };
    println!("{} {}", result.type_label(lang), noun);
    match result.penumbral_magnitude() {
        Some(pen) => println!(
            "  Magnitude: {:.4}  penumbral: {:.4}",
            result.magnitude(),
            pen
        ),
        None => println!("  Magnitude: {:.4}", result.magnitude()),
    }
    println!(
        "  Maximum: {} UT (JD TDB {:.6})",
        format_ut(result.maximum_jd_tdb()),
        result.maximum_jd_tdb()
    );
    if let Some(visible) = result.visible() {
        println!("  Visible: {}", if visible { "yes" } else { "no" });
    }

    for (slot, label) in contact_labels(result.kind()).iter().enumerate() {
        if let Some(jd) = result.event(slot) {
            println!("  {label:>3}: {} UT", format_ut(jd));
        }
    }

    for phase in result.phases() {
        println!(
            "  {}: {} .. {} UT",
            phase.label(lang),
            format_ut(phase.start_jd_tdb),
            format_ut(phase.end_jd_tdb)
        );
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let lang: Language = cli.lang.parse()?;
    let config = EclipseConfig {
        max_span_days: cli.max_span_days,
        ..EclipseConfig::default()
    };
    config.validate()?;
    let eph = AnalyticEphemeris::new();

    let result = match cli.command {
        Commands::Lunar { date } => {
            let query = EclipseQuery::lunar(parse_ut(&date)?);
            debug!("lunar query from JD TDB {:.6}", query.jd_tdb);
            solve(&eph, &query, &config)
        }
        Commands::Solar {
            date,
            lat,
            lon,
            height,
            no_refine,
        } => {
            let site = GeoLocation::new(lat, lon, height);
            site.validate()?;
            let query = EclipseQuery::solar(parse_ut(&date)?, Observer::topocentric(site));
            debug!("solar query from JD TDB {:.6} at {lat}, {lon}", query.jd_tdb);
            let refiner = SeparationMinimumRefiner::new(&eph);
            let refiner = (!no_refine).then_some(&refiner as &dyn MaximumRefiner);
            solve_solar_eclipse(&eph, &query, &config, refiner)
        }
    }
    .map_err(|e| format!("Error: {e}"))?;

    print_result(&result, lang);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    let _ = logger.try_init();

    if let Err(e) = run(cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
