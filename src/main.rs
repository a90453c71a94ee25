use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

use ecopatrol::api::fetch_air_quality;
use ecopatrol::config::FileConfig;
use ecopatrol::geometry::LngLat;
use ecopatrol::map::{BoundaryGuard, MapController, MapEvent, NoHaptics, RecordingHost, Verdict};
use ecopatrol::region::Region;

/// Replay map pan traces against the EcoPatrol boundary guard
///
/// Examples:
///   # Replay a recorded pan trace against the built-in Uzbekistan border
///   ecopatrol -t trace.json
///
///   # Use a custom border polygon, coarsened for cheap checks
///   ecopatrol -t trace.json -b border.geojson --simplify 0.05
///
///   # Start the viewport over Samarkand and report air quality there
///   ecopatrol -t trace.json --lng 66.96 --lat 39.65 --air-quality
///
///   # Use a config file
///   ecopatrol --config my-settings.toml -t trace.json
#[derive(Parser, Debug)]
#[command(name = "ecopatrol")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches ecopatrol.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pan trace to replay: a JSON array of [lng, lat] centers
    #[arg(short = 't', long)]
    trace: Option<PathBuf>,

    /// Border polygon as GeoJSON (defaults to the built-in Uzbekistan border)
    #[arg(short = 'b', long)]
    border: Option<PathBuf>,

    /// Border simplification epsilon in degrees, 0 = off
    #[arg(long, default_value = "0.0")]
    simplify: f64,

    /// Initial viewport center longitude (defaults to Tashkent)
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lng: Option<f64>,

    /// Initial viewport center latitude (defaults to Tashkent)
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Fetch current air quality for the initial center
    #[arg(long)]
    air_quality: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };
    let file_config = file_config.unwrap_or_default();

    let trace_path = args.trace.clone().or_else(|| file_config.trace.clone());
    let border_path = args.border.clone().or_else(|| file_config.border.clone());
    let simplify = if args.simplify != 0.0 {
        args.simplify
    } else {
        file_config.simplify
    };
    let lng = args.lng.unwrap_or(file_config.lng);
    let lat = args.lat.unwrap_or(file_config.lat);
    let air_quality = args.air_quality || file_config.air_quality;
    let verbose = args.verbose || file_config.verbose;

    let Some(trace_path) = trace_path else {
        bail!("Must provide a pan trace with --trace/-t (a JSON array of [lng, lat] centers)");
    };

    println!("ecopatrol - Boundary Guard Replay");
    println!("=================================");
    println!();

    let region = match border_path {
        Some(ref path) => {
            let contents = std::fs::read_to_string(path)
                .context(format!("Failed to read border file: {:?}", path))?;
            Region::from_geojson(&contents)
                .context(format!("Failed to load border polygon: {:?}", path))?
        }
        None => Region::uzbekistan(),
    };

    let region = if simplify > 0.0 {
        let before = region.ring().len();
        let coarse = region.simplified(simplify);
        println!(
            "Border: {} vertices -> {} (epsilon {})",
            before,
            coarse.ring().len(),
            simplify
        );
        coarse
    } else {
        println!("Border: {} vertices", region.ring().len());
        region
    };

    let start_center = LngLat::new(lng, lat);
    if !region.contains(start_center) {
        bail!(
            "Initial center ({:.4}, {:.4}) is outside the border polygon",
            start_center.lng,
            start_center.lat
        );
    }

    let trace = load_trace(&trace_path)?;
    if trace.is_empty() {
        bail!("Trace is empty: {:?}", trace_path);
    }
    println!("Trace: {} moves from {:?}", trace.len(), trace_path);
    println!();

    let mut host = RecordingHost::new(start_center);
    let mut haptics = NoHaptics;
    let mut controller = MapController::new(BoundaryGuard::new(region, start_center));

    let bar = create_progress_bar(trace.len() as u64);
    let start = Instant::now();
    let mut accepted = 0usize;
    let mut snapped = 0usize;

    for (i, center) in trace.iter().enumerate() {
        controller.handle_event(MapEvent::MoveStart, &mut host, &mut haptics);
        let verdict = controller.handle_event(MapEvent::Move(*center), &mut host, &mut haptics);
        controller.handle_event(MapEvent::MoveEnd, &mut host, &mut haptics);

        match verdict {
            Some(Verdict::Accepted) => accepted += 1,
            Some(Verdict::Snapped(back_to)) => {
                snapped += 1;
                if verbose {
                    bar.println(format!(
                        "  move {}: ({:.4}, {:.4}) left the region, snapped back to ({:.4}, {:.4})",
                        i, center.lng, center.lat, back_to.lng, back_to.lat
                    ));
                }
            }
            _ => {}
        }
        bar.inc(1);
    }

    bar.finish_with_message(format!(
        "Replayed {} moves [{:.1}s]",
        trace.len(),
        start.elapsed().as_secs_f32()
    ));

    let final_center = controller.guard().last_valid_center();
    println!();
    println!("Accepted: {}", accepted);
    println!("Snapped:  {}", snapped);
    println!(
        "Final center: ({:.4}, {:.4})",
        final_center.lng, final_center.lat
    );

    if air_quality {
        println!();
        let spinner = create_spinner("Fetching air quality from Open-Meteo...");
        let reading = fetch_air_quality(start_center).context("Failed to fetch air quality")?;
        spinner.finish_with_message(format!(
            "European AQI {:.0} ({}){}",
            reading.european_aqi,
            reading.level().label(),
            reading
                .pm2_5
                .map(|v| format!(", PM2.5 {:.1} ug/m3", v))
                .unwrap_or_default()
        ));
    }

    Ok(())
}

/// A trace is the center stream a map widget would report while panning
fn load_trace(path: &std::path::Path) -> Result<Vec<LngLat>> {
    let contents =
        std::fs::read_to_string(path).context(format!("Failed to read trace file: {:?}", path))?;
    let raw: Vec<[f64; 2]> = serde_json::from_str(&contents)
        .context("Failed to parse trace (expected a JSON array of [lng, lat] pairs)")?;
    Ok(raw.into_iter().map(|[lng, lat]| LngLat::new(lng, lat)).collect())
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-"),
    );
    pb
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
