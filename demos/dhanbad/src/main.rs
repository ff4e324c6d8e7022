//! dhanbad — risk-aware tour over ten Dhanbad locations.
//!
//! Solves the closed tour from the ISM campus at three risk weights, shows
//! what a hazard dropped on City Centre does, then sweeps the risk weight
//! over `[0, 10]` and writes the samples and the λ = 5 tour to
//! `output/dhanbad/`.
//!
//! Set `RUST_LOG=debug` to see per-solve and per-hazard log lines.

mod network;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use sr_core::GeoPoint;
use sr_optimize::{SolveResult, SolverBuilder, Sweep, linspace, pareto_frontier};
use sr_output::{CsvWriter, SweepOutputObserver};

use network::{LOCATIONS, build_network, name};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_WEIGHT: f64   = 5.0;
const SWEEP_START:    f64   = 0.0;
const SWEEP_END:      f64   = 10.0;
const SWEEP_SAMPLES:  usize = 20;
const OUTPUT_DIR:     &str  = "output/dhanbad";

// City Centre, as a user would drop it on the map.
const HAZARD: GeoPoint = GeoPoint { lat: 23.8050, lon: 86.4300 };

// ── Printing ──────────────────────────────────────────────────────────────────

fn print_result(label: &str, r: &SolveResult) {
    println!("{label}  (λ = {}, {})", r.risk_weight, r.mode);
    if !r.success {
        println!("  no route: every tour needs a forbidden arc");
        for h in &r.hazards {
            if let Some(node) = h.node {
                println!("  hazard at {} blocks every road into {}", h.hazard, name(node));
            }
        }
        println!();
        return;
    }
    let stops: Vec<&str> = r.route_indices().iter().map(|&n| name(n)).collect();
    println!("  {}", stops.join(" → "));
    println!(
        "  distance {:.2} km  |  risk {}  |  objective {}",
        r.total_distance_m as f64 / 1000.0,
        r.total_risk,
        r.objective.unwrap_or_default()
    );
    println!();
}

/// The payload a map front end would consume: coordinates in `[lon, lat]`
/// order plus the true totals.
fn response_json(r: &SolveResult) -> serde_json::Value {
    let coords: Vec<[f64; 2]> = r.route_coords.iter().map(|p| [p.lon, p.lat]).collect();
    json!({
        "success": r.success,
        "route": coords,
        "tour": r.tour,
        "hazards": r.hazards,
        "metrics": {
            "safe_distance": r.total_distance_m,
            "total_risk": r.total_risk,
            "nodes_visited": r.route_indices().len(),
        },
    })
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    println!("=== dhanbad — risk-aware closed tour ===");
    println!("Locations: {}  |  depot: {}", LOCATIONS.len(), LOCATIONS[0].0);
    println!();

    // 1. Network and solver.
    let solver = SolverBuilder::new(build_network()?).build()?;
    info!(mode = %solver.mode(), "network loaded");

    // 2. Three fixed weights.
    print_result("Shortest", &solver.solve(0.0, &[])?);
    print_result("Safest", &solver.solve(100.0, &[])?);
    let balanced = solver.solve(DEFAULT_WEIGHT, &[])?;
    print_result("Balanced", &balanced);

    // 3. A hazard on a node every tour must visit.
    print_result("Hazard at City Centre", &solver.solve(DEFAULT_WEIGHT, &[HAZARD])?);

    println!("Response payload (λ = {DEFAULT_WEIGHT}):");
    println!("{}", serde_json::to_string_pretty(&response_json(&balanced))?);
    println!();

    // 4. Sweep.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = SweepOutputObserver::new(writer);
    obs.record_route(&balanced);

    let weights = linspace(SWEEP_START, SWEEP_END, SWEEP_SAMPLES);
    let t0 = Instant::now();
    let samples = Sweep::new(&solver, weights).run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    println!(
        "Sweep: {} weights in {:.3} s → {OUTPUT_DIR}/sweep_samples.csv",
        samples.len(),
        elapsed.as_secs_f64()
    );
    println!("{:<10} {:>12} {:>8}", "λ", "distance_m", "risk");
    println!("{}", "-".repeat(32));
    for s in &samples {
        let fmt = |v: Option<u64>| v.map_or_else(|| "-".to_owned(), |x| x.to_string());
        println!("{:<10.3} {:>12} {:>8}", s.risk_weight, fmt(s.distance_m), fmt(s.risk));
    }
    println!();

    // 5. Frontier.
    println!("Pareto frontier:");
    for s in pareto_frontier(&samples) {
        println!(
            "  {:>8} m  risk {:>4}  (first at λ = {:.3})",
            s.distance_m.unwrap_or_default(),
            s.risk.unwrap_or_default(),
            s.risk_weight
        );
    }

    Ok(())
}
