// main.rs
//
// Builds the default spiral staircase and a single tread, and writes both
// to stl/. Set SPIRALSTAIR_LOG to trace, debug, info, warn or error.

use spiralstair::stair::{self, StairParameters, StaircaseConfig};
use spiralstair::{CSGOps, Scene};
use std::error::Error;
use std::fs;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn Error>> {
    let log_level = match std::env::var("SPIRALSTAIR_LOG")
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    fs::create_dir_all("stl")?;

    let params = StairParameters::default();
    let mut scene = Scene::new();
    let id = stair::apply(
        &mut scene,
        (params.min_height, params.max_height),
        params.turns,
        params.radius,
        params.step_count as i32,
    )?;
    let staircase = &scene.get(id)?.mesh;
    info!(
        name = %scene.get(id)?.name,
        polygons = staircase.polygons.len(),
        height = staircase.height(),
        "staircase ready"
    );
    fs::write("stl/spiral_staircase.stl", staircase.to_stl_binary()?)?;

    let gap = StaircaseConfig::default().angle_gap_deg;
    let wedge = stair::build_wedge(
        params.step_angle() + gap,
        gap,
        params.radius,
        params.step_height() / 2.0,
    )?;
    fs::write("stl/wedge.stl", wedge.to_stl_ascii("wedge"))?;

    Ok(())
}
