use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use gridfall_lib::{
    load_graph, plan_drop, plan_route, round_display_distance, DropRequest, MapId, Point,
    RouteRequest,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Drop planning and road-network routing for battleground maps")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the supported maps, their sizes, and special drop zones.
    Maps,
    /// Plan jump and dive points for a drop onto a target.
    Drop {
        /// Map name (e.g. Erangel).
        #[arg(long)]
        map: String,
        /// First endpoint of the plane's flight path, as "x,y" in [0,1].
        #[arg(long, value_parser = parse_point)]
        plane_start: Point,
        /// Second endpoint of the plane's flight path.
        #[arg(long, value_parser = parse_point)]
        plane_end: Point,
        /// Intended landing spot.
        #[arg(long, value_parser = parse_point)]
        target: Point,
        /// Emit the full plan as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Compute the shortest road route between two ground points.
    Route {
        /// Road graph snapshot (JSON) to route over.
        #[arg(long)]
        graph: PathBuf,
        /// Map name, used to convert normalized distances to meters.
        #[arg(long)]
        map: String,
        /// Start point, as "x,y" in [0,1].
        #[arg(long, value_parser = parse_point)]
        from: Point,
        /// Goal point, as "x,y" in [0,1].
        #[arg(long, value_parser = parse_point)]
        to: Point,
        /// Emit the full route as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Maps => handle_maps(),
        Command::Drop {
            map,
            plane_start,
            plane_end,
            target,
            json,
        } => handle_drop(&map, plane_start, plane_end, target, json),
        Command::Route {
            graph,
            map,
            from,
            to,
            json,
        } => handle_route(&graph, &map, from, to, json),
    }
}

fn handle_maps() -> Result<()> {
    for map in MapId::ALL {
        println!("{} ({:.0} m)", map, map.size_meters());
        for zone in map.special_zones() {
            println!(
                "  special zone: {} at ({:.4}, {:.4})",
                zone.name, zone.center.x, zone.center.y
            );
        }
    }
    Ok(())
}

fn handle_drop(
    map_name: &str,
    plane_start: Point,
    plane_end: Point,
    target: Point,
    json: bool,
) -> Result<()> {
    let map = MapId::parse(map_name)?;
    ensure_in_bounds(&plane_start, "plane-start")?;
    ensure_in_bounds(&plane_end, "plane-end")?;
    ensure_in_bounds(&target, "target")?;

    let request = DropRequest {
        map,
        plane_start,
        plane_end,
        destination: target,
    };
    let plan = plan_drop(&request)
        .context("no drop solution: flight path is degenerate or never approaches the target")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("Map:            {} ({:.0} m)", map, map.size_meters());
    println!("Strategy:       {:?}", plan.strategy);
    println!(
        "Jump point:     ({:.4}, {:.4})",
        plan.jump_point.x, plan.jump_point.y
    );
    println!(
        "Dive point:     ({:.4}, {:.4})",
        plan.dive_point.x, plan.dive_point.y
    );
    println!(
        "Jump distance:  {:.0} m (rule: {:.0} m)",
        round_display_distance(plan.distance_to_target_m),
        plan.rule_distance_m
    );
    println!(
        "Perpendicular:  {:.0} m",
        round_display_distance(plan.perp_distance_m)
    );
    println!(
        "Reachable:      {}",
        if plan.reachable { "yes" } else { "no" }
    );
    Ok(())
}

fn handle_route(
    graph_path: &Path,
    map_name: &str,
    start: Point,
    goal: Point,
    json: bool,
) -> Result<()> {
    let map = MapId::parse(map_name)?;
    ensure_in_bounds(&start, "from")?;
    ensure_in_bounds(&goal, "to")?;

    let graph = load_graph(graph_path)
        .with_context(|| format!("failed to load road graph from {}", graph_path.display()))?;
    tracing::debug!(nodes = graph.len(), "loaded road graph");

    let request = RouteRequest { map, start, goal };
    let plan = plan_route(&graph, &request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("Route ({} road hops):", plan.hop_count());
    for point in &plan.points {
        println!("- ({:.4}, {:.4})", point.x, point.y);
    }
    println!(
        "Total distance: {:.0} m",
        round_display_distance(plan.distance_m)
    );
    Ok(())
}

/// Parse "x,y" into a normalized point.
fn parse_point(raw: &str) -> std::result::Result<Point, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got \"{raw}\""))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|_| format!("invalid x coordinate in \"{raw}\""))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|_| format!("invalid y coordinate in \"{raw}\""))?;
    Ok(Point::new(x, y))
}

/// The core expects callers to bounds-check points to the unit square.
fn ensure_in_bounds(point: &Point, flag: &str) -> Result<()> {
    if !(0.0..=1.0).contains(&point.x) || !(0.0..=1.0).contains(&point.y) {
        bail!(
            "--{flag} must lie within [0,1]x[0,1], got ({}, {})",
            point.x,
            point.y
        );
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
