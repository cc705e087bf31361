#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that builds a Corridor maze and prints it.

mod ascii;
mod config;
mod json;

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use corridor_core::{Command, Event};
use corridor_rendering::{GridPresentation, Presentation, RenderingBackend, Scene, CELL_SIZE_PX};
use corridor_system_connectivity::verify;
use corridor_world::{self as world, query, Maze};

use crate::{
    ascii::AsciiBackend,
    config::{Overrides, RunSettings},
    json::JsonBackend,
};

/// Lay out a Corridor maze and print it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid edge length in cells
    #[arg(long)]
    size: Option<u32>,

    /// Distance between the outer paths and the grid border
    #[arg(long)]
    border_offset: Option<u32>,

    /// Half-width of the open center square
    #[arg(long)]
    center_radius: Option<u32>,

    /// Minimum straight run leaving a fixture
    #[arg(long)]
    min_straight: Option<u32>,

    /// Seed for elbow corner choices
    #[arg(long)]
    seed: Option<u64>,

    /// Hide every path before applying toggles
    #[arg(long)]
    hide_all: bool,

    /// Flip one path by id or label; may be repeated
    #[arg(long = "toggle", value_name = "ID_OR_LABEL")]
    toggles: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,

    /// Print the path list instead of the grid
    #[arg(long)]
    list: bool,

    /// Check that the entrance reaches the exit and center with every path shown
    #[arg(long)]
    verify: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Ascii,
    Json,
}

/// Entry point for the Corridor command-line interface.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let stdout = io::stdout();
    run(args, &mut stdout.lock())
}

fn run(args: Args, out: &mut impl Write) -> Result<()> {
    let file = args.config.as_deref().map(config::load).transpose()?;
    let settings = RunSettings::resolve(
        file,
        Overrides {
            size: args.size,
            border_offset: args.border_offset,
            center_radius: args.center_radius,
            min_straight: args.min_straight,
            seed: args.seed,
            hide_all: args.hide_all,
            toggles: args.toggles,
        },
    );

    let mut maze =
        Maze::build_seeded(settings.params, settings.seed).context("failed to build maze")?;

    let mut events = Vec::new();
    if settings.hide_all {
        world::apply(
            &mut maze,
            Command::SetAllVisibility { visible: false },
            &mut events,
        );
    }
    for target in settings.toggles {
        world::apply(&mut maze, Command::TogglePath { target }, &mut events);
    }
    for event in &events {
        if let Event::GridRebuilt {
            visible_paths,
            open_cells,
        } = event
        {
            log::debug!("{visible_paths} paths visible, {open_cells} open cells");
        }
    }

    if args.verify {
        verify_connectivity(&maze)?;
    }

    if args.list {
        return list_paths(&maze, out);
    }

    let grid = GridPresentation::new(maze.grid(), CELL_SIZE_PX)?;
    let paths = maze.list_paths();
    let title = format!(
        "corridor {size}x{size} seed {seed:#x}",
        size = settings.params.size,
        seed = settings.seed
    );
    let presentation = Presentation::new(title, Scene::new(grid, &paths), paths);

    match args.format {
        OutputFormat::Ascii => AsciiBackend::new(out).present(&presentation),
        OutputFormat::Json => JsonBackend::new(out).present(&presentation),
    }
}

fn verify_connectivity(maze: &Maze) -> Result<()> {
    let mut full = maze.clone();
    let _ = full.set_all_visibility(true);

    let report = verify(
        full.grid(),
        query::entrance(&full),
        query::exit(&full),
        query::center(&full),
    );
    log::info!(
        "connectivity: {} of {} open cells reachable",
        report.reachable_cells,
        report.open_cells
    );

    if !report.exit_reachable || !report.center_reachable {
        bail!(
            "entrance does not reach the {} with every path visible",
            if report.exit_reachable { "center" } else { "exit" }
        );
    }
    if !report.is_fully_connected() {
        log::warn!(
            "{} open cells are unreachable from the entrance",
            report.open_cells - report.reachable_cells
        );
    }
    Ok(())
}

fn list_paths(maze: &Maze, out: &mut impl Write) -> Result<()> {
    for path in maze.list_paths() {
        let position = path
            .label_position
            .map_or_else(|| "-".to_owned(), |point| point.to_string());
        writeln!(out, "{} {} {} {}", path.id, path.label, path.visible, position)
            .context("failed to write path list")?;
    }
    Ok(())
}
