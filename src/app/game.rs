use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use glam::Vec2;

use blockwalk::utils::settings::{default_settings_path, load_settings_or_default};
use blockwalk::{
    GameSettings, Grid, InputState, Session, WorldError, build_mesh, load_or_generate,
    load_world, save_world,
};

/// Single-chunk voxel walker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Settings file (TOML); defaults to the per-user config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// World file, overriding the one in the settings
    #[arg(long, global = true)]
    world: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the default flat terrain to the world file
    Generate {
        /// Overwrite an existing world file
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Load the world file and report its contents and mesh size
    Info,
    /// Run the player controller headlessly with scripted input
    Simulate {
        #[arg(long, default_value_t = 300)]
        frames: u32,

        /// Seconds per frame
        #[arg(long, default_value_t = 1.0 / 60.0)]
        dt: f32,

        /// Hold the forward key the whole time
        #[arg(long, default_value_t = false)]
        walk: bool,

        /// Press jump once per second
        #[arg(long, default_value_t = false)]
        jump: bool,

        /// Horizontal mouse movement per frame, in pixels
        #[arg(long, default_value_t = 0.0)]
        turn: f32,

        /// Save the world when the run ends
        #[arg(long, default_value_t = false)]
        save: bool,
    },
}

fn load_settings(args: &Args) -> GameSettings {
    let mut settings = match args.config.clone().or_else(default_settings_path) {
        Some(path) => load_settings_or_default(&path),
        None => GameSettings::default(),
    };
    if let Some(world) = &args.world {
        settings.world.path = world.clone();
    }
    settings
}

fn generate(settings: &GameSettings, force: bool) -> Result<(), WorldError> {
    let path = &settings.world.path;
    if path.exists() && !force {
        tracing::warn!("{} already exists, pass --force to overwrite", path.display());
        return Ok(());
    }
    save_world(path, &Grid::generate_default())
}

fn info(settings: &GameSettings) -> Result<(), WorldError> {
    let grid = load_world(&settings.world.path)?;
    let mesh = build_mesh(&grid);
    let stats = mesh.stats();

    tracing::info!("World: {}", settings.world.path.display());
    tracing::info!("Solid cells: {}", grid.solid_count());
    tracing::info!("Decorations: {}", grid.decorations().count());
    tracing::info!(
        "Mesh: {} quads, {} vertices, {} indices",
        stats.quads,
        stats.vertices,
        stats.indices
    );
    Ok(())
}

fn simulate(
    settings: GameSettings,
    frames: u32,
    dt: f32,
    walk: bool,
    jump: bool,
    turn: f32,
    save: bool,
) -> Result<(), WorldError> {
    let grid = load_or_generate(&settings.world.path);
    let mut session = Session::with_grid(settings, grid);
    let jump_every = (1.0 / dt).round().max(1.0) as u32;

    let mut input = InputState {
        forward: walk,
        ..Default::default()
    };
    let mut jumps = 0;
    let mut target = None;
    for frame in 0..frames {
        input.jump_pressed = jump && frame % jump_every == 0;
        input.mouse_delta = Vec2::new(turn, 0.0);

        let before = session.controller().player.velocity.y;
        target = session.frame(dt, &input).target;
        let after = session.controller().player.velocity.y;
        if input.jump_pressed && after > before {
            jumps += 1;
        }
        input.end_frame();
    }

    let player = session.controller().player;
    tracing::info!(
        "After {} frames: position {:.3}, velocity {:.3}, yaw {:.3}, jumps {}",
        frames,
        player.position,
        player.velocity,
        player.yaw,
        jumps
    );
    match target {
        Some(hit) => tracing::info!("Looking at cell {} (code {})", hit.cell, hit.code),
        None => tracing::info!("No block in reach"),
    }
    if save {
        session.save()?;
    }
    Ok(())
}

/// Main entry point - call this from the actual main() function
pub fn run_game() -> ExitCode {
    let args = Args::parse();
    let settings = load_settings(&args);

    let result = match args.command {
        Command::Generate { force } => generate(&settings, force),
        Command::Info => info(&settings),
        Command::Simulate {
            frames,
            dt,
            walk,
            jump,
            turn,
            save,
        } => simulate(settings, frames, dt, walk, jump, turn, save),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
