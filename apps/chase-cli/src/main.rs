mod script;

use std::path::PathBuf;

use anyhow::Context;
use chase_common::BodyKind;
use chase_kernel::{ChaseConfig, Session, StepOutcome};
use chase_render::{DebugTextRenderer, FollowCamera, RenderView, Renderer};
use chase_scene::CastleLayout;
use chase_tools::SessionInspector;
use clap::{Parser, Subcommand};
use script::Script;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chase-cli", about = "Headless runner for the castle chase")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// List the static bodies of the castle layout
    Layout {
        /// Layout seed
        #[arg(short, long, default_value = "0")]
        seed: u64,
        /// Include non-collidable decoration
        #[arg(long)]
        all: bool,
    },
    /// Run a scripted headless session
    Run {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "600")]
        ticks: u64,
        /// Seed override (layout and escape directions)
        #[arg(short, long)]
        seed: Option<u64>,
        /// YAML tuning file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Key script, e.g. "up:60,down+right:40,idle:10"
        #[arg(long, default_value = "up:40,left+up:30,right:60,idle:30")]
        script: String,
        /// Print a frame dump every N ticks (0 = never)
        #[arg(long, default_value = "60")]
        every: u64,
        /// Print session events as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Show the collision index and actors of a fresh session
    Inspect {
        /// Layout seed
        #[arg(short, long, default_value = "0")]
        seed: u64,
    },
}

fn load_config(path: Option<&PathBuf>, seed: Option<u64>) -> anyhow::Result<ChaseConfig> {
    let mut config = match path {
        Some(p) => ChaseConfig::load(p)
            .with_context(|| format!("loading config from {}", p.display()))?,
        None => ChaseConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = seed;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    // stdout carries command output (JSON lines for `run --json`)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            println!("chase-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("scene: {}", chase_scene::crate_info());
            println!("input: {}", chase_input::crate_info());
            println!("kernel: {}", chase_kernel::crate_info());
            println!("render: {}", chase_render::crate_info());
            println!("tools: {}", chase_tools::crate_info());
        }
        Commands::Layout { seed, all } => {
            let layout = CastleLayout::generate(seed);
            println!(
                "Layout seed={seed}: {} bodies, {} collidable",
                layout.bodies().len(),
                layout.collidable().count()
            );
            for body in layout.bodies().iter().filter(|b| all || b.collidable) {
                let (min, max) = (body.bounds.min, body.bounds.max);
                println!(
                    "  {:<13} solid={:<5} min=({:.2}, {:.2}, {:.2}) max=({:.2}, {:.2}, {:.2})",
                    format!("{:?}", body.kind),
                    body.collidable,
                    min.x,
                    min.y,
                    min.z,
                    max.x,
                    max.y,
                    max.z
                );
            }
        }
        Commands::Run {
            ticks,
            seed,
            config,
            script,
            every,
            json,
        } => {
            let config = load_config(config.as_ref(), seed)?;
            let script: Script = script.parse().context("parsing --script")?;
            tracing::info!(seed = config.seed, ticks, "starting run");

            let mut session = Session::castle(config);
            let mut camera = FollowCamera::default();
            let mut view = RenderView::default();
            let renderer = DebugTextRenderer::new();
            let mut catches = 0u32;

            for frame in 0..ticks {
                let keys = script.keys_at(frame);
                if let StepOutcome::Caught { distance } = session.step(&keys) {
                    catches += 1;
                    tracing::info!(tick = session.tick(), distance, "caught");
                }
                camera.follow(session.player().position);
                camera.apply(&mut view);

                for event in session.drain_events() {
                    if json {
                        println!("{}", serde_json::to_string(&event)?);
                    }
                }
                if !json && every > 0 && session.tick() % every == 0 {
                    print!("{}", renderer.render(&session, &view));
                }
            }

            if !json {
                println!("{}", SessionInspector::summary(&session));
                println!("catches={catches}");
            }
        }
        Commands::Inspect { seed } => {
            let layout = CastleLayout::generate(seed);
            let session = Session::from_layout(
                ChaseConfig {
                    seed,
                    ..ChaseConfig::default()
                },
                &layout,
            );
            println!("{}", SessionInspector::index(session.index()));
            for kind in [
                BodyKind::BoundaryWall,
                BodyKind::Tower,
                BodyKind::CastleWall,
                BodyKind::GatePillar,
                BodyKind::Keep,
                BodyKind::TreeTrunk,
            ] {
                println!("  {:<13} {}", format!("{kind:?}"), layout.count(kind));
            }
            println!("{}", SessionInspector::player(&session));
            println!("{}", SessionInspector::enemy(&session));
            println!("{}", SessionInspector::summary(&session));
        }
    }

    Ok(())
}
