use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod scene;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Scene runner for the spatial geometry engine")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Constrain a desired camera path against the scene's boundaries
    Walk {
        #[arg(long)]
        scene: PathBuf,
        /// Minimum inset kept from every boundary edge
        #[arg(long, default_value_t = 0.5)]
        pushback: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Arrange the scene's footprints around its land bounds
    Place {
        #[arg(long)]
        scene: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print the engine version
    Version,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Walk {
            scene,
            pushback,
            out,
        } => walk(&scene, pushback, &out),
        Action::Place { scene, out } => place(&scene, &out),
        Action::Version => {
            println!("landform {}", landform::VERSION);
            Ok(())
        }
    }
}

fn walk(scene_path: &Path, pushback: f64, out: &Path) -> Result<()> {
    let scene = scene::load_scene(scene_path)?;
    let steps = scene::run_walk(&scene, pushback);
    let constrained = steps.iter().filter(|s| s.constrained).count();
    tracing::info!(steps = steps.len(), constrained, pushback, "walk");
    write_json(out, &steps)
}

fn place(scene_path: &Path, out: &Path) -> Result<()> {
    let scene = scene::load_scene(scene_path)?;
    let placed = scene::run_place(&scene)?;
    tracing::info!(items = placed.len(), "place");
    write_json(out, &placed)
}

fn write_json<T: serde::Serialize>(out: &Path, value: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
