//! `flyview` command-line entry point.
//!
//! ```text
//! flyview [--scene scene.toml] [--options options.toml] [--title NAME]
//! flyview --write-default-options options.toml
//! ```

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use flyview::{Options, Scene, Viewer, ViewerError};

/// Fly through a 3D scene, select objects and play feedback animations.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Scene file (TOML). The built-in demo scene is used when omitted.
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Options file (TOML). Missing fields keep their defaults.
    #[arg(long)]
    options: Option<PathBuf>,

    /// Window title prefix.
    #[arg(long, default_value = "flyview")]
    title: String,

    /// Write the default options to this path and exit.
    #[arg(long, value_name = "PATH")]
    write_default_options: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<(), ViewerError> {
    if let Some(path) = cli.write_default_options {
        Options::default().save(&path)?;
        log::info!("Wrote default options to {}", path.display());
        return Ok(());
    }

    let options = match &cli.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let scene = match &cli.scene {
        Some(path) => Scene::load(path)?,
        None => Scene::demo(),
    };

    Viewer::builder()
        .with_scene(scene)
        .with_options(options)
        .with_title(cli.title)
        .build()
        .run()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
