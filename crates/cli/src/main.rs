#![deny(unsafe_code)]
//! CLI binary for the triangle canvas.
//!
//! Subcommands:
//! - `render` — rasterize the scene on the CPU and write a PNG
//! - `probe <x> <y>` — expected pixel before and after the draw call
//! - `shaders` — print the embedded shader sources
//! - `scene` — print the effective scene

mod error;
mod logging;

use clap::{Parser, Subcommand};
use error::CliError;
use std::path::{Path, PathBuf};
use std::process;
use triangle_canvas_core::shaders::{FRAGMENT_SHADER_SOURCE, VERTEX_SHADER_SOURCE};
use triangle_canvas_core::{CanvasError, SceneConfig};
use triangle_canvas_snapshot::{clear_only, rasterize};

#[derive(Parser)]
#[command(name = "triangle-canvas", about = "Reference renderer for the triangle canvas")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log each step at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Scene file (JSON); missing fields use the fixed scene.
    #[arg(long, global = true)]
    scene: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rasterize the scene and write a PNG snapshot.
    Render {
        /// Output file path.
        #[arg(short, long, default_value = "triangle.png")]
        output: PathBuf,
    },
    /// Print the expected RGBA8 value of one canvas pixel.
    Probe {
        /// Column, from the left edge.
        x: u32,
        /// Row, from the top edge.
        y: u32,
    },
    /// Print the vertex and fragment shader sources.
    Shaders,
    /// Print the effective scene as JSON.
    Scene,
}

fn load_scene(path: Option<&Path>) -> Result<SceneConfig, CliError> {
    let Some(path) = path else {
        return Ok(SceneConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
    log::debug!("loaded scene from {}", path.display());
    Ok(SceneConfig::from_json_str(&text)?)
}

fn run(cli: Cli) -> Result<(), CliError> {
    let scene = load_scene(cli.scene.as_deref())?;

    match cli.command {
        Command::Render { output } => {
            let frame = rasterize(&scene)?;
            triangle_canvas_snapshot::snapshot::write_png(&frame, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "width": scene.size.width,
                    "height": scene.size.height,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {}x{} -> {}",
                    scene.size.width,
                    scene.size.height,
                    output.display()
                );
            }
        }
        Command::Probe { x, y } => {
            let out_of_bounds = || CanvasError::OutOfBounds {
                x,
                y,
                width: scene.size.width,
                height: scene.size.height,
            };
            let before = clear_only(&scene)?.pixel(x, y).ok_or_else(out_of_bounds)?;
            let after = rasterize(&scene)?.pixel(x, y).ok_or_else(out_of_bounds)?;

            if cli.json {
                let info = serde_json::json!({
                    "x": x,
                    "y": y,
                    "before_draw": before,
                    "after_draw": after,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("({x}, {y}) before draw: {before:?}");
                println!("({x}, {y}) after draw:  {after:?}");
            }
        }
        Command::Shaders => {
            if cli.json {
                let info = serde_json::json!({
                    "vertex": VERTEX_SHADER_SOURCE,
                    "fragment": FRAGMENT_SHADER_SOURCE,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("// vertex\n{VERTEX_SHADER_SOURCE}");
                println!("// fragment\n{FRAGMENT_SHADER_SOURCE}");
            }
        }
        Command::Scene => {
            println!("{}", serde_json::to_string_pretty(&scene)?);
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
