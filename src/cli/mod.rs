pub mod completions;
pub mod render;
pub mod scenes;

use clap::{Parser, Subcommand};

/// raster - 2D scene rasterizer
#[derive(Parser, Debug)]
#[command(name = "raster")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a scene to a PNG file
    Render(render::RenderArgs),

    /// List built-in scenes
    Scenes(scenes::ScenesArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
