use clap::Parser;
use miette::Result;
use raster::cli::{Cli, Commands};
use raster::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Render(args) => raster::cli::render::run(args, &printer)?,
        Commands::Scenes(args) => raster::cli::scenes::run(args, &printer)?,
        Commands::Completions(args) => raster::cli::completions::run(args)?,
    }

    Ok(())
}
