//! Scenes command implementation.
//!
//! Lists the built-in scenes, as status lines or as JSON on stdout.

use clap::Args;

use crate::error::{RasterError, Result};
use crate::output::{plural, Printer};
use crate::scene::BuiltinScenes;

/// List built-in scenes
#[derive(Args, Debug, Default)]
pub struct ScenesArgs {
    /// Print the catalogue as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ScenesArgs, printer: &Printer) -> Result<()> {
    if args.json {
        println!("{}", catalog_json()?);
        return Ok(());
    }

    let catalog = BuiltinScenes::catalog();
    for info in catalog {
        let window: [f64; 4] = info.window.into();
        printer.info(
            info.name,
            &format!("{} {}", info.description, printer.dim(&format!("{:?}", window))),
        );
    }
    printer.success("Listed", &plural(catalog.len(), "scene", "scenes"));

    Ok(())
}

/// The built-in scene catalogue as pretty-printed JSON.
pub fn catalog_json() -> Result<String> {
    serde_json::to_string_pretty(BuiltinScenes::catalog()).map_err(|e| RasterError::Output {
        message: format!("Failed to serialize scene catalogue: {}", e),
    })
}
