//! Render command implementation.
//!
//! Resolves options (CLI flags over raster.yaml over scene defaults),
//! renders the scene and writes a PNG.

use std::path::PathBuf;

use clap::Args;

use crate::error::{RasterError, Result};
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::parser::load_scene_file;
use crate::render::{write_png, FilterKind, Renderer};
use crate::scene::{BuiltinScenes, Scene};
use crate::types::Window;

/// Render a scene to a PNG file
#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    /// Built-in scene to render (see `raster scenes`)
    #[arg(long, short, conflicts_with = "file")]
    pub scene: Option<String>,

    /// Scene file to render
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// World-space window
    #[arg(
        long,
        short,
        num_args = 4,
        value_names = ["XMIN", "XMAX", "YMIN", "YMAX"],
        allow_negative_numbers = true
    )]
    pub window: Option<Vec<f64>>,

    /// Output resolution in pixels
    #[arg(long, short, num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
    pub resolution: Option<Vec<u32>>,

    /// Output PNG path
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Anti-aliasing filter: none, box, hat or gaussian
    #[arg(long, short)]
    pub filter: Option<String>,

    /// Samples per pixel when anti-aliasing
    #[arg(long, short = 'n')]
    pub samples: Option<u32>,

    /// Standard deviation of the gaussian filter, in pixels
    #[arg(long)]
    pub sd: Option<f64>,

    /// Rotate the rendered content counter-clockwise, in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub rotate: Option<f64>,

    /// Seed for jitter sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Manifest to read defaults from (default: ./raster.yaml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    let mut manifest = Manifest::discover(args.config.as_deref())?;
    apply_overrides(&mut manifest, args)?;

    let (scene, scene_window) = load_scene(&manifest)?;
    let settings = manifest.render_settings(scene_window)?;
    let renderer = Renderer::new(settings)?;
    let settings = renderer.settings();

    let filter = match settings.filter {
        FilterKind::None => "no anti-aliasing".to_string(),
        kind => format!("{} filter, {} samples", kind, settings.samples),
    };
    printer.status(
        "Rendering",
        &format!(
            "{} ({}x{}, {})",
            scene.name, settings.width, settings.height, filter
        ),
    );
    if settings.filter == FilterKind::None && manifest.samples.is_some() {
        printer.warning("Ignoring", "sample count without an anti-aliasing filter");
    }
    if settings.filter != FilterKind::None && settings.seed.is_none() {
        printer.info("Seed", &renderer.seed().to_string());
    }

    let rows = settings.height as usize;
    let image = renderer.render_with(&scene, |done| {
        printer.progress("Rendering", done, rows, "rows");
    });
    printer.finish_progress();
    printer.status("Rendered", &plural(rows, "row", "rows"));
    write_png(&image, &manifest.output)?;

    printer.success(
        "Finished",
        &format!("{} -> {}", scene.name, display_path(&manifest.output)),
    );

    Ok(())
}

/// Layer CLI flags over manifest values.
fn apply_overrides(manifest: &mut Manifest, args: RenderArgs) -> Result<()> {
    if let Some(file) = args.file {
        manifest.scene_file = Some(file);
    }
    if let Some(scene) = args.scene {
        manifest.scene = Some(scene);
        manifest.scene_file = None;
    }
    if let Some(window) = args.window {
        manifest.window = Some(parse_window(&window)?);
    }
    if let Some(resolution) = args.resolution {
        let [width, height]: [u32; 2] = resolution.as_slice().try_into().map_err(|_| {
            RasterError::invalid("Resolution takes exactly 2 values: WIDTH HEIGHT")
        })?;
        manifest.resolution = Some([width, height]);
    }
    if let Some(output) = args.output {
        manifest.output = output;
    }
    if let Some(filter) = args.filter {
        manifest.filter = Some(filter);
    }
    if let Some(samples) = args.samples {
        manifest.samples = Some(samples);
    }
    if let Some(sd) = args.sd {
        manifest.sd = Some(sd);
    }
    if let Some(rotate) = args.rotate {
        manifest.rotation = Some(rotate);
    }
    if let Some(seed) = args.seed {
        manifest.seed = Some(seed);
    }
    Ok(())
}

fn parse_window(values: &[f64]) -> Result<Window> {
    let bounds: [f64; 4] = values.try_into().map_err(|_| {
        RasterError::invalid("Window takes exactly 4 values: XMIN XMAX YMIN YMAX")
    })?;
    Ok(Window::from(bounds))
}

/// Load the scene named by the manifest and the window that frames it.
fn load_scene(manifest: &Manifest) -> Result<(Scene, Option<Window>)> {
    if let Some(path) = &manifest.scene_file {
        let doc = load_scene_file(path)?;
        return Ok((doc.scene, doc.window));
    }

    let name = manifest.effective_scene();
    let scene = BuiltinScenes::get(name).ok_or_else(|| RasterError::InvalidArgument {
        message: format!("Unknown scene: {}", name),
        help: Some(format!(
            "Built-in scenes: {}",
            BuiltinScenes::names().collect::<Vec<_>>().join(", ")
        )),
    })?;
    let window = BuiltinScenes::info(name).map(|info| info.window);

    Ok((scene, window))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn args_in(dir: &std::path::Path) -> RenderArgs {
        // Point at an empty manifest so a stray ./raster.yaml is never read
        let config = dir.join("raster.yaml");
        fs::write(&config, "").unwrap();
        RenderArgs {
            config: Some(config),
            output: Some(dir.join("out.png")),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_builtin_scene() {
        let dir = tempdir().unwrap();
        let args = RenderArgs {
            scene: Some("shapes".to_string()),
            resolution: Some(vec![16, 12]),
            ..args_in(dir.path())
        };

        run(args, &Printer::plain()).unwrap();

        let img = image::open(dir.path().join("out.png")).unwrap().to_rgb8();
        assert_eq!(img.width(), 16);
        assert_eq!(img.height(), 12);
        // Top-left corner is background
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255]);
    }

    #[test]
    fn test_render_scene_file_with_filter() {
        let dir = tempdir().unwrap();
        let scene_path = dir.path().join("dot.scene.yaml");
        fs::write(
            &scene_path,
            r##"
background: "#000000"
window: [0, 2, 0, 2]
shapes:
  - kind: circle
    center: [1, 1]
    radius: 0.6
    color: "#FFFFFF"
"##,
        )
        .unwrap();

        let args = RenderArgs {
            file: Some(scene_path),
            resolution: Some(vec![8, 8]),
            filter: Some("hat".to_string()),
            samples: Some(8),
            seed: Some(3),
            ..args_in(dir.path())
        };
        run(args, &Printer::plain()).unwrap();

        let img = image::open(dir.path().join("out.png")).unwrap().to_rgb8();
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
        // Pixel just above-left of centre lies wholly inside the circle
        assert_eq!(img.get_pixel(3, 3).0, [255, 255, 255]);
    }

    #[test]
    fn test_unknown_filter_fails_before_output() {
        let dir = tempdir().unwrap();
        let args = RenderArgs {
            filter: Some("lanczos".to_string()),
            resolution: Some(vec![2, 2]),
            ..args_in(dir.path())
        };

        let err = run(args, &Printer::plain()).unwrap_err();
        assert!(matches!(err, RasterError::InvalidArgument { .. }));
        assert!(!dir.path().join("out.png").exists());
    }

    #[test]
    fn test_unknown_scene() {
        let dir = tempdir().unwrap();
        let args = RenderArgs {
            scene: Some("teapot".to_string()),
            ..args_in(dir.path())
        };
        let err = run(args, &Printer::plain()).unwrap_err();
        assert!(err.to_string().contains("teapot"));
    }

    #[test]
    fn test_cli_overrides_manifest() {
        let mut manifest = Manifest {
            filter: Some("box".to_string()),
            samples: Some(4),
            ..Default::default()
        };
        let args = RenderArgs {
            filter: Some("gaussian".to_string()),
            window: Some(vec![-1.0, 1.0, -1.0, 1.0]),
            rotate: Some(-30.0),
            ..Default::default()
        };
        apply_overrides(&mut manifest, args).unwrap();

        let settings = manifest.render_settings(None).unwrap();
        assert_eq!(settings.filter, FilterKind::Gaussian);
        assert_eq!(settings.samples, 4);
        assert_eq!(settings.window, Window::new(-1.0, 1.0, -1.0, 1.0));
        assert_eq!(settings.rotation, -30.0);
    }

    #[test]
    fn test_scene_flag_replaces_manifest_file() {
        let mut manifest = Manifest {
            scene_file: Some(PathBuf::from("missing.scene.yaml")),
            ..Default::default()
        };
        let args = RenderArgs {
            scene: Some("mandelbrot".to_string()),
            ..Default::default()
        };
        apply_overrides(&mut manifest, args).unwrap();

        let (scene, window) = load_scene(&manifest).unwrap();
        assert_eq!(scene.name, "mandelbrot");
        assert_eq!(window, Some(Window::new(-2.5, 1.0, -1.25, 1.25)));
    }
}
