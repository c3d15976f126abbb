//! Project manifest (raster.yaml) parsing.
//!
//! The manifest holds default render options so repeated renders don't need
//! long command lines. Every field is optional; CLI flags override it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RasterError, Result};
use crate::render::{FilterKind, RenderSettings, DEFAULT_SD};
use crate::scene::BuiltinScenes;
use crate::types::Window;

/// Render defaults loaded from raster.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Built-in scene name.
    pub scene: Option<String>,

    /// Scene file path; takes precedence over `scene`.
    pub scene_file: Option<PathBuf>,

    /// World-space window as [xmin, xmax, ymin, ymax].
    pub window: Option<Window>,

    /// Output size as [width, height].
    pub resolution: Option<[u32; 2]>,

    /// Anti-aliasing filter name (none, box, hat, gaussian).
    pub filter: Option<String>,

    /// Samples per pixel when anti-aliasing.
    pub samples: Option<u32>,

    /// Gaussian standard deviation.
    pub sd: Option<f64>,

    /// Content rotation in degrees, counter-clockwise.
    pub rotation: Option<f64>,

    /// Jitter seed.
    pub seed: Option<u64>,

    /// Output PNG path.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_output() -> PathBuf {
    PathBuf::from("output.png")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            scene: None,
            scene_file: None,
            window: None,
            resolution: None,
            filter: None,
            samples: None,
            sd: None,
            rotation: None,
            seed: None,
            output: default_output(),
        }
    }
}

impl Manifest {
    /// Conventional manifest file name.
    pub const FILE_NAME: &'static str = "raster.yaml";

    /// Load manifest from a raster.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RasterError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `path` if given, else `./raster.yaml` if present, else defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let local = Path::new(Self::FILE_NAME);
                if local.exists() {
                    Self::load(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| RasterError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check raster.yaml syntax".to_string()),
        })
    }

    /// Get the effective built-in scene name.
    pub fn effective_scene(&self) -> &str {
        self.scene.as_deref().unwrap_or(BuiltinScenes::DEFAULT)
    }

    /// Get the effective filter, failing on unknown names.
    pub fn effective_filter(&self) -> Result<FilterKind> {
        self.filter
            .as_deref()
            .map_or(Ok(FilterKind::None), str::parse)
    }

    /// Resolve render settings. `scene_window` frames the scene when the
    /// manifest has no window of its own.
    pub fn render_settings(&self, scene_window: Option<Window>) -> Result<RenderSettings> {
        let defaults = RenderSettings::default();
        let [width, height] = self.resolution.unwrap_or([defaults.width, defaults.height]);

        let settings = RenderSettings {
            window: self.window.or(scene_window).unwrap_or(defaults.window),
            width,
            height,
            filter: self.effective_filter()?,
            samples: self.samples.unwrap_or(defaults.samples),
            sd: self.sd.unwrap_or(DEFAULT_SD),
            rotation: self.rotation.unwrap_or(0.0),
            seed: self.seed,
        };
        settings.validate()?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_minimal_manifest() {
        let yaml = "output: build/out.png";
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.output, PathBuf::from("build/out.png"));
        assert!(manifest.scene.is_none());
        assert!(manifest.window.is_none());
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
scene: mandelbrot
window: [-2.5, 1.0, -1.25, 1.25]
resolution: [320, 240]
filter: gaussian
samples: 16
sd: 0.4
rotation: 15
seed: 7
output: renders/fractal.png
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.effective_scene(), "mandelbrot");
        assert_eq!(manifest.window, Some(Window::new(-2.5, 1.0, -1.25, 1.25)));
        assert_eq!(manifest.resolution, Some([320, 240]));
        assert_eq!(manifest.effective_filter().unwrap(), FilterKind::Gaussian);
        assert_eq!(manifest.output, PathBuf::from("renders/fractal.png"));

        let settings = manifest.render_settings(None).unwrap();
        assert_eq!(settings.width, 320);
        assert_eq!(settings.height, 240);
        assert_eq!(settings.samples, 16);
        assert_eq!(settings.sd, 0.4);
        assert_eq!(settings.rotation, 15.0);
        assert_eq!(settings.seed, Some(7));
    }

    #[test]
    fn test_default_manifest() {
        let manifest = Manifest::default();

        assert_eq!(manifest.effective_scene(), "shapes");
        assert_eq!(manifest.output, PathBuf::from("output.png"));

        let settings = manifest.render_settings(None).unwrap();
        assert_eq!(settings, RenderSettings::default());
        assert_eq!(settings.window, Window::new(0.0, 8.0, 0.0, 6.0));
        assert_eq!((settings.width, settings.height), (800, 600));
        assert_eq!(settings.filter, FilterKind::None);
        assert_eq!(settings.samples, 10);
        assert_eq!(settings.sd, 0.25);
    }

    #[test]
    fn test_window_precedence() {
        let scene_window = Window::new(-1.0, 1.0, -1.0, 1.0);

        let manifest = Manifest::default();
        let settings = manifest.render_settings(Some(scene_window)).unwrap();
        assert_eq!(settings.window, scene_window);

        let manifest = Manifest {
            window: Some(Window::new(0.0, 2.0, 0.0, 2.0)),
            ..Default::default()
        };
        let settings = manifest.render_settings(Some(scene_window)).unwrap();
        assert_eq!(settings.window, Window::new(0.0, 2.0, 0.0, 2.0));
    }

    #[test]
    fn test_unknown_filter_is_invalid_argument() {
        let manifest = Manifest::parse("filter: sinc").unwrap();
        assert!(matches!(
            manifest.render_settings(None),
            Err(RasterError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = Manifest::parse("").unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_parse_invalid_manifest() {
        assert!(matches!(
            Manifest::parse("resolution: wide"),
            Err(RasterError::Parse { .. })
        ));
    }

    #[test]
    fn test_discover_explicit_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.yaml");
        std::fs::write(&path, "scene: implicit\n").unwrap();

        let manifest = Manifest::discover(Some(&path)).unwrap();
        assert_eq!(manifest.effective_scene(), "implicit");
    }
}
