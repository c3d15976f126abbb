//! Built-in scenes, selectable by name.

use serde::Serialize;

use crate::shapes::{
    Circle, ImplicitFunction, Mandelbrot, MandelbrotColored, Polynomial, Term, Triangle,
};
use crate::types::{Color, Window};

use super::{IterationPalette, Scene, SceneBuilder};

/// Catalogue entry for a built-in scene.
#[derive(Debug, Clone, Serialize)]
pub struct SceneInfo {
    pub name: &'static str,
    pub description: &'static str,
    /// Window that frames the scene when none is configured.
    pub window: Window,
}

const CATALOG: &[SceneInfo] = &[
    SceneInfo {
        name: "shapes",
        description: "Circles and a triangle on white",
        window: Window::new(0.0, 8.0, 0.0, 6.0),
    },
    SceneInfo {
        name: "implicit",
        description: "Quartic implicit curve in red on white",
        window: Window::new(-2.0, 2.0, -1.5, 1.5),
    },
    SceneInfo {
        name: "mandelbrot",
        description: "Mandelbrot set in white on black",
        window: Window::new(-2.5, 1.0, -1.25, 1.25),
    },
    SceneInfo {
        name: "mandelbrot-colored",
        description: "Mandelbrot escape times on a cycling palette",
        window: Window::new(-2.5, 1.0, -1.25, 1.25),
    },
];

/// Registry of built-in scenes.
pub struct BuiltinScenes;

impl BuiltinScenes {
    /// Name of the scene used when none is requested.
    pub const DEFAULT: &'static str = "shapes";

    /// All catalogue entries.
    pub fn catalog() -> &'static [SceneInfo] {
        CATALOG
    }

    /// Names of all built-in scenes.
    pub fn names() -> impl Iterator<Item = &'static str> {
        CATALOG.iter().map(|info| info.name)
    }

    /// Catalogue entry for a scene.
    pub fn info(name: &str) -> Option<&'static SceneInfo> {
        CATALOG.iter().find(|info| info.name == name)
    }

    /// Construct a built-in scene by name.
    pub fn get(name: &str) -> Option<Scene> {
        let scene = match name {
            "shapes" => Self::shapes(),
            "implicit" => Self::implicit(),
            "mandelbrot" => Self::mandelbrot(),
            "mandelbrot-colored" => Self::mandelbrot_colored(),
            _ => return None,
        };
        // Built-ins never mix layers and gradients
        scene.build().ok()
    }

    fn shapes() -> SceneBuilder {
        let mut builder = SceneBuilder::new("shapes");
        builder
            .background(Color::WHITE)
            .layer(
                Triangle::new((3.4, 1.6), (4.6, 1.6), (4.0, 2.4)),
                Color::RED,
            )
            .layer(Circle::new((4.0, 2.6), 1.6), Color::BLACK)
            .layer(Circle::new((2.4, 4.4), 0.9), Color::BLACK)
            .layer(Circle::new((5.6, 4.4), 0.9), Color::BLACK);
        builder
    }

    fn implicit() -> SceneBuilder {
        let poly = Polynomial::new(vec![
            Term::new(0.004, 0, 0),
            Term::new(0.110, 1, 0),
            Term::new(-0.177, 0, 1),
            Term::new(-0.174, 2, 0),
            Term::new(0.224, 1, 1),
            Term::new(-0.303, 0, 2),
            Term::new(-0.168, 3, 0),
            Term::new(0.327, 2, 1),
            Term::new(-0.087, 1, 2),
            Term::new(-0.013, 0, 3),
            Term::new(0.235, 4, 0),
            Term::new(-0.667, 3, 1),
            Term::new(0.745, 2, 2),
            Term::new(-0.029, 1, 3),
            Term::new(0.072, 0, 4),
        ]);

        let mut builder = SceneBuilder::new("implicit");
        builder
            .background(Color::WHITE)
            .layer(ImplicitFunction::polynomial(poly), Color::RED);
        builder
    }

    fn mandelbrot() -> SceneBuilder {
        let mut builder = SceneBuilder::new("mandelbrot");
        builder
            .background(Color::BLACK)
            .layer(Mandelbrot::new(200, 2.0), Color::WHITE);
        builder
    }

    fn mandelbrot_colored() -> SceneBuilder {
        let mut builder = SceneBuilder::new("mandelbrot-colored");
        builder
            .background(Color::new(0.1, 0.1, 0.2))
            .gradient(IterationPalette::new(MandelbrotColored::new(80)));
        builder
    }
}
