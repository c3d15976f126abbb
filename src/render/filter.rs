//! Reconstruction filters for stochastic anti-aliasing.
//!
//! Kernels take a sample's offset from the pixel centre in pixel fractions
//! (nominal support [-0.5, 0.5] on each axis) and return its weight.

use std::fmt;
use std::str::FromStr;

use crate::error::{RasterError, Result};

/// Default standard deviation of the gaussian kernel, in pixels.
pub const DEFAULT_SD: f64 = 0.25;

/// Filter selection by name, including "no anti-aliasing".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterKind {
    #[default]
    None,
    Box,
    Hat,
    Gaussian,
}

impl FilterKind {
    pub const NAMES: [&'static str; 4] = ["none", "box", "hat", "gaussian"];

    pub fn name(self) -> &'static str {
        match self {
            FilterKind::None => "none",
            FilterKind::Box => "box",
            FilterKind::Hat => "hat",
            FilterKind::Gaussian => "gaussian",
        }
    }

    /// Resolve to a kernel, or `None` when anti-aliasing is off.
    pub fn kernel(self, sd: f64) -> Result<Option<Filter>> {
        match self {
            FilterKind::None => Ok(None),
            FilterKind::Box => Ok(Some(Filter::Box)),
            FilterKind::Hat => Ok(Some(Filter::Hat)),
            FilterKind::Gaussian => Filter::gaussian(sd).map(Some),
        }
    }
}

impl FromStr for FilterKind {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(FilterKind::None),
            "box" => Ok(FilterKind::Box),
            "hat" => Ok(FilterKind::Hat),
            "gaussian" => Ok(FilterKind::Gaussian),
            _ => Err(RasterError::InvalidArgument {
                message: format!("Unknown filter type: {}", s),
                help: Some(format!("Expected one of: {}", Self::NAMES.join(", "))),
            }),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A weighting kernel over sub-pixel offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    /// Uniform weight.
    Box,

    /// Pyramid of height 3 with unit volume over the pixel.
    Hat,

    /// Gaussian with a polynomial-fit normalisation.
    Gaussian { sd: f64 },
}

impl Filter {
    /// Gaussian kernel; `sd` must be finite and positive.
    pub fn gaussian(sd: f64) -> Result<Self> {
        if !(sd.is_finite() && sd > 0.0) {
            return Err(RasterError::InvalidArgument {
                message: format!("Gaussian standard deviation must be positive, got {}", sd),
                help: Some(format!("The default is {}", DEFAULT_SD)),
            });
        }
        Ok(Filter::Gaussian { sd })
    }

    /// Weight of a sample at offset `(x, y)` pixel fractions from the centre.
    pub fn weight(&self, x: f64, y: f64) -> f64 {
        match *self {
            Filter::Box => 1.0,
            // Can go negative outside the nominal support
            Filter::Hat => 3.0 - 6.0 * x.abs().max(y.abs()),
            Filter::Gaussian { sd } => {
                let value = (-(x * x + y * y) / (2.0 * sd * sd)).exp();
                value / gaussian_integral(sd)
            }
        }
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            Filter::Box => FilterKind::Box,
            Filter::Hat => FilterKind::Hat,
            Filter::Gaussian { .. } => FilterKind::Gaussian,
        }
    }
}

/// Approximate integral of the unnormalised gaussian over [-0.5, 0.5]^2.
///
/// A polynomial fit rather than the exact value; existing renders depend
/// on these coefficients.
fn gaussian_integral(sd: f64) -> f64 {
    1.008 * sd + 1.164 * sd * sd
}
