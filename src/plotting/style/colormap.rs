//! Colormaps and value normalization.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::color::Color;
use crate::plotting::error::{PlotError, PlotResult};

/// Named colormap families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColormapKind {
    Viridis,
    Inferno,
    Magma,
    Plasma,
    Coolwarm,
    Greys,
}

const NAMES: &[&str] = &["viridis", "inferno", "magma", "plasma", "coolwarm", "greys"];

// Control points sampled from the matplotlib tables at t = 0, 0.125, ..., 1.
const VIRIDIS: [(u8, u8, u8); 9] = [
    (68, 1, 84),
    (71, 44, 122),
    (59, 81, 139),
    (44, 113, 142),
    (33, 144, 141),
    (39, 173, 129),
    (92, 200, 99),
    (170, 220, 50),
    (253, 231, 37),
];
const INFERNO: [(u8, u8, u8); 9] = [
    (0, 0, 4),
    (31, 12, 72),
    (85, 15, 109),
    (136, 34, 106),
    (186, 54, 85),
    (227, 89, 51),
    (249, 140, 10),
    (249, 201, 50),
    (252, 255, 164),
];
const MAGMA: [(u8, u8, u8); 9] = [
    (0, 0, 4),
    (28, 16, 68),
    (79, 18, 123),
    (129, 37, 129),
    (181, 54, 122),
    (229, 80, 100),
    (251, 135, 97),
    (254, 194, 135),
    (252, 253, 191),
];
const PLASMA: [(u8, u8, u8); 9] = [
    (13, 8, 135),
    (84, 2, 163),
    (139, 10, 165),
    (185, 50, 137),
    (219, 92, 104),
    (244, 136, 73),
    (254, 188, 43),
    (252, 222, 37),
    (240, 249, 33),
];
const COOLWARM: [(u8, u8, u8); 9] = [
    (59, 76, 192),
    (98, 130, 234),
    (141, 176, 254),
    (184, 208, 249),
    (221, 221, 221),
    (245, 196, 173),
    (244, 154, 123),
    (222, 96, 77),
    (180, 4, 38),
];
const GREYS: [(u8, u8, u8); 2] = [(255, 255, 255), (0, 0, 0)];

/// A colormap, optionally reversed (matplotlib's `_r` suffix).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Colormap {
    pub kind: ColormapKind,
    pub reversed: bool,
}

impl Colormap {
    pub const VIRIDIS: Colormap = Colormap::new(ColormapKind::Viridis);
    pub const COOLWARM: Colormap = Colormap::new(ColormapKind::Coolwarm);

    pub const fn new(kind: ColormapKind) -> Self {
        Colormap {
            kind,
            reversed: false,
        }
    }

    /// The same map traversed in the opposite direction.
    pub fn reversed(mut self) -> Self {
        self.reversed = !self.reversed;
        self
    }

    fn stops(&self) -> &'static [(u8, u8, u8)] {
        match self.kind {
            ColormapKind::Viridis => &VIRIDIS,
            ColormapKind::Inferno => &INFERNO,
            ColormapKind::Magma => &MAGMA,
            ColormapKind::Plasma => &PLASMA,
            ColormapKind::Coolwarm => &COOLWARM,
            ColormapKind::Greys => &GREYS,
        }
    }

    /// Map a normalized value in [0, 1] to a color. Out-of-range values clamp.
    pub fn sample(&self, t: f64) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let t = if self.reversed { 1.0 - t } else { t };
        let stops = self.stops();
        let scaled = t * (stops.len() - 1) as f64;
        let lo = (scaled.floor() as usize).min(stops.len() - 2);
        let frac = scaled - lo as f64;
        Color::from(stops[lo]).lerp(&Color::from(stops[lo + 1]), frac)
    }

    /// Map a raw value through a norm.
    pub fn map(&self, value: f64, norm: &impl Norm) -> Color {
        self.sample(norm.normalize(value))
    }
}

impl Default for Colormap {
    fn default() -> Self {
        Colormap::VIRIDIS
    }
}

impl FromStr for Colormap {
    type Err = PlotError;

    fn from_str(s: &str) -> PlotResult<Self> {
        let lower = s.to_ascii_lowercase();
        let (base, reversed) = match lower.strip_suffix("_r") {
            Some(base) => (base, true),
            None => (lower.as_str(), false),
        };
        let kind = match base {
            "viridis" => ColormapKind::Viridis,
            "inferno" => ColormapKind::Inferno,
            "magma" => ColormapKind::Magma,
            "plasma" => ColormapKind::Plasma,
            "coolwarm" => ColormapKind::Coolwarm,
            "greys" | "grays" => ColormapKind::Greys,
            _ => return Err(PlotError::unknown_token("colormap", s, NAMES)),
        };
        Ok(Colormap { kind, reversed })
    }
}

impl TryFrom<String> for Colormap {
    type Error = PlotError;

    fn try_from(s: String) -> PlotResult<Self> {
        s.parse()
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = NAMES[self.kind as usize];
        if self.reversed {
            write!(f, "{}_r", name)
        } else {
            write!(f, "{}", name)
        }
    }
}

/// Maps data values into [0, 1].
pub trait Norm {
    fn normalize(&self, value: f64) -> f64;
}

/// Linear normalization between `vmin` and `vmax`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalize {
    pub vmin: f64,
    pub vmax: f64,
}

impl Normalize {
    pub fn new(vmin: f64, vmax: f64) -> Self {
        Normalize { vmin, vmax }
    }

    /// Normalization spanning the finite values of `data`.
    pub fn autoscale(data: &[f64]) -> Self {
        let (lo, hi) = finite_range(data).unwrap_or((0.0, 1.0));
        Normalize::new(lo, hi)
    }
}

impl Norm for Normalize {
    fn normalize(&self, value: f64) -> f64 {
        let range = self.vmax - self.vmin;
        if range == 0.0 {
            return 0.5;
        }
        (value - self.vmin) / range
    }
}

/// Piecewise-linear normalization with a fixed center mapped to 0.5.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoSlopeNorm {
    pub vmin: f64,
    pub vcenter: f64,
    pub vmax: f64,
}

impl TwoSlopeNorm {
    pub fn new(vmin: f64, vcenter: f64, vmax: f64) -> Self {
        TwoSlopeNorm {
            vmin,
            vcenter,
            vmax,
        }
    }
}

impl Norm for TwoSlopeNorm {
    fn normalize(&self, value: f64) -> f64 {
        if value < self.vcenter {
            let span = self.vcenter - self.vmin;
            if span <= 0.0 {
                return 0.0;
            }
            (0.5 * (value - self.vmin) / span).max(0.0)
        } else {
            let span = self.vmax - self.vcenter;
            if span <= 0.0 {
                return if value > self.vcenter { 1.0 } else { 0.5 };
            }
            (0.5 + 0.5 * (value - self.vcenter) / span).min(1.0)
        }
    }
}

/// Minimum and maximum of the finite values, if any.
pub fn finite_range(data: &[f64]) -> Option<(f64, f64)> {
    data.iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_reverse() {
        let cmap: Colormap = "viridis_r".parse().unwrap();
        assert!(cmap.reversed);
        assert_eq!(cmap.kind, ColormapKind::Viridis);
        assert_eq!(cmap.to_string(), "viridis_r");
        assert_eq!(cmap.sample(0.0), Colormap::VIRIDIS.sample(1.0));
    }

    #[test]
    fn test_unknown_colormap_rejected() {
        let err = "jet".parse::<Colormap>().unwrap_err();
        assert!(matches!(err, PlotError::InvalidArgument(_)));
    }

    #[test]
    fn test_sample_endpoints() {
        assert_eq!(Colormap::VIRIDIS.sample(0.0), Color::Rgb(68, 1, 84));
        assert_eq!(Colormap::VIRIDIS.sample(1.0), Color::Rgb(253, 231, 37));
        assert_eq!(Colormap::VIRIDIS.sample(7.0), Color::Rgb(253, 231, 37));
    }

    #[test]
    fn test_two_slope_norm() {
        let norm = TwoSlopeNorm::new(-2.0, 0.0, 8.0);
        assert_eq!(norm.normalize(-2.0), 0.0);
        assert_eq!(norm.normalize(0.0), 0.5);
        assert_eq!(norm.normalize(8.0), 1.0);
        assert!((norm.normalize(-1.0) - 0.25).abs() < 1e-12);
        assert!((norm.normalize(4.0) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_autoscale_ignores_nan() {
        let norm = Normalize::autoscale(&[f64::NAN, 2.0, 4.0]);
        assert_eq!(norm, Normalize::new(2.0, 4.0));
        assert_eq!(norm.normalize(3.0), 0.5);
    }
}
