//! String tokens accepted by the annotation helpers.

use std::str::FromStr;

use super::corner::Corner;
use crate::plotting::error::{PlotError, PlotResult};

const POSITION_TOKENS: &[&str] = &["auto", "top-left", "top-right", "bottom-left", "bottom-right"];
const COORD_TOKENS: &[&str] = &["data", "axes"];

/// Where a corner annotation goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnnotationPosition {
    /// Least-occupied corner of the current view
    #[default]
    Auto,
    Fixed(Corner),
}

impl FromStr for AnnotationPosition {
    type Err = PlotError;

    fn from_str(s: &str) -> PlotResult<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        let position = match normalized.as_str() {
            "auto" => AnnotationPosition::Auto,
            "top-left" | "upper-left" => AnnotationPosition::Fixed(Corner::TopLeft),
            "top-right" | "upper-right" => AnnotationPosition::Fixed(Corner::TopRight),
            "bottom-left" | "lower-left" => AnnotationPosition::Fixed(Corner::BottomLeft),
            "bottom-right" | "lower-right" => AnnotationPosition::Fixed(Corner::BottomRight),
            _ => {
                return Err(PlotError::unknown_token(
                    "annotation position",
                    s,
                    POSITION_TOKENS,
                ))
            }
        };
        Ok(position)
    }
}

/// Coordinate system for overlay positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordSpace {
    /// Data coordinates of the axes
    #[default]
    Data,
    /// Axes fraction: (0, 0) bottom-left, (1, 1) top-right
    Axes,
}

impl FromStr for CoordSpace {
    type Err = PlotError;

    fn from_str(s: &str) -> PlotResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "data" => Ok(CoordSpace::Data),
            "axes" => Ok(CoordSpace::Axes),
            _ => Err(PlotError::unknown_token("coordinate space", s, COORD_TOKENS)),
        }
    }
}
