//! Least-occupied corner selection for annotation placement.

use std::fmt;

use crate::plotting::element::Bounds;
use crate::plotting::style::{DominantBaseline, TextAnchor};

/// One of the four corners of a plotting region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Distance of a corner annotation from the axes edges, in axes fraction.
const CORNER_INSET: f64 = 0.05;

impl Corner {
    /// Tie-break order: among equally empty corners the first listed wins.
    pub const PREFERENCE: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    pub fn is_left(&self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }

    pub fn is_top(&self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }

    /// Annotation anchor point in axes-fraction coordinates.
    pub fn anchor(&self) -> (f64, f64) {
        let x = if self.is_left() {
            CORNER_INSET
        } else {
            1.0 - CORNER_INSET
        };
        let y = if self.is_top() {
            1.0 - CORNER_INSET
        } else {
            CORNER_INSET
        };
        (x, y)
    }

    /// Horizontal alignment keeping text inside the axes.
    pub fn text_anchor(&self) -> TextAnchor {
        if self.is_left() {
            TextAnchor::Start
        } else {
            TextAnchor::End
        }
    }

    /// Vertical alignment keeping text inside the axes.
    pub fn baseline(&self) -> DominantBaseline {
        if self.is_top() {
            DominantBaseline::Hanging
        } else {
            DominantBaseline::Auto
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomLeft => "bottom-left",
            Corner::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of points falling in each quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuadrantCounts {
    pub top_left: usize,
    pub top_right: usize,
    pub bottom_left: usize,
    pub bottom_right: usize,
}

impl QuadrantCounts {
    pub fn get(&self, corner: Corner) -> usize {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomLeft => self.bottom_left,
            Corner::BottomRight => self.bottom_right,
        }
    }

    pub fn total(&self) -> usize {
        self.top_left + self.top_right + self.bottom_left + self.bottom_right
    }

    /// The emptiest corner, ties resolved by [`Corner::PREFERENCE`].
    pub fn emptiest(&self) -> Corner {
        let mut best = Corner::PREFERENCE[0];
        for corner in Corner::PREFERENCE.into_iter().skip(1) {
            if self.get(corner) < self.get(best) {
                best = corner;
            }
        }
        best
    }
}

/// Count points per quadrant of `bounds`.
///
/// A point with `x <= mid_x` is left, otherwise right; `y <= mid_y` is
/// bottom, otherwise top. Extra elements of the longer slice are ignored,
/// as are pairs with a non-finite coordinate, which are never drawn.
/// Degenerate bounds are accepted and simply skew the counts.
pub fn quadrant_counts(x: &[f64], y: &[f64], bounds: &Bounds) -> QuadrantCounts {
    let (mid_x, mid_y) = bounds.center();
    let mut counts = QuadrantCounts::default();
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        if !(xi.is_finite() && yi.is_finite()) {
            continue;
        }
        match (xi <= mid_x, yi <= mid_y) {
            (true, true) => counts.bottom_left += 1,
            (true, false) => counts.top_left += 1,
            (false, true) => counts.bottom_right += 1,
            (false, false) => counts.top_right += 1,
        }
    }
    counts
}

/// The corner of `bounds` with the fewest points.
pub fn best_corner(x: &[f64], y: &[f64], bounds: &Bounds) -> Corner {
    quadrant_counts(x, y, bounds).emptiest()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_scenario_prefers_top_left() {
        let x = [1.0, 2.0, 8.0, 9.0];
        let y = [1.0, 2.0, 8.0, 9.0];
        let bounds = Bounds::new(0.0, 10.0, 0.0, 10.0);
        let counts = quadrant_counts(&x, &y, &bounds);
        assert_eq!(
            counts,
            QuadrantCounts {
                top_left: 0,
                top_right: 2,
                bottom_left: 2,
                bottom_right: 0,
            }
        );
        assert_eq!(best_corner(&x, &y, &bounds), Corner::TopLeft);
    }

    #[test]
    fn test_midpoint_ties_go_left_and_bottom() {
        let bounds = Bounds::new(0.0, 10.0, 0.0, 10.0);
        let counts = quadrant_counts(&[5.0], &[5.0], &bounds);
        assert_eq!(counts.bottom_left, 1);
        assert_eq!(counts.total(), 1);
    }

    #[test]
    fn test_counts_sum_to_zipped_length() {
        let bounds = Bounds::new(-1.0, 1.0, -1.0, 1.0);
        let x: Vec<f64> = (0..37).map(|i| ((i * 7919) % 200) as f64 / 100.0 - 1.0).collect();
        let y: Vec<f64> = (0..40).map(|i| ((i * 104729) % 200) as f64 / 100.0 - 1.0).collect();
        let counts = quadrant_counts(&x, &y, &bounds);
        assert_eq!(counts.total(), 37);
        assert!(Corner::PREFERENCE.contains(&best_corner(&x, &y, &bounds)));
    }

    #[test]
    fn test_non_finite_pairs_skipped() {
        let bounds = Bounds::new(0.0, 10.0, 0.0, 10.0);
        let x = [1.0, f64::NAN, 8.0, 2.0, f64::INFINITY];
        let y = [1.0, 9.0, f64::NAN, 2.0, 9.0];
        let counts = quadrant_counts(&x, &y, &bounds);
        assert_eq!(counts.bottom_left, 2);
        assert_eq!(counts.total(), 2);
        assert_eq!(best_corner(&x, &y, &bounds), Corner::TopLeft);
    }

    #[test]
    fn test_picks_unique_minimum() {
        let bounds = Bounds::new(0.0, 4.0, 0.0, 4.0);
        // Three points everywhere except one in the bottom-right.
        let x = [1.0, 1.0, 1.0, 3.0, 3.0, 3.0, 1.0, 1.0, 1.0, 3.0];
        let y = [3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 1.0, 1.0, 1.0, 1.0];
        assert_eq!(best_corner(&x, &y, &bounds), Corner::BottomRight);
    }

    #[test]
    fn test_degenerate_bounds_still_answer() {
        let bounds = Bounds::new(2.0, 2.0, 2.0, 2.0);
        let corner = best_corner(&[1.0, 3.0], &[1.0, 3.0], &bounds);
        assert_eq!(corner, Corner::TopLeft);
    }

    #[test]
    fn test_corner_anchor_and_alignment() {
        let (x, y) = Corner::TopLeft.anchor();
        assert!((x - 0.05).abs() < 1e-12 && (y - 0.95).abs() < 1e-12);
        assert_eq!(Corner::BottomRight.text_anchor(), TextAnchor::End);
        assert_eq!(Corner::TopRight.baseline(), DominantBaseline::Hanging);
    }
}
