//! Styling: colors, colormaps, line/fill/marker/text styles, themes and the
//! explicit color cycle.

pub mod color;
pub mod colormap;
pub mod context;
pub mod fill_style;
pub mod line_style;
pub mod marker;
pub mod text_style;
pub mod theme;

pub use color::Color;
pub use colormap::{finite_range, Colormap, ColormapKind, Norm, Normalize, TwoSlopeNorm};
pub use context::StyleContext;
pub use fill_style::FillStyle;
pub use line_style::{DashPattern, LineStyle};
pub use marker::{Marker, MarkerStyle};
pub use text_style::{escape_xml, DominantBaseline, FontWeight, TextAnchor, TextStyle};
pub use theme::{Theme, ThemeConfig};
