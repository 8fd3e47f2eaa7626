//! SVG plotting engine with a matplotlib-like API: figures, axes, plot
//! elements, styles and themes.

pub mod axes;
pub mod backend;
pub mod data;
pub mod element;
pub mod error;
pub mod figure;
pub mod plot;
pub mod scale;
pub mod style;

pub use axes::{Axes, Overlay, Spines};
pub use data::IntoPlotData;
pub use element::{Bounds, Colorbar, LegendPosition};
pub use error::{PlotError, PlotResult};
pub use figure::{cm_to_inch, Figure};
pub use plot::{
    BarPlot, ErrorBarPlot, FillBetween, ImagePlot, LinePlot, Plot, Polygon, ScatterPlot,
};
pub use scale::{LinearScale, Scale};
pub use style::{
    Color, Colormap, DashPattern, FillStyle, LineStyle, Marker, MarkerStyle, Normalize,
    StyleContext, TextStyle, Theme, ThemeConfig, TwoSlopeNorm,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::plotting::axes::Axes;
    pub use crate::plotting::data::IntoPlotData;
    pub use crate::plotting::element::Bounds;
    pub use crate::plotting::error::{PlotError, PlotResult};
    pub use crate::plotting::figure::Figure;
    pub use crate::plotting::plot::{LinePlot, ScatterPlot};
    pub use crate::plotting::style::{
        Color, DashPattern, FillStyle, LineStyle, Marker, MarkerStyle, StyleContext, TextStyle,
        Theme,
    };
}
