//! Opinionated statistical plotting with SVG output.
//!
//! [`plotting`] is the drawing engine (figures, axes, plot elements, styles),
//! [`plots`] holds the high-level helpers built on it, and [`stats`] the
//! estimators they share. [`config`] reads JSON plot jobs for the `plotkit`
//! binary.

pub mod annotation;
pub mod config;
pub mod frame;
pub mod layout;
pub mod plots;
pub mod plotting;
pub mod stats;
