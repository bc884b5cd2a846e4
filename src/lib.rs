//! Easeplot - A terminal visualizer for animation easing curves.
//!
//! Easeplot either animates a label with the selected curve or plots the
//! curve's value over time onto a retained pixel raster, one sample per
//! pixel column.
//!
//! # Features
//!
//! - Nine classic easing curves
//! - Graph surface with logical-to-pixel mapping and dashed reference lines
//! - Batched, timer-driven sampling that can be cancelled at any point
//! - Headless text rendering for scripting
//! - Gruvbox color themes
//! - Clipboard export of curve samples
//!
//! # Example
//!
//! ```
//! use easeplot::curve::Curve;
//! use easeplot::driver::SamplingDriver;
//! use easeplot::config::SamplerConfig;
//! use easeplot::graph::GraphSurface;
//!
//! let mut surface = GraphSurface::new(100, 150)?;
//! let mut driver = SamplingDriver::new(&SamplerConfig::default());
//! driver.start(Curve::Bounce, &mut surface)?;
//! let plotted = driver.run_to_completion(&mut surface);
//! assert_eq!(plotted, 101);
//! # Ok::<(), easeplot::EaseplotError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod curve;
pub mod driver;
pub mod error;
pub mod graph;
pub mod show;
pub mod timer;
pub mod ui;
pub mod util;

pub use error::{EaseplotError, Result};
