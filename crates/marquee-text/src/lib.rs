//! Marquee Text - measurement and font fitting
//!
//! This crate answers one question for the text effects: how large may a word
//! be drawn so that it still fits the viewport?
//!
//! - [`FontDescriptor`] describes a font and converts to and from the
//!   `"<weight> <size> <family>"` string form.
//! - [`TextMeasurer`] reports width, glyph height and font height of a text.
//!   [`CosmicMeasurer`] shapes with cosmic-text; [`HeuristicMeasurer`] is a
//!   deterministic stand-in for headless hosts and tests.
//! - [`solve_fit`] finds the largest integer size that fits the viewport
//!   after padding.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use marquee_core::Dimensions;
//! use marquee_text::{CosmicMeasurer, FitConfig, solve_fit};
//!
//! let measurer = CosmicMeasurer::with_system_fonts().unwrap();
//! let config = FitConfig::new("Jonas", "bold 8rem serif".parse().unwrap(), 10.0);
//! let fit = solve_fit(&measurer, Dimensions::new(390.0, 844.0), &config).unwrap();
//! println!("font-size: {}", fit.size);
//! ```

#[cfg(feature = "cosmic")]
pub mod cosmic;
pub mod error;
pub mod fit;
pub mod font;
pub mod metrics;

#[cfg(feature = "cosmic")]
pub use cosmic::{CosmicMeasurer, FontDatabase};
pub use error::{TextError, TextResult};
pub use fit::{FitConfig, FitOutcome, FitResult, MAX_FIT_ITERATIONS, MIN_FIT_STEP, solve_fit};
pub use font::{DEFAULT_ROOT_PX, FontDescriptor, FontSize, FontUnit, numeric_weight};
pub use metrics::{HeuristicMeasurer, TextMeasurement, TextMeasurer};
