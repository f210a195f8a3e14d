//! Font-fit solver.
//!
//! Finds the largest integer font size (in the base font's unit) at which a
//! text still fits inside the viewport once the screen padding is removed.
//! The solver only ever shrinks: text that already fits keeps its
//! author-specified size.
//!
//! The search is a linear walk upward from one unit and stops at the first
//! size that no longer fits, returning the size before it. It always restarts
//! from one unit, so repeated calls with the same inputs return the same size
//! no matter how often a host re-solves on resize.

use marquee_core::Dimensions;
use marquee_core::profiling::profile_function;

use crate::error::TextResult;
use crate::font::{FontDescriptor, FontSize};
use crate::metrics::TextMeasurer;

/// Smallest size the solver hands back, in the base font's unit.
pub const MIN_FIT_STEP: f32 = 1.0;

/// Upper bound on measurements per solve, whatever the base size says.
pub const MAX_FIT_ITERATIONS: u32 = 4096;

/// Immutable input to [`solve_fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct FitConfig {
    pub text: String,
    pub base_font: FontDescriptor,
    /// Percentage of the viewport kept clear, in `[0, 100)`.
    pub min_screen_padding_percent: f32,
}

impl FitConfig {
    pub fn new(
        text: impl Into<String>,
        base_font: FontDescriptor,
        min_screen_padding_percent: f32,
    ) -> Self {
        Self {
            text: text.into(),
            base_font,
            min_screen_padding_percent,
        }
    }

    /// Viewport area left for the text once padding is removed.
    pub fn available_area(&self, viewport: Dimensions) -> Dimensions {
        viewport.without_padding(self.min_screen_padding_percent)
    }
}

/// How the fitted size came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitOutcome {
    /// The base font already fit and was returned as is.
    Unchanged,
    /// The text was shrunk to the largest fitting step.
    Shrunk,
    /// Nothing fits (empty area or text too wide even at the floor); the
    /// floor size was returned.
    Degenerate,
}

/// Result of a fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitResult {
    pub size: FontSize,
    pub outcome: FitOutcome,
}

impl FitResult {
    /// Merge the fitted size back into a full descriptor.
    pub fn apply_to(&self, base: &FontDescriptor) -> FontDescriptor {
        base.with_size(self.size)
    }
}

/// Floor used when nothing fits; never larger than the base size.
fn floor_size(base: FontSize) -> FontSize {
    base.with_value(MIN_FIT_STEP.min(base.value))
}

/// Compute the fitted font size for `config` inside `viewport`.
///
/// ```
/// use marquee_core::Dimensions;
/// use marquee_text::{FitConfig, FitOutcome, FontDescriptor, FontSize, HeuristicMeasurer, solve_fit};
///
/// let measurer = HeuristicMeasurer::new();
/// let font = FontDescriptor::new("bold", FontSize::rem(8.0), "serif");
/// let config = FitConfig::new("Jonas", font, 10.0);
///
/// let roomy = solve_fit(&measurer, Dimensions::new(1920.0, 1080.0), &config).unwrap();
/// assert_eq!(roomy.outcome, FitOutcome::Unchanged);
///
/// let phone = solve_fit(&measurer, Dimensions::new(360.0, 640.0), &config).unwrap();
/// assert_eq!(phone.outcome, FitOutcome::Shrunk);
/// assert!(phone.size.value < 8.0);
/// ```
pub fn solve_fit<M: TextMeasurer + ?Sized>(
    measurer: &M,
    viewport: Dimensions,
    config: &FitConfig,
) -> TextResult<FitResult> {
    profile_function!();

    let base = config.base_font.size;
    let available = config.available_area(viewport);
    if available.is_degenerate() {
        tracing::warn!(
            ?viewport,
            padding = config.min_screen_padding_percent,
            "No area left after padding, using floor font size"
        );
        return Ok(FitResult {
            size: floor_size(base),
            outcome: FitOutcome::Degenerate,
        });
    }

    let measured = measurer.measure(&config.text, &config.base_font)?.fit_box();
    if measured.fits_within(available) {
        tracing::trace!(size = %base, ?measured, ?available, "Base font fits");
        return Ok(FitResult {
            size: base,
            outcome: FitOutcome::Unchanged,
        });
    }

    // Sizes at or above the base value are never candidates.
    let max_step = (base.value.ceil() as u32)
        .saturating_sub(1)
        .min(MAX_FIT_ITERATIONS);

    let mut last_fitting = None;
    for step in 1..=max_step {
        let candidate = base.with_value(step as f32);
        let candidate_font = config.base_font.with_size(candidate);
        let extent = measurer.measure(&config.text, &candidate_font)?.fit_box();
        tracing::trace!(size = %candidate, ?extent, "Trying font size");
        if !extent.fits_within(available) {
            break;
        }
        last_fitting = Some(candidate);
    }

    match last_fitting {
        Some(size) => {
            tracing::debug!(from = %base, to = %size, ?available, "Shrunk font to fit");
            Ok(FitResult {
                size,
                outcome: FitOutcome::Shrunk,
            })
        }
        None => {
            tracing::warn!(
                text = %config.text,
                ?available,
                "Text does not fit at any size, using floor font size"
            );
            Ok(FitResult {
                size: floor_size(base),
                outcome: FitOutcome::Degenerate,
            })
        }
    }
}
