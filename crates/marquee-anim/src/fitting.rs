//! Font fit state shared by both effects.

use marquee_core::Dimensions;
use marquee_text::{
    FitConfig, FitResult, FontDescriptor, FontSize, TextMeasurer, TextResult, solve_fit,
};

use crate::error::{AnimationError, AnimationResult};

/// Checks shared by both effect configs.
pub(crate) fn validate_common(
    base_font_size: FontSize,
    min_screen_padding: f32,
    duration_s: f32,
    start_delay_s: f32,
) -> AnimationResult<()> {
    if !base_font_size.value.is_finite() || base_font_size.value <= 0.0 {
        return Err(AnimationError::InvalidConfig(format!(
            "base font size {} is not positive",
            base_font_size
        )));
    }
    if !(0.0..100.0).contains(&min_screen_padding) {
        return Err(AnimationError::InvalidConfig(format!(
            "minimum screen padding {} is outside [0, 100)",
            min_screen_padding
        )));
    }
    if !duration_s.is_finite() || duration_s < 0.0 {
        return Err(AnimationError::InvalidConfig(format!(
            "duration {}s is negative",
            duration_s
        )));
    }
    if !start_delay_s.is_finite() || start_delay_s < 0.0 {
        return Err(AnimationError::InvalidConfig(format!(
            "start delay {}s is negative",
            start_delay_s
        )));
    }
    Ok(())
}

/// A text whose font size tracks the viewport.
///
/// Every refit solves from the base font again, so the result only depends on
/// the current viewport, never on earlier fits. A new fit is proposed first and
/// committed by the owner once everything derived from it has been applied.
#[derive(Debug, Clone)]
pub(crate) struct FittedText {
    config: FitConfig,
    fit: FitResult,
}

impl FittedText {
    pub(crate) fn new<M: TextMeasurer + ?Sized>(
        measurer: &M,
        viewport: Dimensions,
        config: FitConfig,
    ) -> TextResult<Self> {
        let fit = solve_fit(measurer, viewport, &config)?;
        Ok(Self { config, fit })
    }

    /// Solve again for `viewport`; `None` when the size would not change.
    pub(crate) fn propose<M: TextMeasurer + ?Sized>(
        &self,
        measurer: &M,
        viewport: Dimensions,
    ) -> TextResult<Option<FitResult>> {
        let fit = solve_fit(measurer, viewport, &self.config)?;
        Ok((fit.size != self.fit.size).then_some(fit))
    }

    pub(crate) fn commit(&mut self, fit: FitResult) {
        self.fit = fit;
    }

    pub(crate) fn text(&self) -> &str {
        &self.config.text
    }

    pub(crate) fn fit(&self) -> FitResult {
        self.fit
    }

    /// The base font at the fitted size.
    pub(crate) fn font(&self) -> FontDescriptor {
        self.font_for(self.fit)
    }

    /// The base font at a proposed size.
    pub(crate) fn font_for(&self, fit: FitResult) -> FontDescriptor {
        fit.apply_to(&self.config.base_font)
    }
}
