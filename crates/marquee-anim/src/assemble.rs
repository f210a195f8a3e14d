//! The text assemble effect.
//!
//! A word is drawn `part_count` times on top of itself. Each copy is clipped
//! to one cell of a square grid over the word's bounding box and flies in from
//! its own random rotation and depth, so the copies assemble into the word.
//! Once the animation has run, the copies are hidden and a single unclipped
//! "ghost" copy shows the final word.
//!
//! Lifecycle: [`AssembleAnimation::init`] leaves the effect `Initialized` with
//! all parts hidden and the ghost transparent (it still reserves layout
//! space). Everything fallible happens in [`AssembleAnimation::plan`], before
//! the surface is touched. [`play`](AssembleAnimation::play) moves to `Playing`;
//! [`update`](AssembleAnimation::update) moves to `Settled` once the start delay
//! and duration have elapsed.

use std::sync::Arc;

use marquee_core::profiling::{profile_function, profile_scope};
use marquee_core::{Dimensions, ElementId};
use marquee_surface::{Declaration, ElementSpec, Pose, StyleRule, Surface, Visibility};
use marquee_text::{FitConfig, FitResult, FontDescriptor, FontSize, TextError, TextMeasurer};
use rand::Rng;

use crate::context::EffectContext;
use crate::error::AnimationResult;
use crate::fitting::{FittedText, validate_common};
use crate::keyframes::{CellKeyframe, KeyframeRanges, generate_keyframes};
use crate::partition::{CellRegion, grid_side, partition_box};
use crate::timer::Deferred;
use crate::tween::{AnimationSystem, EasingFunction};

/// Configuration of the assemble effect.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembleConfig {
    pub text: String,
    pub color: String,
    pub base_font_size: FontSize,
    /// Percentage of the viewport kept clear, in `[0, 100)`.
    pub min_screen_padding: f32,
    /// Number of parts; must be a perfect square.
    pub part_count: u32,
    pub duration_s: f32,
    pub start_delay_s: f32,
    pub easing: EasingFunction,
    pub ranges: KeyframeRanges,
}

impl AssembleConfig {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: String::from("#ffffff"),
            base_font_size: FontSize::rem(8.0),
            min_screen_padding: 10.0,
            part_count: 49,
            duration_s: 10.0,
            start_delay_s: 1.0,
            easing: EasingFunction::EaseOut,
            ranges: KeyframeRanges::default(),
        }
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn base_font_size(mut self, size: FontSize) -> Self {
        self.base_font_size = size;
        self
    }

    pub fn min_screen_padding(mut self, percent: f32) -> Self {
        self.min_screen_padding = percent;
        self
    }

    pub fn part_count(mut self, part_count: u32) -> Self {
        self.part_count = part_count;
        self
    }

    pub fn duration(mut self, seconds: f32) -> Self {
        self.duration_s = seconds;
        self
    }

    pub fn start_delay(mut self, seconds: f32) -> Self {
        self.start_delay_s = seconds;
        self
    }

    pub fn easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    pub fn ranges(mut self, ranges: KeyframeRanges) -> Self {
        self.ranges = ranges;
        self
    }

    /// Start delay plus duration.
    pub fn total_duration(&self) -> f32 {
        self.start_delay_s + self.duration_s
    }

    pub fn validate(&self) -> AnimationResult<()> {
        grid_side(self.part_count)?;
        validate_common(
            self.base_font_size,
            self.min_screen_padding,
            self.duration_s,
            self.start_delay_s,
        )?;
        self.ranges.validate()
    }
}

/// Lifecycle state of the assemble effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssembleState {
    /// Parts hidden, ghost transparent.
    Initialized,
    /// Parts visible and flying in, ghost hidden.
    Playing,
    /// Parts hidden again, ghost visible.
    Settled,
}

/// The assemble effect bound to a surface.
pub struct AssembleAnimation {
    surface: Arc<dyn Surface>,
    measurer: Arc<dyn TextMeasurer>,
    config: AssembleConfig,
    scope: String,
    container: ElementId,
    ghost: ElementId,
    parts: Vec<ElementId>,
    fitted: FittedText,
    bounds: Dimensions,
    regions: Vec<CellRegion>,
    keyframes: Vec<CellKeyframe>,
    tweens: AnimationSystem,
    settle_timer: Deferred<()>,
    state: AssembleState,
}

/// A validated and measured assemble effect that has not touched the surface.
///
/// Produced by [`AssembleAnimation::plan`]; [`build`](AssemblePlan::build)
/// cannot fail, so hosts mounting several effects can plan them all first and
/// only build once every plan succeeded.
pub struct AssemblePlan {
    ctx: EffectContext,
    config: AssembleConfig,
    fitted: FittedText,
    bounds: Dimensions,
    regions: Vec<CellRegion>,
    keyframes: Vec<CellKeyframe>,
}

impl AssemblePlan {
    pub fn config(&self) -> &AssembleConfig {
        &self.config
    }

    /// The font the word will be drawn in.
    pub fn font(&self) -> FontDescriptor {
        self.fitted.font()
    }

    /// Create the elements and emit every rule.
    pub fn build(self) -> AssembleAnimation {
        let Self {
            ctx,
            config,
            fitted,
            bounds,
            regions,
            keyframes,
        } = self;

        let surface = ctx.surface;
        let scope = ctx.ids.scoped("text-assemble");
        let container = surface.create_element(ctx.parent, ElementSpec::container(scope.clone()));
        let ghost = surface.create_element(
            Some(container),
            ElementSpec::text(config.text.clone(), format!("{}-ghost", scope))
                .visibility(Visibility::Transparent),
        );
        let parts: Vec<ElementId> = (0..config.part_count)
            .map(|i| {
                surface.create_element(
                    Some(container),
                    ElementSpec::text(config.text.clone(), part_class(&scope, i))
                        .visibility(Visibility::Hidden),
                )
            })
            .collect();

        let animation = AssembleAnimation {
            surface,
            measurer: ctx.measurer,
            config,
            scope,
            container,
            ghost,
            parts,
            fitted,
            bounds,
            regions,
            keyframes,
            tweens: AnimationSystem::new(),
            settle_timer: Deferred::new(),
            state: AssembleState::Initialized,
        };
        animation.emit_layout_rules();
        animation.emit_keyframes();
        animation.surface.subscribe_resize(container);

        tracing::info!(
            scope = %animation.scope,
            text = %animation.config.text,
            parts = animation.parts.len(),
            font = %animation.font(),
            "Initialized text assemble animation"
        );
        animation
    }
}

impl AssembleAnimation {
    /// Validate `config`, fit the word to the viewport, partition it and draw
    /// the scatter, without creating anything.
    ///
    /// Fails with [`TextError::MeasurementUnavailable`] when the surface cannot
    /// resolve the host container's font.
    pub fn plan<R: Rng + ?Sized>(
        ctx: &EffectContext,
        config: AssembleConfig,
        rng: &mut R,
    ) -> AnimationResult<AssemblePlan> {
        profile_function!();
        config.validate()?;

        let base_font = ctx
            .surface
            .computed_font(ctx.parent)
            .ok_or_else(|| {
                TextError::MeasurementUnavailable(String::from(
                    "cannot resolve the host container's font",
                ))
            })?
            .with_size(config.base_font_size);

        let fit_config = FitConfig::new(config.text.clone(), base_font, config.min_screen_padding);
        let fitted = FittedText::new(&*ctx.measurer, ctx.surface.viewport_size(), fit_config)?;
        let (bounds, regions) =
            cell_layout(&*ctx.measurer, fitted.text(), &fitted.font(), config.part_count)?;
        let keyframes = generate_keyframes(config.part_count, &config.ranges, rng)?;

        Ok(AssemblePlan {
            ctx: ctx.clone(),
            config,
            fitted,
            bounds,
            regions,
            keyframes,
        })
    }

    /// Build the effect's elements and styles on the context's surface.
    ///
    /// Errors are reported before anything is created; see
    /// [`plan`](Self::plan).
    pub fn init<R: Rng + ?Sized>(
        ctx: &EffectContext,
        config: AssembleConfig,
        rng: &mut R,
    ) -> AnimationResult<Self> {
        Ok(Self::plan(ctx, config, rng)?.build())
    }

    /// Start (or restart) every part from its scattered pose.
    pub fn play(&mut self) {
        let duration = self.config.duration_s;
        let delay = self.config.start_delay_s;
        for (i, (&part, keyframe)) in self.parts.iter().zip(&self.keyframes).enumerate() {
            self.surface.set_visibility(part, Visibility::Visible);
            self.surface
                .restart_animation(part, &fly_name(&self.scope, i as u32));
            self.tweens.animate_pose(
                part,
                keyframe.start_pose(),
                keyframe.end_pose(),
                duration,
                delay,
                self.config.easing,
            );
        }
        self.surface.set_visibility(self.ghost, Visibility::Hidden);

        self.settle_timer.supersede();
        self.settle_timer
            .schedule(self.config.total_duration(), ());

        if self.state == AssembleState::Playing {
            tracing::debug!(scope = %self.scope, "Restarting text assemble animation");
        } else {
            tracing::debug!(scope = %self.scope, "Playing text assemble animation");
        }
        self.state = AssembleState::Playing;
    }

    /// Advance time by `delta_s` seconds.
    pub fn update(&mut self, delta_s: f32) {
        self.tweens.update(delta_s);
        for () in self.settle_timer.advance(delta_s) {
            self.settle();
        }
    }

    /// Refit the text to the surface's current viewport.
    ///
    /// Cell regions follow the new font size; the scatter poses stay as they
    /// were drawn at init. Failures keep the previous layout, and the next
    /// resize tries again.
    pub fn on_resize(&mut self) {
        profile_function!();
        let viewport = self.surface.viewport_size();
        let fit = match self.fitted.propose(&*self.measurer, viewport) {
            Ok(Some(fit)) => fit,
            Ok(None) => {
                tracing::trace!(scope = %self.scope, ?viewport, "Resize kept font size");
                return;
            }
            Err(err) => {
                tracing::warn!(scope = %self.scope, %err, "Failed to refit after resize");
                return;
            }
        };

        profile_scope!("relayout");
        let font = self.fitted.font_for(fit);
        match cell_layout(&*self.measurer, self.fitted.text(), &font, self.config.part_count) {
            Ok((bounds, regions)) => {
                self.fitted.commit(fit);
                self.bounds = bounds;
                self.regions = regions;
                self.emit_layout_rules();
                tracing::debug!(
                    scope = %self.scope,
                    ?viewport,
                    size = %fit.size,
                    "Resize changed font size"
                );
            }
            Err(err) => {
                tracing::warn!(scope = %self.scope, %err, "Failed to relayout after resize");
            }
        }
    }

    fn settle(&mut self) {
        for &part in &self.parts {
            self.surface.set_visibility(part, Visibility::Hidden);
        }
        self.surface.set_visibility(self.ghost, Visibility::Visible);
        self.state = AssembleState::Settled;
        tracing::debug!(scope = %self.scope, "Text assemble animation settled");
    }

    /// Emit the container's size rule and each part's clip rule.
    fn emit_layout_rules(&self) {
        self.surface.set_style_rule(StyleRule::rule(
            format!(".{}", self.scope),
            vec![
                Declaration::FontSize(self.fitted.fit().size),
                Declaration::Color(self.config.color.clone()),
            ],
        ));
        for region in &self.regions {
            self.surface.set_style_rule(StyleRule::rule(
                format!(".{}", part_class(&self.scope, region.index)),
                vec![
                    Declaration::Clip {
                        position: region.position,
                        size: region.size,
                        bounds: self.bounds,
                    },
                    Declaration::Animation {
                        name: fly_name(&self.scope, region.index),
                        duration_s: self.config.duration_s,
                        delay_s: self.config.start_delay_s,
                        easing: self.config.easing.css_name(),
                    },
                ],
            ));
        }
    }

    fn emit_keyframes(&self) {
        for keyframe in &self.keyframes {
            self.surface.set_style_rule(StyleRule::keyframes(
                fly_name(&self.scope, keyframe.cell_index),
                keyframe.start_pose(),
                keyframe.end_pose(),
            ));
        }
    }

    pub fn state(&self) -> AssembleState {
        self.state
    }

    pub fn config(&self) -> &AssembleConfig {
        &self.config
    }

    /// Class prefix every generated rule lives under.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn container(&self) -> ElementId {
        self.container
    }

    pub fn ghost(&self) -> ElementId {
        self.ghost
    }

    pub fn parts(&self) -> &[ElementId] {
        &self.parts
    }

    pub fn regions(&self) -> &[CellRegion] {
        &self.regions
    }

    pub fn keyframes(&self) -> &[CellKeyframe] {
        &self.keyframes
    }

    /// Bounding box of the word at the fitted size.
    pub fn bounds(&self) -> Dimensions {
        self.bounds
    }

    pub fn fit(&self) -> FitResult {
        self.fitted.fit()
    }

    /// The font at the fitted size.
    pub fn font(&self) -> FontDescriptor {
        self.fitted.font()
    }

    /// Current interpolated pose of part `index`, if it has been played.
    pub fn part_pose(&self, index: usize) -> Option<Pose> {
        self.parts.get(index).and_then(|&part| self.tweens.pose(part))
    }
}

/// Measure the word at `font` and cut its box into cells.
fn cell_layout(
    measurer: &dyn TextMeasurer,
    text: &str,
    font: &FontDescriptor,
    part_count: u32,
) -> AnimationResult<(Dimensions, Vec<CellRegion>)> {
    let bounds = measurer.measure(text, font)?.fit_box();
    let regions = partition_box(bounds, part_count)?;
    Ok((bounds, regions))
}

fn part_class(scope: &str, index: u32) -> String {
    format!("{}-part-{}", scope, index)
}

fn fly_name(scope: &str, index: u32) -> String {
    format!("{}-fly-{}", scope, index)
}
