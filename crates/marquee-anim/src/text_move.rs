//! The text move effect: a word slides in from off-screen while fading in.

use std::sync::Arc;

use marquee_core::ElementId;
use marquee_core::profiling::profile_function;
use marquee_surface::{Declaration, ElementSpec, Pose, StyleRule, Surface, Visibility};
use marquee_text::{FitConfig, FitResult, FontDescriptor, FontSize, TextError, TextMeasurer};

use crate::context::EffectContext;
use crate::error::AnimationResult;
use crate::fitting::{FittedText, validate_common};
use crate::tween::{AnimationSystem, EasingFunction};

/// Horizontal start offset, as a percentage of the element's width.
pub const OFFSCREEN_OFFSET_PERCENT: f32 = 200.0;

/// Side the text enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Left,
    Right,
}

impl Direction {
    /// Start offset for this direction.
    pub fn start_offset_percent(self) -> f32 {
        match self {
            Direction::Left => -OFFSCREEN_OFFSET_PERCENT,
            Direction::Right => OFFSCREEN_OFFSET_PERCENT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveConfig {
    pub text: String,
    pub color: String,
    pub base_font_size: FontSize,
    pub min_screen_padding: f32,
    pub duration_s: f32,
    pub start_delay_s: f32,
    pub direction: Direction,
    pub easing: EasingFunction,
}

impl MoveConfig {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: String::from("#ffffff"),
            base_font_size: FontSize::rem(7.0),
            min_screen_padding: 10.0,
            duration_s: 3.0,
            start_delay_s: 0.0,
            direction: Direction::Left,
            easing: EasingFunction::EaseInOut,
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

    pub fn duration(mut self, seconds: f32) -> Self {
        self.duration_s = seconds;
        self
    }

    pub fn start_delay(mut self, seconds: f32) -> Self {
        self.start_delay_s = seconds;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    pub fn validate(&self) -> AnimationResult<()> {
        validate_common(
            self.base_font_size,
            self.min_screen_padding,
            self.duration_s,
            self.start_delay_s,
        )
    }

    /// The off-screen, transparent pose the text starts from.
    pub fn start_pose(&self) -> Pose {
        Pose::shifted(self.direction.start_offset_percent(), 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveState {
    Initialized,
    Playing,
}

/// The move effect bound to a surface.
pub struct MoveAnimation {
    surface: Arc<dyn Surface>,
    measurer: Arc<dyn TextMeasurer>,
    config: MoveConfig,
    scope: String,
    element: ElementId,
    fitted: FittedText,
    tweens: AnimationSystem,
    state: MoveState,
}

/// A validated and fitted move effect that has not touched the surface.
pub struct MovePlan {
    ctx: EffectContext,
    config: MoveConfig,
    fitted: FittedText,
}

impl MovePlan {
    pub fn config(&self) -> &MoveConfig {
        &self.config
    }

    pub fn font(&self) -> FontDescriptor {
        self.fitted.font()
    }

    /// Create the hidden element and emit its slide and size rules.
    pub fn build(self) -> MoveAnimation {
        let Self {
            ctx,
            config,
            fitted,
        } = self;

        let surface = ctx.surface;
        let scope = ctx.ids.scoped("text-move");
        let element = surface.create_element(
            ctx.parent,
            ElementSpec::text(config.text.clone(), scope.clone()).visibility(Visibility::Hidden),
        );

        let animation = MoveAnimation {
            surface,
            measurer: ctx.measurer,
            config,
            scope,
            element,
            fitted,
            tweens: AnimationSystem::new(),
            state: MoveState::Initialized,
        };
        animation.surface.set_style_rule(StyleRule::keyframes(
            animation.slide_name(),
            animation.config.start_pose(),
            Pose::REST,
        ));
        animation.emit_element_rule();
        animation.surface.subscribe_resize(element);

        tracing::info!(
            scope = %animation.scope,
            text = %animation.config.text,
            direction = ?animation.config.direction,
            font = %animation.font(),
            "Initialized text move animation"
        );
        animation
    }
}

impl MoveAnimation {
    /// Validate `config` and fit the text to the viewport, without creating
    /// anything.
    pub fn plan(ctx: &EffectContext, config: MoveConfig) -> AnimationResult<MovePlan> {
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
        Ok(MovePlan {
            ctx: ctx.clone(),
            config,
            fitted,
        })
    }

    /// Create the text element, hidden, with its size and slide rules.
    pub fn init(ctx: &EffectContext, config: MoveConfig) -> AnimationResult<Self> {
        Ok(Self::plan(ctx, config)?.build())
    }

    /// Show the element and run the slide from the start.
    pub fn play(&mut self) {
        self.surface.set_visibility(self.element, Visibility::Visible);
        self.surface
            .restart_animation(self.element, &self.slide_name());
        self.tweens.animate_pose(
            self.element,
            self.config.start_pose(),
            Pose::REST,
            self.config.duration_s,
            self.config.start_delay_s,
            self.config.easing,
        );
        self.state = MoveState::Playing;
        tracing::debug!(scope = %self.scope, "Playing text move animation");
    }

    pub fn update(&mut self, delta_s: f32) {
        self.tweens.update(delta_s);
    }

    /// Refit to the current viewport. A running slide is not restarted.
    pub fn on_resize(&mut self) {
        let viewport = self.surface.viewport_size();
        match self.fitted.propose(&*self.measurer, viewport) {
            Ok(Some(fit)) => {
                self.fitted.commit(fit);
                self.emit_element_rule();
                tracing::debug!(
                    scope = %self.scope,
                    ?viewport,
                    size = %fit.size,
                    "Resize changed font size"
                );
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(scope = %self.scope, %err, "Failed to refit after resize");
            }
        }
    }

    fn slide_name(&self) -> String {
        format!("{}-slide", self.scope)
    }

    fn emit_element_rule(&self) {
        self.surface.set_style_rule(StyleRule::rule(
            format!(".{}", self.scope),
            vec![
                Declaration::FontSize(self.fitted.fit().size),
                Declaration::Color(self.config.color.clone()),
                Declaration::Animation {
                    name: self.slide_name(),
                    duration_s: self.config.duration_s,
                    delay_s: self.config.start_delay_s,
                    easing: self.config.easing.css_name(),
                },
            ],
        ));
    }

    pub fn state(&self) -> MoveState {
        self.state
    }

    pub fn config(&self) -> &MoveConfig {
        &self.config
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn fit(&self) -> FitResult {
        self.fitted.fit()
    }

    pub fn font(&self) -> FontDescriptor {
        self.fitted.font()
    }

    /// Current pose, or the start pose before the first play.
    pub fn current_pose(&self) -> Pose {
        self.tweens
            .pose(self.element)
            .unwrap_or_else(|| self.config.start_pose())
    }

    /// Current horizontal offset in percent of the element's width.
    pub fn current_offset(&self) -> f32 {
        self.current_pose().offset_x_percent
    }

    /// True once the slide has reached rest.
    pub fn is_finished(&self) -> bool {
        self.state == MoveState::Playing && self.tweens.is_finished()
    }
}
