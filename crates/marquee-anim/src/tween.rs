//! Tween engine for element poses.
//!
//! Animations here play once and hold their final value, which is all the
//! text effects need. The same timing model (delay, then duration) backs the
//! CSS the effects emit, so a host that samples poses from an
//! [`AnimationSystem`] sees what a browser would draw.
//!
//! # Example
//!
//! ```ignore
//! let mut tweens = AnimationSystem::new();
//! tweens.animate(
//!     element,
//!     Animation::new(AnimatableProperty::Depth)
//!         .from(8000.0)
//!         .to(0.0)
//!         .duration(10.0)
//!         .delay(1.0)
//!         .easing(EasingFunction::EaseOut),
//! );
//!
//! tweens.update(delta_time);
//! let pose = tweens.pose(element);
//! ```

use ahash::HashMap;
use marquee_core::ElementId;
use marquee_core::math::Vec3;
use marquee_surface::Pose;

/// Properties that can be animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimatableProperty {
    /// Rotation around x in degrees
    RotationX,
    /// Rotation around y in degrees
    RotationY,
    /// Rotation around z in degrees
    RotationZ,
    /// Translation along z
    Depth,
    /// Horizontal offset in percent of the element width
    OffsetX,
    /// Opacity (0.0 to 1.0)
    Opacity,
}

/// Easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Linear interpolation
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
    /// Cubic ease out
    CubicOut,
}

impl EasingFunction {
    /// Apply the easing function to a normalized time value (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseIn => t * t,
            EasingFunction::EaseOut => t * (2.0 - t),
            EasingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            EasingFunction::CubicOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
        }
    }

    /// The closest CSS timing function.
    pub fn css_name(&self) -> &'static str {
        match self {
            EasingFunction::Linear => "linear",
            EasingFunction::EaseIn => "ease-in",
            EasingFunction::EaseOut => "ease-out",
            EasingFunction::EaseInOut => "ease-in-out",
            EasingFunction::CubicOut => "cubic-bezier(0.33, 1, 0.68, 1)",
        }
    }
}

/// Animation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationState {
    /// Waiting for the start delay to pass
    Delayed,
    /// Animation is running
    Running,
    /// Animation is completed and holds its end value
    Completed,
}

/// A play-once animation for a single property.
#[derive(Debug, Clone)]
pub struct Animation {
    property: AnimatableProperty,
    from: f32,
    to: f32,
    /// Duration in seconds
    duration: f32,
    /// Elapsed time in seconds, after the delay
    elapsed: f32,
    easing: EasingFunction,
    state: AnimationState,
    /// Delay before starting (seconds)
    delay: f32,
    delay_elapsed: f32,
}

impl Animation {
    /// Create a new animation.
    pub fn new(property: AnimatableProperty) -> Self {
        Self {
            property,
            from: 0.0,
            to: 1.0,
            duration: 1.0,
            elapsed: 0.0,
            easing: EasingFunction::Linear,
            state: AnimationState::Delayed,
            delay: 0.0,
            delay_elapsed: 0.0,
        }
    }

    /// Set the start value.
    pub fn from(mut self, value: f32) -> Self {
        self.from = value;
        self
    }

    /// Set the end value.
    pub fn to(mut self, value: f32) -> Self {
        self.to = value;
        self
    }

    /// Set the duration in seconds.
    pub fn duration(mut self, duration: f32) -> Self {
        self.duration = duration.max(0.0);
        self
    }

    /// Set the easing function.
    pub fn easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Set delay before starting (seconds).
    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Get the property being animated.
    pub fn property(&self) -> AnimatableProperty {
        self.property
    }

    /// Delay plus duration.
    pub fn total_duration(&self) -> f32 {
        self.delay + self.duration
    }

    /// Get the current value.
    ///
    /// While delayed the start value is held, once completed the end value.
    pub fn value(&self) -> f32 {
        match self.state {
            AnimationState::Delayed => self.from,
            AnimationState::Completed => self.to,
            AnimationState::Running => {
                let t = if self.duration > 0.0 {
                    self.elapsed / self.duration
                } else {
                    1.0
                };
                self.from + (self.to - self.from) * self.easing.apply(t)
            }
        }
    }

    /// Get the current state.
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Update the animation by delta time.
    ///
    /// Returns true if the animation is still running.
    pub fn update(&mut self, delta_time: f32) -> bool {
        let mut remaining = delta_time.max(0.0);

        if self.state == AnimationState::Delayed {
            let left = self.delay - self.delay_elapsed;
            if remaining < left {
                self.delay_elapsed += remaining;
                return true;
            }
            self.delay_elapsed = self.delay;
            remaining -= left;
            self.state = AnimationState::Running;
        }

        if self.state == AnimationState::Running {
            self.elapsed += remaining;
            if self.elapsed >= self.duration {
                self.elapsed = self.duration;
                self.state = AnimationState::Completed;
            }
        }

        self.state != AnimationState::Completed
    }
}

/// The animations of a single element, one per property.
#[derive(Debug, Clone, Default)]
pub struct ElementAnimations {
    animations: HashMap<AnimatableProperty, Animation>,
}

impl ElementAnimations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an animation, replacing one on the same property.
    pub fn add(&mut self, animation: Animation) {
        self.animations.insert(animation.property(), animation);
    }

    pub fn get(&self, property: AnimatableProperty) -> Option<&Animation> {
        self.animations.get(&property)
    }

    pub fn value(&self, property: AnimatableProperty) -> Option<f32> {
        self.get(property).map(Animation::value)
    }

    /// Update all animations.
    ///
    /// Returns true if any animations are still running.
    pub fn update(&mut self, delta_time: f32) -> bool {
        let mut any_running = false;
        for animation in self.animations.values_mut() {
            any_running |= animation.update(delta_time);
        }
        any_running
    }

    pub fn is_finished(&self) -> bool {
        self.animations
            .values()
            .all(|a| a.state() == AnimationState::Completed)
    }

    /// Current pose; properties without an animation sit at rest.
    pub fn pose(&self) -> Pose {
        let rest = Pose::REST;
        let value = |property, default| self.value(property).unwrap_or(default);
        Pose {
            rotation: Vec3::new(
                value(AnimatableProperty::RotationX, rest.rotation.x),
                value(AnimatableProperty::RotationY, rest.rotation.y),
                value(AnimatableProperty::RotationZ, rest.rotation.z),
            ),
            depth: value(AnimatableProperty::Depth, rest.depth),
            offset_x_percent: value(AnimatableProperty::OffsetX, rest.offset_x_percent),
            opacity: value(AnimatableProperty::Opacity, rest.opacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}

/// Animations for a set of elements.
///
/// Finished animations stay in place so their final pose keeps being
/// reported.
#[derive(Debug, Default)]
pub struct AnimationSystem {
    elements: HashMap<ElementId, ElementAnimations>,
}

impl AnimationSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an animation for an element.
    pub fn animate(&mut self, element: ElementId, animation: Animation) {
        self.elements.entry(element).or_default().add(animation);
    }

    /// Move a transition from `from` to `to` onto an element, one animation
    /// per property that differs between the two poses.
    pub fn animate_pose(
        &mut self,
        element: ElementId,
        from: Pose,
        to: Pose,
        duration: f32,
        delay: f32,
        easing: EasingFunction,
    ) {
        let pairs = [
            (AnimatableProperty::RotationX, from.rotation.x, to.rotation.x),
            (AnimatableProperty::RotationY, from.rotation.y, to.rotation.y),
            (AnimatableProperty::RotationZ, from.rotation.z, to.rotation.z),
            (AnimatableProperty::Depth, from.depth, to.depth),
            (AnimatableProperty::OffsetX, from.offset_x_percent, to.offset_x_percent),
            (AnimatableProperty::Opacity, from.opacity, to.opacity),
        ];
        for (property, start, end) in pairs {
            if start != end {
                self.animate(
                    element,
                    Animation::new(property)
                        .from(start)
                        .to(end)
                        .duration(duration)
                        .delay(delay)
                        .easing(easing),
                );
            }
        }
    }

    pub fn get(&self, element: ElementId) -> Option<&ElementAnimations> {
        self.elements.get(&element)
    }

    pub fn pose(&self, element: ElementId) -> Option<Pose> {
        self.elements.get(&element).map(ElementAnimations::pose)
    }

    /// Update all animations by delta time.
    ///
    /// Returns true if any animation is still running.
    pub fn update(&mut self, delta_time: f32) -> bool {
        let mut any_running = false;
        for animations in self.elements.values_mut() {
            any_running |= animations.update(delta_time);
        }
        any_running
    }

    pub fn is_finished(&self) -> bool {
        self.elements.values().all(ElementAnimations::is_finished)
    }

    /// Get the number of animated elements.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }
}
