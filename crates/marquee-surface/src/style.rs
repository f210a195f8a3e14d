//! Generated style output.
//!
//! The effects describe their styling as structured rules so that a host can
//! either interpret them directly or inject the CSS text from
//! [`StyleRule::to_css`] into a stylesheet it owns.

use std::fmt::Write;

use marquee_core::math::Vec3;
use marquee_core::{Dimensions, Position};
use marquee_text::FontSize;

/// A transform plus opacity: one end of a keyframe pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Rotation around x, y and z in degrees.
    pub rotation: Vec3,
    /// Translation along z in pixels.
    pub depth: f32,
    /// Horizontal translation as a percentage of the element's own width.
    pub offset_x_percent: f32,
    pub opacity: f32,
}

impl Pose {
    /// Untransformed and fully opaque.
    pub const REST: Self = Self {
        rotation: Vec3::ZERO,
        depth: 0.0,
        offset_x_percent: 0.0,
        opacity: 1.0,
    };

    pub fn rotated(rotation: Vec3, depth: f32) -> Self {
        Self {
            rotation,
            depth,
            ..Self::REST
        }
    }

    pub fn shifted(offset_x_percent: f32, opacity: f32) -> Self {
        Self {
            offset_x_percent,
            opacity,
            ..Self::REST
        }
    }

    fn css_transform(&self) -> String {
        format!(
            "translateX({}%) translateZ({}px) rotateX({}deg) rotateY({}deg) rotateZ({}deg)",
            self.offset_x_percent,
            self.depth,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z
        )
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::REST
    }
}

/// One declaration inside a selector rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    FontSize(FontSize),
    Color(String),
    /// Show only `size` at `position` of an element spanning `bounds`.
    Clip {
        position: Position,
        size: Dimensions,
        bounds: Dimensions,
    },
    /// Play the keyframes `name` once and hold the final frame.
    Animation {
        name: String,
        duration_s: f32,
        delay_s: f32,
        easing: &'static str,
    },
}

impl Declaration {
    fn write_css(&self, out: &mut String) {
        // Writing into a String cannot fail.
        let _ = match self {
            Declaration::FontSize(size) => write!(out, "font-size: {};", size),
            Declaration::Color(color) => write!(out, "color: {};", color),
            Declaration::Clip {
                position,
                size,
                bounds,
            } => {
                let right = (bounds.width - position.x - size.width).max(0.0);
                let bottom = (bounds.height - position.y - size.height).max(0.0);
                write!(
                    out,
                    "clip-path: inset({}px {}px {}px {}px);",
                    position.y, right, bottom, position.x
                )
            }
            Declaration::Animation {
                name,
                duration_s,
                delay_s,
                easing,
            } => write!(
                out,
                "animation: {} {}s {} {}s 1 both;",
                name, duration_s, easing, delay_s
            ),
        };
    }
}

/// A rule emitted into the host stylesheet.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleRule {
    Rule {
        selector: String,
        declarations: Vec<Declaration>,
    },
    Keyframes {
        name: String,
        from: Pose,
        to: Pose,
    },
}

impl StyleRule {
    pub fn rule(selector: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        StyleRule::Rule {
            selector: selector.into(),
            declarations,
        }
    }

    pub fn keyframes(name: impl Into<String>, from: Pose, to: Pose) -> Self {
        StyleRule::Keyframes {
            name: name.into(),
            from,
            to,
        }
    }

    /// Identity of the rule in a stylesheet; setting a rule with the same key
    /// replaces the previous one.
    pub fn key(&self) -> String {
        match self {
            StyleRule::Rule { selector, .. } => selector.clone(),
            StyleRule::Keyframes { name, .. } => format!("@keyframes {}", name),
        }
    }

    pub fn declarations(&self) -> &[Declaration] {
        match self {
            StyleRule::Rule { declarations, .. } => declarations,
            StyleRule::Keyframes { .. } => &[],
        }
    }

    pub fn to_css(&self) -> String {
        let mut out = String::new();
        match self {
            StyleRule::Rule {
                selector,
                declarations,
            } => {
                out.push_str(selector);
                out.push_str(" {");
                for declaration in declarations {
                    out.push(' ');
                    declaration.write_css(&mut out);
                }
                out.push_str(" }");
            }
            StyleRule::Keyframes { name, from, to } => {
                let _ = write!(
                    out,
                    "@keyframes {} {{ from {{ transform: {}; opacity: {}; }} to {{ transform: {}; opacity: {}; }} }}",
                    name,
                    from.css_transform(),
                    from.opacity,
                    to.css_transform(),
                    to.opacity
                );
            }
        }
        out
    }
}
