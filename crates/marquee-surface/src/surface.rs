//! The capability interface the effects render through.

use marquee_core::{Dimensions, ElementId};
use marquee_text::FontDescriptor;

use crate::style::StyleRule;

/// Visibility state of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Drawn normally.
    Visible,
    /// Takes part in layout but draws nothing.
    Transparent,
    /// Not drawn.
    Hidden,
}

impl Visibility {
    pub fn is_hidden(self) -> bool {
        self == Visibility::Hidden
    }
}

/// Description of an element to create.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSpec {
    /// Text content, `None` for pure containers.
    pub text: Option<String>,
    /// Class the element's style rules are addressed by.
    pub class: String,
    pub visibility: Visibility,
}

impl ElementSpec {
    pub fn container(class: impl Into<String>) -> Self {
        Self {
            text: None,
            class: class.into(),
            visibility: Visibility::Visible,
        }
    }

    pub fn text(text: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            class: class.into(),
            visibility: Visibility::Visible,
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

/// Everything the effects may do to the screen.
///
/// Methods take `&self` so one surface can be shared by several effects;
/// implementations use interior mutability where they need to record state.
pub trait Surface {
    /// Current viewport size in pixels.
    fn viewport_size(&self) -> Dimensions;

    /// Create an element under `parent`, or under the host container when `None`.
    fn create_element(&self, parent: Option<ElementId>, spec: ElementSpec) -> ElementId;

    fn set_visibility(&self, element: ElementId, visibility: Visibility);

    /// Insert a rule, replacing any rule with the same [`StyleRule::key`].
    fn set_style_rule(&self, rule: StyleRule);

    /// Restart the named animation on an element from its first frame.
    fn restart_animation(&self, element: ElementId, animation: &str);

    /// The font an attached element effectively renders with; `None` asks
    /// for the host container's font, which new elements inherit.
    ///
    /// Returns `None` when the element is unknown or not attached, since
    /// inherited styles cannot be resolved without layout context.
    fn computed_font(&self, element: Option<ElementId>) -> Option<FontDescriptor>;

    /// Register `element`'s owner for viewport resize notifications.
    fn subscribe_resize(&self, element: ElementId);
}
