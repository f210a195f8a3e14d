//! Collaborators every effect is built against.

use std::sync::Arc;

use marquee_core::{ElementId, IdSequence};
use marquee_surface::Surface;
use marquee_text::TextMeasurer;

/// Where and with what an effect is built.
///
/// Cloning is cheap; effects mounted in the same container share one context
/// so their generated class names never collide.
#[derive(Clone)]
pub struct EffectContext {
    pub surface: Arc<dyn Surface>,
    pub measurer: Arc<dyn TextMeasurer>,
    pub ids: Arc<IdSequence>,
    /// Host container the effect's top-level element is appended to.
    pub parent: Option<ElementId>,
}

impl EffectContext {
    pub fn new(
        surface: Arc<dyn Surface>,
        measurer: Arc<dyn TextMeasurer>,
        ids: Arc<IdSequence>,
    ) -> Self {
        Self {
            surface,
            measurer,
            ids,
            parent: None,
        }
    }

    /// Append effects to `parent` instead of the surface root.
    pub fn in_container(mut self, parent: ElementId) -> Self {
        self.parent = Some(parent);
        self
    }
}

impl std::fmt::Debug for EffectContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectContext")
            .field("parent", &self.parent)
            .field("next_id", &self.ids.peek())
            .finish_non_exhaustive()
    }
}
