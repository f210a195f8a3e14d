//! In-memory implementation of [`Surface`] for testing.
//!
//! This module provides a surface that records every operation and keeps a
//! small element tree and stylesheet, without any real rendering.

use std::sync::Arc;

use indexmap::IndexMap;
use marquee_core::{Dimensions, ElementId, IdSequence};
use marquee_text::FontDescriptor;
use parking_lot::Mutex;

use crate::style::{Declaration, StyleRule};
use crate::surface::{ElementSpec, Surface, Visibility};

/// Records a surface call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    CreateElement {
        id: ElementId,
        parent: Option<ElementId>,
        class: String,
    },
    SetVisibility {
        element: ElementId,
        visibility: Visibility,
    },
    SetStyleRule {
        key: String,
    },
    RestartAnimation {
        element: ElementId,
        animation: String,
    },
    SubscribeResize {
        element: ElementId,
    },
}

/// An element held by the mock surface.
#[derive(Debug, Clone, PartialEq)]
pub struct MockElement {
    pub id: ElementId,
    pub parent: Option<ElementId>,
    pub text: Option<String>,
    pub class: String,
    pub visibility: Visibility,
}

/// Mock implementation of [`Surface`].
///
/// Methods take `&self` but record state, so everything sits behind
/// `parking_lot::Mutex`. Fonts resolve like inherited styles: the nearest
/// ancestor whose class rule declares a font size wins, weight and family
/// come from the root font.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use marquee_core::{Dimensions, IdSequence};
/// use marquee_surface::{Declaration, ElementSpec, MockSurface, StyleRule, Surface};
/// use marquee_text::FontSize;
///
/// let surface = MockSurface::new(Dimensions::new(1280.0, 720.0), Arc::new(IdSequence::new()));
/// let el = surface.create_element(None, ElementSpec::container("banner"));
/// surface.set_style_rule(StyleRule::rule(
///     ".banner",
///     vec![Declaration::FontSize(FontSize::rem(3.0))],
/// ));
///
/// let font = surface.computed_font(Some(el)).unwrap();
/// assert_eq!(font.size, FontSize::rem(3.0));
/// ```
pub struct MockSurface {
    ids: Arc<IdSequence>,
    viewport: Mutex<Dimensions>,
    root_font: Mutex<Option<FontDescriptor>>,
    calls: Mutex<Vec<SurfaceCall>>,
    elements: Mutex<IndexMap<ElementId, MockElement>>,
    stylesheet: Mutex<IndexMap<String, StyleRule>>,
    resize_subscribers: Mutex<Vec<ElementId>>,
}

impl MockSurface {
    /// Create a mock surface with a default root font.
    pub fn new(viewport: Dimensions, ids: Arc<IdSequence>) -> Self {
        Self {
            ids,
            viewport: Mutex::new(viewport),
            root_font: Mutex::new(Some(FontDescriptor::default())),
            calls: Mutex::new(Vec::new()),
            elements: Mutex::new(IndexMap::new()),
            stylesheet: Mutex::new(IndexMap::new()),
            resize_subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Font every element inherits from.
    pub fn with_root_font(self, font: FontDescriptor) -> Self {
        *self.root_font.lock() = Some(font);
        self
    }

    /// Make font resolution fail, as a surface without layout context would.
    pub fn without_fonts(self) -> Self {
        *self.root_font.lock() = None;
        self
    }

    /// Change the viewport size. Subscribers are not notified; the caller
    /// forwards the resize to whatever it subscribed.
    pub fn set_viewport(&self, viewport: Dimensions) {
        *self.viewport.lock() = viewport;
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.lock().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    pub fn count_element_creates(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, SurfaceCall::CreateElement { .. }))
            .count()
    }

    pub fn count_restarts(&self, element: ElementId) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| {
                matches!(call, SurfaceCall::RestartAnimation { element: e, .. } if *e == element)
            })
            .count()
    }

    pub fn element(&self, id: ElementId) -> Option<MockElement> {
        self.elements.lock().get(&id).cloned()
    }

    /// All elements in creation order.
    pub fn elements(&self) -> Vec<MockElement> {
        self.elements.lock().values().cloned().collect()
    }

    pub fn children(&self, parent: ElementId) -> Vec<MockElement> {
        self.elements
            .lock()
            .values()
            .filter(|el| el.parent == Some(parent))
            .cloned()
            .collect()
    }

    pub fn visibility(&self, id: ElementId) -> Option<Visibility> {
        self.elements.lock().get(&id).map(|el| el.visibility)
    }

    pub fn style_rule(&self, key: &str) -> Option<StyleRule> {
        self.stylesheet.lock().get(key).cloned()
    }

    /// The whole stylesheet as CSS, in insertion order.
    pub fn stylesheet_css(&self) -> String {
        self.stylesheet
            .lock()
            .values()
            .map(StyleRule::to_css)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn resize_subscribers(&self) -> Vec<ElementId> {
        self.resize_subscribers.lock().clone()
    }

    fn declared_font_size(&self, class: &str) -> Option<marquee_text::FontSize> {
        let stylesheet = self.stylesheet.lock();
        let rule = stylesheet.get(&format!(".{}", class))?;
        rule.declarations().iter().rev().find_map(|decl| match decl {
            Declaration::FontSize(size) => Some(*size),
            _ => None,
        })
    }
}

impl Surface for MockSurface {
    fn viewport_size(&self) -> Dimensions {
        *self.viewport.lock()
    }

    fn create_element(&self, parent: Option<ElementId>, spec: ElementSpec) -> ElementId {
        let id = self.ids.next_element();
        self.calls.lock().push(SurfaceCall::CreateElement {
            id,
            parent,
            class: spec.class.clone(),
        });
        self.elements.lock().insert(
            id,
            MockElement {
                id,
                parent,
                text: spec.text,
                class: spec.class,
                visibility: spec.visibility,
            },
        );
        id
    }

    fn set_visibility(&self, element: ElementId, visibility: Visibility) {
        self.calls.lock().push(SurfaceCall::SetVisibility {
            element,
            visibility,
        });
        match self.elements.lock().get_mut(&element) {
            Some(el) => el.visibility = visibility,
            None => tracing::warn!(%element, "Visibility set on unknown element"),
        }
    }

    fn set_style_rule(&self, rule: StyleRule) {
        let key = rule.key();
        self.calls
            .lock()
            .push(SurfaceCall::SetStyleRule { key: key.clone() });
        self.stylesheet.lock().insert(key, rule);
    }

    fn restart_animation(&self, element: ElementId, animation: &str) {
        self.calls.lock().push(SurfaceCall::RestartAnimation {
            element,
            animation: animation.to_string(),
        });
    }

    fn computed_font(&self, element: Option<ElementId>) -> Option<FontDescriptor> {
        let root = self.root_font.lock().clone()?;

        let mut current = element;
        let mut first = true;
        while let Some(id) = current {
            let el = self.element(id);
            let Some(el) = el else {
                // The queried element itself must exist; a dangling parent ends the walk.
                if first {
                    return None;
                }
                break;
            };
            if let Some(size) = self.declared_font_size(&el.class) {
                return Some(root.with_size(size));
            }
            current = el.parent;
            first = false;
        }
        Some(root)
    }

    fn subscribe_resize(&self, element: ElementId) {
        self.calls
            .lock()
            .push(SurfaceCall::SubscribeResize { element });
        self.resize_subscribers.lock().push(element);
    }
}
