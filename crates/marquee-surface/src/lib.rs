//! Visual surface abstraction for the marquee effects.
//!
//! The effects never touch a page directly. Everything they do to the screen
//! goes through the [`Surface`] capability: creating elements, flipping their
//! visibility, emitting style rules and subscribing to viewport resizes.
//!
//! - [`Surface`] - trait a host implements (DOM, canvas, terminal, ...)
//! - [`StyleRule`] - generated style output, renderable to CSS
//! - `MockSurface` - in-memory recording implementation (requires `mock` feature)
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use std::sync::Arc;
//! use marquee_core::{Dimensions, IdSequence};
//! use marquee_surface::{ElementSpec, MockSurface, Surface, Visibility};
//!
//! let surface = MockSurface::new(Dimensions::new(800.0, 600.0), Arc::new(IdSequence::new()));
//! let el = surface.create_element(None, ElementSpec::text("Jonas", "name"));
//! surface.set_visibility(el, Visibility::Hidden);
//!
//! assert_eq!(surface.visibility(el), Some(Visibility::Hidden));
//! assert_eq!(surface.count_element_creates(), 1);
//! # }
//! ```

#[cfg(feature = "mock")]
pub mod mock;
pub mod style;
pub mod surface;

#[cfg(feature = "mock")]
pub use mock::{MockElement, MockSurface, SurfaceCall};
pub use style::{Declaration, Pose, StyleRule};
pub use surface::{ElementSpec, Surface, Visibility};
