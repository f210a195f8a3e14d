//! Marquee - an animated name banner
//!
//! The first name is cut into a grid of fragments that fly in from random
//! rotations and depths; the last name slides in from the side. Both lines
//! shrink their font to stay inside the viewport.
//!
//! The crate does not draw anything itself. A host implements
//! [`Surface`](marquee_surface::Surface) (DOM, canvas, terminal, ...), hands
//! it to a [`NameBanner`] and forwards resize and frame events.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use marquee::prelude::*;
//!
//! marquee::logging::init();
//!
//! let config = BannerConfig::from_json_str(include_str!("banner.json"))?;
//! let mut banner = NameBanner::with_system_fonts(surface, config)?;
//! banner.mount(&mut rand::rng())?;
//!
//! let mut clock = FrameClock::new();
//! loop {
//!     if viewport_changed {
//!         banner.on_resize();
//!     }
//!     banner.update(clock.tick());
//! }
//! ```
//!
//! # Features
//!
//! - `cosmic` (default) - measure text with cosmic-text
//! - `profiling` - puffin scopes around fitting and frame updates
//! - `mock` - re-export the recording `MockSurface`

pub mod banner;
pub mod clock;
pub mod config;
pub mod error;

// Re-export sub-crates
pub use marquee_anim as anim;
pub use marquee_core as core;
pub use marquee_core::logging;
pub use marquee_surface as surface;
pub use marquee_text as text;

pub use banner::NameBanner;
pub use clock::FrameClock;
pub use config::{AssembleSettings, BannerConfig, ConfigError, DirectionSetting, MoveSettings};
pub use error::{BannerError, BannerResult};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::banner::NameBanner;
    pub use crate::clock::FrameClock;
    pub use crate::config::{BannerConfig, ConfigError};
    pub use crate::error::{BannerError, BannerResult};

    pub use marquee_anim::{
        AssembleAnimation, AssembleConfig, Direction, EffectContext, MoveAnimation, MoveConfig,
    };
    pub use marquee_core::{Dimensions, ElementId, IdSequence};
    pub use marquee_surface::{ElementSpec, StyleRule, Surface, Visibility};
    pub use marquee_text::{FontDescriptor, FontSize, HeuristicMeasurer, TextMeasurer};

    #[cfg(feature = "cosmic")]
    pub use marquee_text::CosmicMeasurer;

    #[cfg(feature = "mock")]
    pub use marquee_surface::MockSurface;
}
