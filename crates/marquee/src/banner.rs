//! The two-line name banner.

#[cfg(feature = "cosmic")]
use std::sync::Arc;

use marquee_anim::{AssembleAnimation, EffectContext, MoveAnimation};
#[cfg(feature = "cosmic")]
use marquee_core::IdSequence;
use marquee_core::profiling::profile_function;
#[cfg(feature = "cosmic")]
use marquee_surface::Surface;
use rand::Rng;

use crate::config::{BannerConfig, ConfigError};
use crate::error::BannerResult;

/// First name assembling from fragments, last name sliding in beneath it.
///
/// The banner is created unmounted; resize and update events that arrive
/// before [`mount`](NameBanner::mount) are ignored.
///
/// # Example
///
/// ```ignore
/// let mut banner = NameBanner::new(ctx, BannerConfig::new("Jonas", "Kahnwald"))?;
/// banner.mount(&mut rand::rng())?;
///
/// // host loop
/// banner.update(clock.tick());
/// ```
pub struct NameBanner {
    ctx: EffectContext,
    config: BannerConfig,
    effects: Option<Effects>,
}

struct Effects {
    first_name: AssembleAnimation,
    last_name: MoveAnimation,
}

impl NameBanner {
    /// Validate `config`; nothing is created until [`mount`](Self::mount).
    pub fn new(ctx: EffectContext, config: BannerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            ctx,
            config,
            effects: None,
        })
    }

    /// A banner measuring with the system's installed fonts.
    #[cfg(feature = "cosmic")]
    pub fn with_system_fonts(
        surface: Arc<dyn Surface>,
        config: BannerConfig,
    ) -> BannerResult<Self> {
        let measurer = marquee_text::CosmicMeasurer::with_system_fonts()?;
        let ctx = EffectContext::new(surface, Arc::new(measurer), Arc::new(IdSequence::new()));
        Ok(Self::new(ctx, config)?)
    }

    /// Build both effects in the host container and play them.
    ///
    /// Both effects are planned before either is built, so a failed mount
    /// leaves the surface untouched and can be retried. Mounting twice is a
    /// no-op.
    pub fn mount<R: Rng + ?Sized>(&mut self, rng: &mut R) -> BannerResult<()> {
        if self.effects.is_some() {
            tracing::debug!("Name banner already mounted");
            return Ok(());
        }

        let first_plan = AssembleAnimation::plan(&self.ctx, self.config.assemble_config()?, rng)?;
        let last_plan = MoveAnimation::plan(&self.ctx, self.config.move_config()?)?;
        let mut first_name = first_plan.build();
        let mut last_name = last_plan.build();
        first_name.play();
        last_name.play();

        tracing::info!(
            first_name = %self.config.first_name,
            last_name = %self.config.last_name,
            "Mounted name banner"
        );
        self.effects = Some(Effects {
            first_name,
            last_name,
        });
        Ok(())
    }

    /// Replay both effects from the start.
    pub fn replay(&mut self) {
        if let Some(effects) = &mut self.effects {
            effects.first_name.play();
            effects.last_name.play();
        }
    }

    pub fn update(&mut self, delta_s: f32) {
        profile_function!();
        if let Some(effects) = &mut self.effects {
            effects.first_name.update(delta_s);
            effects.last_name.update(delta_s);
        }
    }

    /// Forward a viewport change to both effects.
    pub fn on_resize(&mut self) {
        profile_function!();
        match &mut self.effects {
            Some(effects) => {
                effects.first_name.on_resize();
                effects.last_name.on_resize();
            }
            None => tracing::trace!("Ignoring resize before mount"),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.effects.is_some()
    }

    pub fn config(&self) -> &BannerConfig {
        &self.config
    }

    pub fn first_name(&self) -> Option<&AssembleAnimation> {
        self.effects.as_ref().map(|effects| &effects.first_name)
    }

    pub fn last_name(&self) -> Option<&MoveAnimation> {
        self.effects.as_ref().map(|effects| &effects.last_name)
    }
}
