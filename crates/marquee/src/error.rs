use marquee_anim::AnimationError;
use marquee_text::TextError;

use crate::config::ConfigError;

/// Errors raised while building a [`NameBanner`](crate::NameBanner).
#[derive(Debug, Clone, PartialEq)]
pub enum BannerError {
    /// The banner configuration was rejected.
    Config(ConfigError),

    /// One of the effects could not be built.
    Animation(AnimationError),
}

impl std::fmt::Display for BannerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BannerError::Config(err) => write!(f, "{}", err),
            BannerError::Animation(err) => write!(f, "Failed to build effect: {}", err),
        }
    }
}

impl std::error::Error for BannerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BannerError::Config(err) => Some(err),
            BannerError::Animation(err) => Some(err),
        }
    }
}

impl From<ConfigError> for BannerError {
    fn from(err: ConfigError) -> Self {
        BannerError::Config(err)
    }
}

impl From<AnimationError> for BannerError {
    fn from(err: AnimationError) -> Self {
        BannerError::Animation(err)
    }
}

impl From<TextError> for BannerError {
    fn from(err: TextError) -> Self {
        BannerError::Animation(AnimationError::Text(err))
    }
}

pub type BannerResult<T> = Result<T, BannerError>;
