use marquee_text::TextError;

/// Errors raised while setting up a text effect.
#[derive(Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// The part count is zero or not a perfect square.
    InvalidPartCount(u32),

    /// Some other configuration value is out of range.
    InvalidConfig(String),

    /// Measuring or describing the text failed.
    Text(TextError),
}

impl std::fmt::Display for AnimationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnimationError::InvalidPartCount(count) => write!(
                f,
                "Invalid part count {}: must be a positive perfect square",
                count
            ),
            AnimationError::InvalidConfig(msg) => write!(f, "Invalid animation config: {}", msg),
            AnimationError::Text(err) => write!(f, "Text error: {}", err),
        }
    }
}

impl std::error::Error for AnimationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnimationError::Text(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TextError> for AnimationError {
    fn from(err: TextError) -> Self {
        AnimationError::Text(err)
    }
}

/// Result type for animation setup.
pub type AnimationResult<T> = Result<T, AnimationError>;
