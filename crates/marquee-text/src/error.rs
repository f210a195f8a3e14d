/// Errors that can occur while describing or measuring text.
#[derive(Debug, Clone, PartialEq)]
pub enum TextError {
    /// The measurement surface could not produce a rendering context.
    MeasurementUnavailable(String),

    /// A font string or one of its parts could not be parsed.
    InvalidFontDescriptor(String),

    /// Lock was poisoned (RwLock/Mutex).
    LockPoisoned(String),
}

impl std::fmt::Display for TextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextError::MeasurementUnavailable(msg) => {
                write!(f, "Text measurement unavailable: {}", msg)
            }
            TextError::InvalidFontDescriptor(msg) => write!(f, "Invalid font descriptor: {}", msg),
            TextError::LockPoisoned(msg) => {
                write!(
                    f,
                    "Lock was poisoned (likely due to panic in another thread): {}",
                    msg
                )
            }
        }
    }
}

impl std::error::Error for TextError {}

impl<T> From<std::sync::PoisonError<T>> for TextError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        TextError::LockPoisoned(err.to_string())
    }
}

/// Result type for text operations.
pub type TextResult<T> = Result<T, TextError>;
