use thiserror::Error;

/// Failure while attaching or running a single effect.
///
/// None of these are fatal for the page: the coordinator logs them and keeps
/// installing the remaining effects.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EffectError {
    /// A marker element the effect needs is not present in the document.
    #[error("missing element `{0}`")]
    MissingElement(String),
    /// A browser call rejected the request.
    #[error("browser call failed: {0}")]
    Js(String),
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}

impl EffectError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement(selector.into())
    }

    /// Absent markup is the expected way of switching an effect off.
    pub fn is_missing_element(&self) -> bool {
        matches!(self, Self::MissingElement(_))
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be within {min}..={max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{name} must lie strictly between 0 and 1, got {value}")]
    NotAFraction { name: &'static str, value: f64 },
    #[error("{name} must be non-zero")]
    Zero { name: &'static str },
}

pub type Result<T, E = EffectError> = std::result::Result<T, E>;
