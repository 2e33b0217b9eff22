use thiserror::Error;

// Construction-time failures. Queries themselves never fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoiseError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl NoiseError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        NoiseError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
