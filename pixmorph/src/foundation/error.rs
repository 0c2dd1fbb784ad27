/// Result alias used throughout pixmorph.
pub type MorphResult<T> = Result<T, MorphError>;

const MISSING_INPUT_MESSAGE: &str =
    "Please select both images (re-upload if the filename is shown but the image isn't loaded).";
const DECODE_FAILURE_MESSAGE: &str = "Error loading images. Try re-uploading them.";

/// Error type for all pixmorph operations.
#[derive(thiserror::Error, Debug)]
pub enum MorphError {
    /// A value or buffer failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// An image could not be read or decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// A morph was requested without both pixel lists populated.
    #[error("missing input: {0}")]
    MissingInput(String),

    /// Frame output failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Configuration could not be loaded or is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// Any other error, with context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MorphError {
    /// Construct a [`MorphError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Construct a [`MorphError::Decode`].
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Construct a [`MorphError::MissingInput`].
    pub fn missing_input(msg: impl Into<String>) -> Self {
        Self::MissingInput(msg.into())
    }

    /// Construct a [`MorphError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Construct a [`MorphError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// `true` for the two failures that are shown to the user as a single message.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::MissingInput(_))
    }

    /// The single message shown to a user for this failure.
    ///
    /// Decode and missing-input failures map to fixed texts; everything else uses `Display`.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingInput(_) => MISSING_INPUT_MESSAGE.to_string(),
            Self::Decode(_) => DECODE_FAILURE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
