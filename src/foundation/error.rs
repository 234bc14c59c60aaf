/// Convenience result type used across the crate.
pub type CartelloResult<T> = Result<T, CartelloError>;

/// Top-level error taxonomy used by the conversation and rendering APIs.
#[derive(thiserror::Error, Debug)]
pub enum CartelloError {
    /// A session is already active for the user attempting to start one.
    #[error("session conflict: an image is already being created for this user")]
    SessionConflict,

    /// The originating chat is not on the allow list.
    #[error("permission denied: chat is not among the allowed ones")]
    PermissionDenied,

    /// The payload does not match what the current conversation state expects.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A template, background or other on-disk resource is absent or unreadable.
    #[error("resource missing: {0}")]
    ResourceMissing(String),

    /// Unexpected failure while compositing the output image.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CartelloError {
    /// Build a [`CartelloError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build a [`CartelloError::ResourceMissing`] value.
    pub fn resource_missing(msg: impl Into<String>) -> Self {
        Self::ResourceMissing(msg.into())
    }

    /// Build a [`CartelloError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
