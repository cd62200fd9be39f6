use tm_core::TmError;

/// Alias for `Result<T, AnimError>`.
pub type AnimResult<T> = Result<T, AnimError>;

/// Errors raised while registering or loading animations.
#[derive(Debug, thiserror::Error)]
pub enum AnimError {
    /// The definition can never be scheduled (no frames, zero interval).
    #[error("invalid animation definition: {0}")]
    InvalidDefinition(String),

    /// Map metadata names a tileset the grid does not know.
    #[error("tileset not found: \"{0}\"")]
    TilesetNotFound(String),

    /// An error from the grid model.
    #[error(transparent)]
    Map(#[from] TmError),
}

impl AnimError {
    /// Shorthand for [`AnimError::InvalidDefinition`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidDefinition(msg.into())
    }
}
