use enough::StopReason;

/// Errors from BMP synthesis.
///
/// The engine is a pure transformation and always succeeds for a
/// representable spec — even one describing a semantically malformed file.
/// The only failures are derived sizes overflowing `usize` and cooperative
/// cancellation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ForgeError {
    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for ForgeError {
    fn from(r: StopReason) -> Self {
        ForgeError::Cancelled(r)
    }
}
