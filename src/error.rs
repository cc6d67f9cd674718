use enough::StopReason;

/// Errors from PFM probing and decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PfmError {
    #[error("invalid PFM magic string {0:?}")]
    InvalidMagic(String),

    #[error("invalid PFM header: {0}")]
    InvalidHeader(String),

    #[error("invalid PFM scale {0}")]
    InvalidScale(f32),

    #[error("image has zero pixels")]
    ZeroPixels,

    #[error("not sufficient bytes to read ({read} vs {expected})")]
    InsufficientData { read: usize, expected: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PfmError {
    /// Whether the input itself is malformed (as opposed to a limit, a
    /// cancellation, or a failing stream).
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidMagic(_)
                | Self::InvalidHeader(_)
                | Self::InvalidScale(_)
                | Self::ZeroPixels
                | Self::InsufficientData { .. }
                | Self::DimensionsTooLarge { .. }
        )
    }
}

impl From<StopReason> for PfmError {
    fn from(r: StopReason) -> Self {
        PfmError::Cancelled(r)
    }
}
