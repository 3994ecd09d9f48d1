/// Text shown in place of a declaration when the width range is unusable
pub const INVALID_RANGE_PLACEHOLDER: &str = "/* Minimum width must be less than maximum width */";

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid range: min width {min_width}px must be non-zero and less than max width {max_width}px")]
    InvalidRange { min_width: f64, max_width: f64 },
}

impl EngineError {
    /// Static placeholder rendered in the output region for this error
    pub fn placeholder(&self) -> &'static str {
        match self {
            EngineError::InvalidRange { .. } => INVALID_RANGE_PLACEHOLDER,
        }
    }
}
