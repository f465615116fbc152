//! Errors surfaced to the host at the API boundary
//!
//! Only configuration problems are recoverable. Broken invariants inside a
//! tick are programmer errors and panic instead.

/// Errors returned when a round or its configuration is rejected.
#[derive(thiserror::Error, Debug)]
pub enum SimError {
    /// Requested asteroid count is outside the accepted range
    #[error("asteroid count {count} out of range (allowed {min}..={max})")]
    AsteroidCountOutOfRange { count: u32, min: u32, max: u32 },

    /// Arena dimensions are not positive finite numbers
    #[error("invalid arena bounds {width}x{height} (must be positive and finite)")]
    InvalidBounds { width: f32, height: f32 },

    /// A settings field holds an unusable value
    #[error("invalid setting `{field}`: {reason}")]
    InvalidSetting {
        field: &'static str,
        reason: &'static str,
    },

    /// Settings JSON could not be parsed
    #[error("settings parse error: {0}")]
    SettingsParse(#[from] serde_json::Error),
}
