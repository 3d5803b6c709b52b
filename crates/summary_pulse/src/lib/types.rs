use serde::{Deserialize, Serialize};

/// A single summarization request as entered by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// The text to shorten. Rejected when empty or whitespace-only.
    pub raw_text: String,
    /// Retention ratio (local mode) or length factor (remote mode).
    /// Clamped to the active mode's bounds before use.
    pub ratio: f32,
}

impl SummaryRequest {
    pub fn new(raw_text: impl Into<String>, ratio: f32) -> Self {
        SummaryRequest {
            raw_text: raw_text.into(),
            ratio,
        }
    }
}

/// Which summarization path to take, together with the style vocabulary of
/// that path.
///
/// The two paths deliberately carry distinct style enums: the local slider
/// offers `Balanced` where the remote one offers `Brief`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryMode {
    Local { style: LocalStyle },
    Remote { style: RemoteStyle },
}

/// Style options for the local extractive path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocalStyle {
    Concise,
    Balanced,
    Detailed,
}

impl LocalStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocalStyle::Concise => "concise",
            LocalStyle::Balanced => "balanced",
            LocalStyle::Detailed => "detailed",
        }
    }
}

/// Style options for the remote generative path, embedded verbatim in the
/// instruction sent to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemoteStyle {
    Concise,
    Brief,
    Detailed,
}

impl RemoteStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            RemoteStyle::Concise => "concise",
            RemoteStyle::Brief => "brief",
            RemoteStyle::Detailed => "detailed",
        }
    }
}

/// Inclusive bounds for a ratio/length slider.
#[derive(Debug, Clone, Copy)]
pub struct RatioBounds {
    pub min: f32,
    pub max: f32,
}

impl RatioBounds {
    pub const fn new(min: f32, max: f32) -> Self {
        RatioBounds { min, max }
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

/// Bounds of the local-mode retention ratio slider.
pub const LOCAL_RATIO_BOUNDS: RatioBounds = RatioBounds::new(0.1, 1.0);

/// Bounds of the remote-mode length factor slider.
pub const REMOTE_LENGTH_BOUNDS: RatioBounds = RatioBounds::new(0.2, 1.0);
