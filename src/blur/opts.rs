use std::str::FromStr;

use crate::foundation::error::{StackBlurError, StackBlurResult};

/// Largest radius accepted by [`BlurOpts::validate`].
pub const MAX_RADIUS: u32 = 65_535;

/// How an averaged channel value is narrowed to 8 bits.
///
/// Triangular weights always sum to the normalization divisor, so for valid
/// input both modes produce the same bytes. They only diverge if an
/// accumulator ever exceeds `255 * divsum`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Narrowing {
    /// Keep the low 8 bits (wrap modulo 256). Matches the classic StackBlur output.
    #[default]
    Truncate,
    /// Saturate at 255.
    Clamp,
}

impl Narrowing {
    pub(crate) fn narrow(self, v: u64) -> u8 {
        match self {
            Self::Truncate => v as u8,
            Self::Clamp => v.min(255) as u8,
        }
    }
}

impl FromStr for Narrowing {
    type Err = StackBlurError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "truncate" | "wrap" => Ok(Self::Truncate),
            "clamp" | "saturate" => Ok(Self::Clamp),
            other => Err(StackBlurError::validation(format!(
                "unknown narrowing '{other}' (expected truncate or clamp)"
            ))),
        }
    }
}

/// Options for one blur call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlurOpts {
    /// Half-width of the window in pixels; `0` is the identity.
    pub radius: u32,
    /// Channel narrowing mode.
    pub narrowing: Narrowing,
}

impl BlurOpts {
    /// Options with the given radius and [`Narrowing::Truncate`].
    pub fn new(radius: u32) -> Self {
        Self {
            radius,
            narrowing: Narrowing::default(),
        }
    }

    /// Replace the narrowing mode.
    pub fn with_narrowing(mut self, narrowing: Narrowing) -> Self {
        self.narrowing = narrowing;
        self
    }

    /// Check the options before any pixel work starts.
    pub fn validate(&self) -> StackBlurResult<()> {
        if self.radius > MAX_RADIUS {
            return Err(StackBlurError::validation(format!(
                "blur radius must be <= {MAX_RADIUS}, got {}",
                self.radius
            )));
        }
        Ok(())
    }

    /// Decode options from JSON (`{ "radius": 4, "narrowing": "truncate" }`).
    pub fn from_json_str(s: &str) -> StackBlurResult<Self> {
        let opts: Self = serde_json::from_str(s)?;
        opts.validate()?;
        Ok(opts)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/blur/opts.rs"]
mod tests;
