use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default diameter of the spinner in pixels.
pub const BASE_SIZE: f64 = 100.0;

/// Stroke width the radius calculation is normalized against, in pixels.
///
/// The rendered arc radius is always derived from this value, not from the
/// configured stroke width, so changing the stroke only thickens the ring
/// without moving it.
pub const BASE_STROKE_WIDTH: f64 = 10.0;

/// Default stroke color.
pub const DEFAULT_COLOR: &str = "#3f51b5";

/// Default progress value in percent.
pub const DEFAULT_VALUE: f64 = 10.0;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid diameter: {0}")]
    InvalidDiameter(f64),

    #[error("invalid stroke width: {0}")]
    InvalidStrokeWidth(f64),

    #[error("invalid progress value: {0}")]
    InvalidValue(f64),

    #[error("invalid mode: {0:?}")]
    InvalidMode(String),
}

// ---------------------------------------------------------------------------
// SpinnerMode
// ---------------------------------------------------------------------------

/// Presentation mode of the spinner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinnerMode {
    /// Standard progress indicator, fills from 0% to 100%.
    #[default]
    Determinate,
    /// Indicates that something is happening without conveying a discrete
    /// progress value.
    Indeterminate,
}

impl SpinnerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpinnerMode::Determinate => "determinate",
            SpinnerMode::Indeterminate => "indeterminate",
        }
    }
}

impl fmt::Display for SpinnerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpinnerMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "determinate" => Ok(SpinnerMode::Determinate),
            "indeterminate" => Ok(SpinnerMode::Indeterminate),
            other => Err(ConfigError::InvalidMode(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// SpinnerConfig
// ---------------------------------------------------------------------------

/// Validated spinner configuration.
///
/// Fields are private so the invariants hold after every mutation:
/// `diameter` and `stroke_width` are finite and positive, and `value` is
/// clamped into `[0, 100]` on every assignment. A setter that fails leaves
/// the previous state untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinnerConfig {
    color: String,
    diameter: f64,
    mode: SpinnerMode,
    stroke_width: f64,
    value: f64,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            diameter: BASE_SIZE,
            mode: SpinnerMode::Determinate,
            stroke_width: BASE_STROKE_WIDTH,
            value: DEFAULT_VALUE,
        }
    }
}

impl SpinnerConfig {
    pub fn new(
        color: impl Into<String>,
        diameter: f64,
        mode: SpinnerMode,
        stroke_width: f64,
        value: f64,
    ) -> Result<Self, ConfigError> {
        let mut config = Self {
            color: color.into(),
            mode,
            ..Self::default()
        };
        config.set_diameter(diameter)?;
        config.set_stroke_width(stroke_width)?;
        config.set_value(value)?;
        Ok(config)
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn mode(&self) -> SpinnerMode {
        self.mode
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    pub fn set_diameter(&mut self, diameter: f64) -> Result<(), ConfigError> {
        if !diameter.is_finite() || diameter <= 0.0 {
            return Err(ConfigError::InvalidDiameter(diameter));
        }
        self.diameter = diameter;
        Ok(())
    }

    pub fn set_mode(&mut self, mode: SpinnerMode) {
        self.mode = mode;
    }

    /// Parses and assigns a mode from its string form; unknown strings fail
    /// and leave the current mode in place.
    pub fn set_mode_str(&mut self, mode: &str) -> Result<(), ConfigError> {
        self.mode = mode.parse()?;
        Ok(())
    }

    pub fn set_stroke_width(&mut self, stroke_width: f64) -> Result<(), ConfigError> {
        if !stroke_width.is_finite() || stroke_width <= 0.0 {
            return Err(ConfigError::InvalidStrokeWidth(stroke_width));
        }
        self.stroke_width = stroke_width;
        Ok(())
    }

    /// Assigns the progress value, clamping into `[0, 100]`.
    pub fn set_value(&mut self, value: f64) -> Result<(), ConfigError> {
        if !value.is_finite() {
            return Err(ConfigError::InvalidValue(value));
        }
        self.value = value.clamp(0.0, 100.0);
        Ok(())
    }
}
