//! Circle geometry and inline-style derivation for the spinner SVG.

use std::f64::consts::PI;

use crate::config::{SpinnerConfig, SpinnerMode, BASE_STROKE_WIDTH};
use crate::keyframes;

impl SpinnerConfig {
    /// Radius of the spinner circle, normalized against the base stroke
    /// width so the arc does not move when the stroke thickens.
    pub fn circle_radius(&self) -> f64 {
        (self.diameter() - BASE_STROKE_WIDTH) / 2.0
    }

    /// Circumference of the spinner circle.
    pub fn stroke_circumference(&self) -> f64 {
        2.0 * PI * self.circle_radius()
    }

    /// Dash offset of the circle, in pixels.
    ///
    /// Determinate mode maps the progress value onto the arc. Indeterminate
    /// mode with the rotation fallback pins the arc at 80% and lets CSS
    /// rotation convey motion. Native indeterminate mode returns `None`:
    /// the generated keyframe animation owns the offset from its first
    /// frame, so no inline declaration is emitted at all.
    pub fn stroke_dash_offset(&self, fallback: bool) -> Option<f64> {
        match self.mode() {
            SpinnerMode::Determinate => {
                Some(self.stroke_circumference() * (100.0 - self.value()) / 100.0)
            }
            SpinnerMode::Indeterminate if fallback => Some(self.stroke_circumference() * 0.2),
            SpinnerMode::Indeterminate => None,
        }
    }

    /// Stroke width as a percentage of the diameter.
    pub fn circle_stroke_width_percent(&self) -> f64 {
        self.stroke_width() / self.diameter() * 100.0
    }

    /// View box of the spinner's svg element.
    pub fn view_box(&self) -> String {
        let side = self.circle_radius() * 2.0 + self.stroke_width();
        format!("0 0 {side} {side}")
    }

    /// Inline style for the svg root (pixel dimensions).
    pub fn svg_style(&self) -> String {
        let d = self.diameter();
        format!("width:{d}px;height:{d}px")
    }

    /// Inline style for the circle element.
    pub fn circle_style(&self, fallback: bool) -> String {
        let mut style = String::new();
        if self.mode() == SpinnerMode::Indeterminate {
            style.push_str(&format!(
                "animation-name:{};",
                keyframes::animation_name(self.diameter())
            ));
        }
        if let Some(offset) = self.stroke_dash_offset(fallback) {
            style.push_str(&format!("stroke-dashoffset:{offset}px;"));
        }
        style.push_str(&format!(
            "stroke-dasharray:{}px;stroke-width:{}%",
            self.stroke_circumference(),
            self.circle_stroke_width_percent()
        ));
        style
    }
}
