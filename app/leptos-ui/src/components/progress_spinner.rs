use halo_core::probe::DashAnimationCapability;
use halo_core::{
    ConfigError, SpinnerConfig, SpinnerMode, BASE_SIZE, BASE_STROKE_WIDTH, DEFAULT_COLOR,
    DEFAULT_VALUE,
};
use leptos::prelude::*;

use crate::capabilities::BrowserCapability;
use crate::style_registry::use_spinner_styles;

/// Root element classes for the current mode, with the `-fallback` suffix
/// variant on legacy engines.
pub(crate) fn container_class(mode: SpinnerMode, fallback: bool) -> String {
    let suffix = if fallback { "-fallback" } else { "" };
    format!("halo-spinner halo-mode-{mode}{suffix}")
}

fn fatal(err: ConfigError) -> SpinnerConfig {
    panic!("invalid spinner configuration: {err}");
}

/// Circular progress/activity indicator rendered as SVG.
///
/// Determinate mode fills an arc from 0% to 100% of `value`; indeterminate
/// mode animates continuously. All props accept plain values or signals;
/// any change recomputes the derived SVG attributes and refreshes the
/// shared animation stylesheet.
///
/// Invalid configuration (non-finite or non-positive dimensions, non-finite
/// value) is a caller bug and panics. `value` is clamped into `[0, 100]`.
#[component]
pub fn ProgressSpinner(
    /// Stroke color (any CSS color).
    #[prop(into, default = Signal::from(DEFAULT_COLOR.to_string()))]
    color: Signal<String>,
    /// Diameter of the spinner in pixels; sets the svg width and height.
    #[prop(into, default = Signal::from(BASE_SIZE))]
    diameter: Signal<f64>,
    /// Presentation mode: determinate fills to `value`, indeterminate
    /// animates continuously.
    #[prop(into, default = Signal::from(SpinnerMode::Determinate))]
    mode: Signal<SpinnerMode>,
    /// Stroke width of the progress circle in pixels.
    #[prop(into, default = Signal::from(BASE_STROKE_WIDTH))]
    stroke_width: Signal<f64>,
    /// Progress value in percent, clamped into `[0, 100]`.
    #[prop(into, default = Signal::from(DEFAULT_VALUE))]
    value: Signal<f64>,
) -> impl IntoView {
    let styles = use_spinner_styles();
    // Probed once; engines do not change under a running document.
    let fallback = BrowserCapability::detect().needs_fallback();

    let config = Memo::new(move |_| {
        SpinnerConfig::new(
            color.get(),
            diameter.get(),
            mode.get(),
            stroke_width.get(),
            value.get(),
        )
        .unwrap_or_else(fatal)
    });

    // Any relevant configuration change regenerates the keyframe block for
    // the current diameter in the shared stylesheet.
    Effect::new(move |_| {
        styles.register(&config.get());
    });

    view! {
        <div class=move || container_class(config.get().mode(), fallback)>
            <svg
                preserveAspectRatio="xMidYMid meet"
                focusable="false"
                viewBox=move || config.get().view_box()
                style=move || config.get().svg_style()
            >
                <circle
                    cx="50%"
                    cy="50%"
                    r=move || config.get().circle_radius()
                    stroke=move || config.get().color().to_string()
                    style=move || config.get().circle_style(fallback)
                ></circle>
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_class_covers_mode_and_fallback() {
        assert_eq!(
            container_class(SpinnerMode::Determinate, false),
            "halo-spinner halo-mode-determinate"
        );
        assert_eq!(
            container_class(SpinnerMode::Determinate, true),
            "halo-spinner halo-mode-determinate-fallback"
        );
        assert_eq!(
            container_class(SpinnerMode::Indeterminate, false),
            "halo-spinner halo-mode-indeterminate"
        );
        assert_eq!(
            container_class(SpinnerMode::Indeterminate, true),
            "halo-spinner halo-mode-indeterminate-fallback"
        );
    }
}
