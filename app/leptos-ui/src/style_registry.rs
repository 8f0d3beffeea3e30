//! Shared stylesheet ownership for spinner animations.
//!
//! Spinners do not own `<style>` tags individually. A [`StyleRegistry`] is
//! provided through Leptos context and funnels every generated keyframe
//! block into a single style element with a fixed id, created on first use
//! and idempotently rewritten afterwards. Per-diameter deduplication lives
//! in [`AnimationRegistry`] in halo-core.

use std::sync::{Arc, Mutex, OnceLock};

use halo_core::keyframes::AnimationRegistry;
use halo_core::SpinnerConfig;
use leptos::prelude::*;

/// Id of the single style element the registry writes.
pub const STYLE_ELEMENT_ID: &str = "halo-spinner-animation";

/// Base stylesheet for the component: mode classes and the rotation
/// keyframes that drive native indeterminate spin and the legacy fallback.
const BASE_STYLE: &str = "\
.halo-spinner { display: inline-block; }
.halo-spinner svg { display: block; }
.halo-spinner circle {
  fill: transparent;
  transform-origin: center;
  transition: stroke-dashoffset 225ms linear;
}
.halo-mode-indeterminate svg {
  animation: halo-spinner-linear-rotate 2000ms linear infinite;
}
.halo-mode-indeterminate svg circle {
  transition-property: stroke;
  animation-duration: 4000ms;
  animation-timing-function: cubic-bezier(0.35, 0, 0.25, 1);
  animation-iteration-count: infinite;
}
.halo-mode-indeterminate-fallback svg {
  animation: halo-spinner-stroke-rotate-fallback 10000ms cubic-bezier(0.87, 0.03, 0.33, 1) infinite;
}
@keyframes halo-spinner-linear-rotate {
  0%   { transform: rotate(0deg); }
  100% { transform: rotate(360deg); }
}
@keyframes halo-spinner-stroke-rotate-fallback {
  0%   { transform: rotate(0deg); }
  25%  { transform: rotate(1170deg); }
  50%  { transform: rotate(2340deg); }
  75%  { transform: rotate(3510deg); }
  100% { transform: rotate(4680deg); }
}";

// ---------------------------------------------------------------------------
// StyleRegistry
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
pub struct StyleRegistry {
    inner: Arc<Mutex<AnimationRegistry>>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a spinner configuration and syncs the style element when
    /// the generated stylesheet changed.
    pub fn register(&self, config: &SpinnerConfig) {
        let changed = self
            .inner
            .lock()
            .expect("style registry lock poisoned")
            .register(config);
        if changed {
            self.sync();
        }
    }

    /// Full stylesheet text: base styles plus every keyframe block.
    pub fn stylesheet_text(&self) -> String {
        let blocks = self
            .inner
            .lock()
            .expect("style registry lock poisoned")
            .css_text();
        format!("{BASE_STYLE}\n{blocks}")
    }

    /// Writes the stylesheet into the shared style element, creating it in
    /// `<head>` on first use. Outside the browser this is a no-op.
    fn sync(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let element = match document.get_element_by_id(STYLE_ELEMENT_ID) {
                Some(element) => element,
                None => {
                    let Ok(element) = document.create_element("style") else {
                        return;
                    };
                    element.set_id(STYLE_ELEMENT_ID);
                    if let Some(head) = document.head() {
                        let _ = head.append_child(&element);
                    }
                    element
                }
            };
            element.set_text_content(Some(&self.stylesheet_text()));
        }
    }
}

/// Provides a shared [`StyleRegistry`] to the component tree. Call once near
/// the root, the way app state is provided.
pub fn provide_spinner_styles() {
    provide_context(StyleRegistry::new());
}

/// Returns the context registry when a provider is in scope. Without one,
/// every caller shares a single process-wide registry: the style element is
/// keyed by a fixed id, so spinners holding private registries would
/// overwrite each other's keyframe blocks on every sync.
pub fn use_spinner_styles() -> StyleRegistry {
    use_context::<StyleRegistry>().unwrap_or_else(|| {
        static SHARED: OnceLock<StyleRegistry> = OnceLock::new();
        SHARED.get_or_init(StyleRegistry::new).clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use halo_core::SpinnerMode;

    fn config(diameter: f64) -> SpinnerConfig {
        SpinnerConfig::new("#3f51b5", diameter, SpinnerMode::Indeterminate, 10.0, 10.0).unwrap()
    }

    #[test]
    fn unprovided_spinners_share_one_registry() {
        // No provider in scope: both lookups must land on the same registry,
        // so the second diameter's keyframes join the first instead of
        // replacing them in the shared style element.
        let first = use_spinner_styles();
        let second = use_spinner_styles();
        first.register(&config(100.0));
        second.register(&config(48.0));

        let css = first.stylesheet_text();
        assert!(css.contains("halo-spinner-stroke-rotate-100"));
        assert!(css.contains("halo-spinner-stroke-rotate-48"));
        assert_eq!(css, second.stylesheet_text());
    }

    #[test]
    fn stylesheet_carries_base_styles_and_blocks() {
        let registry = StyleRegistry::new();
        registry.register(&config(64.0));
        let css = registry.stylesheet_text();
        assert!(css.contains(".halo-mode-indeterminate svg"));
        assert!(css.contains("@keyframes halo-spinner-stroke-rotate-fallback"));
        assert!(css.contains("@keyframes halo-spinner-stroke-rotate-64"));
    }
}
