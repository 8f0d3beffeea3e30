use halo_core::probe::{needs_fallback_animation, DashAnimationCapability};

/// Capability probe backed by the browser's `navigator.userAgent`.
///
/// The string is read once at construction; the fallback decision is fixed
/// for the lifetime of the page, matching how engines do not change under a
/// running document.
#[derive(Debug, Clone, Copy)]
pub struct BrowserCapability {
    fallback: bool,
}

impl BrowserCapability {
    pub fn detect() -> Self {
        let user_agent = web_sys::window()
            .and_then(|w| w.navigator().user_agent().ok())
            .unwrap_or_default();
        Self {
            fallback: needs_fallback_animation(&user_agent),
        }
    }
}

impl DashAnimationCapability for BrowserCapability {
    fn supports_stroke_dash_animation(&self) -> bool {
        !self.fallback
    }
}
