//! Legacy rendering-engine detection.
//!
//! EdgeHTML and Trident animate `stroke-dasharray` unreliably, so spinners
//! on those engines fall back to a CSS-rotation animation. The predicates
//! here are pure functions over the engine's self-reported identification
//! string; the decision reaches components through the
//! [`DashAnimationCapability`] trait so it can be tested without emulating
//! device strings.

/// Whether the identification string reports legacy (EdgeHTML) Edge.
///
/// Chromium-based Edge reports `Edg/` and intentionally does not match.
pub fn is_edge(user_agent: &str) -> bool {
    user_agent.to_ascii_lowercase().contains("edge")
}

/// Whether the identification string reports the Trident engine (MSIE/IE11).
pub fn is_trident(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    ua.contains("msie") || ua.contains("trident")
}

/// Whether the CSS-rotation fallback must replace the native stroke-dash
/// keyframe animation.
pub fn needs_fallback_animation(user_agent: &str) -> bool {
    is_edge(user_agent) || is_trident(user_agent)
}

/// Capability of the rendering engine to animate SVG stroke-dash properties
/// through keyframes.
pub trait DashAnimationCapability {
    fn supports_stroke_dash_animation(&self) -> bool;

    fn needs_fallback(&self) -> bool {
        !self.supports_stroke_dash_animation()
    }
}

/// Capability decision derived from an identification string.
#[derive(Debug, Clone)]
pub struct UserAgentCapability(String);

impl UserAgentCapability {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self(user_agent.into())
    }
}

impl DashAnimationCapability for UserAgentCapability {
    fn supports_stroke_dash_animation(&self) -> bool {
        !needs_fallback_animation(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EDGE_18: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                           (KHTML, like Gecko) Chrome/64.0.3282.140 Safari/537.36 Edge/18.17763";
    const IE_11: &str = "Mozilla/5.0 (Windows NT 6.1; Trident/7.0; rv:11.0) like Gecko";
    const IE_9: &str = "Mozilla/5.0 (compatible; MSIE 9.0; Windows NT 6.1; Trident/5.0)";
    const CHROMIUM_EDGE: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                                 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0";
    const CHROME: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
    const FIREFOX: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0";

    #[test]
    fn detects_legacy_edge() {
        assert!(is_edge(EDGE_18));
        assert!(!is_edge(CHROMIUM_EDGE));
        assert!(!is_edge(CHROME));
    }

    #[test]
    fn detects_trident() {
        assert!(is_trident(IE_11));
        assert!(is_trident(IE_9));
        assert!(!is_trident(FIREFOX));
    }

    #[test]
    fn fallback_is_the_disjunction() {
        assert!(needs_fallback_animation(EDGE_18));
        assert!(needs_fallback_animation(IE_11));
        assert!(!needs_fallback_animation(CHROME));
        assert!(!needs_fallback_animation(FIREFOX));
        assert!(!needs_fallback_animation(CHROMIUM_EDGE));
    }

    #[test]
    fn capability_trait_inverts_fallback() {
        assert!(!UserAgentCapability::new(IE_11).supports_stroke_dash_animation());
        assert!(UserAgentCapability::new(IE_11).needs_fallback());
        assert!(UserAgentCapability::new(CHROME).supports_stroke_dash_animation());
    }
}
