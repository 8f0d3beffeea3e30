//! Generation and deduplication of the per-diameter stroke-dash keyframe
//! animation used by native indeterminate mode.

use std::collections::BTreeMap;

use crate::config::SpinnerConfig;

/// Keyframe template for native indeterminate animation. The arc grows and
/// shrinks between START_VALUE (5% visible) and END_VALUE (80% visible)
/// while the rotateX flips keep the sweep direction consistent across the
/// eight phases.
const INDETERMINATE_ANIMATION_TEMPLATE: &str = "\
@keyframes halo-spinner-stroke-rotate-DIAMETER {
  0%       { stroke-dashoffset: START_VALUE; transform: rotate(0); }
  12.5%    { stroke-dashoffset: END_VALUE;   transform: rotate(0); }
  12.5001% { stroke-dashoffset: END_VALUE;   transform: rotateX(180deg) rotate(72.5deg); }
  25%      { stroke-dashoffset: START_VALUE; transform: rotateX(180deg) rotate(72.5deg); }
  25.0001% { stroke-dashoffset: START_VALUE; transform: rotate(270deg); }
  37.5%    { stroke-dashoffset: END_VALUE;   transform: rotate(270deg); }
  37.5001% { stroke-dashoffset: END_VALUE;   transform: rotateX(180deg) rotate(161.5deg); }
  50%      { stroke-dashoffset: START_VALUE; transform: rotateX(180deg) rotate(161.5deg); }
  50.0001% { stroke-dashoffset: START_VALUE; transform: rotate(180deg); }
  62.5%    { stroke-dashoffset: END_VALUE;   transform: rotate(180deg); }
  62.5001% { stroke-dashoffset: END_VALUE;   transform: rotateX(180deg) rotate(251.5deg); }
  75%      { stroke-dashoffset: START_VALUE; transform: rotateX(180deg) rotate(251.5deg); }
  75.0001% { stroke-dashoffset: START_VALUE; transform: rotate(90deg); }
  87.5%    { stroke-dashoffset: END_VALUE;   transform: rotate(90deg); }
  87.5001% { stroke-dashoffset: END_VALUE;   transform: rotateX(180deg) rotate(341.5deg); }
  100%     { stroke-dashoffset: START_VALUE; transform: rotateX(180deg) rotate(341.5deg); }
}";

/// Animation name for a given diameter. Each distinct diameter gets its own
/// keyframe block because the dash offsets are absolute pixel lengths.
pub fn animation_name(diameter: f64) -> String {
    format!("halo-spinner-stroke-rotate-{diameter}")
}

/// Renders the indeterminate keyframe block for a diameter/circumference
/// pair. The animation sweeps between 95% and 20% of the circumference.
pub fn indeterminate_animation_css(diameter: f64, circumference: f64) -> String {
    INDETERMINATE_ANIMATION_TEMPLATE
        .replace("START_VALUE", &format!("{}px", 0.95 * circumference))
        .replace("END_VALUE", &format!("{}px", 0.2 * circumference))
        .replace("DIAMETER", &format!("{diameter}"))
}

// ---------------------------------------------------------------------------
// AnimationRegistry
// ---------------------------------------------------------------------------

/// Deduplicated set of generated keyframe blocks, keyed by animation name.
///
/// Every spinner registers its configuration here; instances sharing a
/// diameter share a single block, and re-registering a diameter overwrites
/// that block in place instead of appending a duplicate. Blocks for
/// diameters no longer rendered are retained; unused `@keyframes` rules are
/// inert and the set is bounded by the number of distinct diameters seen.
#[derive(Debug, Clone, Default)]
pub struct AnimationRegistry {
    blocks: BTreeMap<String, String>,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the keyframe block for a configuration. Returns `true` when
    /// the rendered stylesheet text changed.
    pub fn register(&mut self, config: &SpinnerConfig) -> bool {
        let name = animation_name(config.diameter());
        let css = indeterminate_animation_css(config.diameter(), config.stroke_circumference());
        if self.blocks.get(&name).is_some_and(|existing| *existing == css) {
            return false;
        }
        tracing::debug!(diameter = config.diameter(), "regenerated spinner keyframes");
        self.blocks.insert(name, css);
        true
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// All registered keyframe blocks, concatenated for the style element.
    pub fn css_text(&self) -> String {
        self.blocks.values().cloned().collect::<Vec<_>>().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SpinnerConfig, SpinnerMode};

    fn config(diameter: f64) -> SpinnerConfig {
        SpinnerConfig::new("#3f51b5", diameter, SpinnerMode::Indeterminate, 10.0, 10.0).unwrap()
    }

    #[test]
    fn template_interpolates_offsets_and_diameter() {
        let c = config(100.0);
        let css = indeterminate_animation_css(c.diameter(), c.stroke_circumference());
        assert!(css.starts_with("@keyframes halo-spinner-stroke-rotate-100 {"));
        let start = 0.95 * c.stroke_circumference();
        let end = 0.2 * c.stroke_circumference();
        assert!(css.contains(&format!("stroke-dashoffset: {start}px")));
        assert!(css.contains(&format!("stroke-dashoffset: {end}px")));
        assert!(!css.contains("START_VALUE"));
        assert!(!css.contains("END_VALUE"));
        assert!(!css.contains("DIAMETER"));
    }

    #[test]
    fn same_diameter_shares_one_block() {
        let mut registry = AnimationRegistry::new();
        assert!(registry.register(&config(100.0)));
        // A second instance with the same diameter adds nothing.
        assert!(!registry.register(&config(100.0)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn distinct_diameters_get_distinct_blocks() {
        let mut registry = AnimationRegistry::new();
        registry.register(&config(100.0));
        registry.register(&config(48.0));
        assert_eq!(registry.len(), 2);
        let css = registry.css_text();
        assert!(css.contains("halo-spinner-stroke-rotate-100"));
        assert!(css.contains("halo-spinner-stroke-rotate-48"));
    }

    #[test]
    fn reregistration_overwrites_without_duplicating() {
        let mut registry = AnimationRegistry::new();
        registry.register(&config(100.0));
        let before = registry.css_text();
        registry.register(&config(100.0));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.css_text(), before);
    }
}
