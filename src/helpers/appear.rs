//! Entrance transition cues
//!
//! A cue is a `data-appear` attribute naming the motion plus a
//! `--appear-delay` custom property. The stylesheet turns that into a finite
//! CSS animation; without the stylesheet the element is simply visible.

use crate::config::AnimationConfig;

/// Delay of the hero subheadline
pub const SUBHEADLINE_DELAY_MS: u32 = 150;
/// Delay of the hero highlight panel
pub const HIGHLIGHTS_DELAY_MS: u32 = 200;
/// Delay of the hero call-to-action row
pub const ACTIONS_DELAY_MS: u32 = 300;

/// Direction an element comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Slides down into place
    Drop,
    /// Slides up into place
    Rise,
    Fade,
    /// Scales up slightly
    Grow,
}

impl Motion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Motion::Drop => "drop",
            Motion::Rise => "rise",
            Motion::Fade => "fade",
            Motion::Grow => "grow",
        }
    }
}

/// Attribute fragment for an element, empty when animation is off
pub fn appear(config: &AnimationConfig, motion: Motion, delay_ms: u32) -> String {
    if !config.enable {
        return String::new();
    }
    format!(
        r#" data-appear="{}" style="--appear-delay: {}ms""#,
        motion.as_str(),
        delay_ms
    )
}

/// Cue for the project card at `index`, staggered by its position
pub fn card_appear(config: &AnimationConfig, index: usize) -> String {
    let delay = config
        .card_stagger_ms
        .saturating_mul(u32::try_from(index).unwrap_or(u32::MAX));
    appear(config, Motion::Rise, delay)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appear() {
        let config = AnimationConfig::default();
        assert_eq!(
            appear(&config, Motion::Fade, ACTIONS_DELAY_MS),
            r#" data-appear="fade" style="--appear-delay: 300ms""#
        );
    }

    #[test]
    fn test_card_stagger() {
        let config = AnimationConfig {
            card_stagger_ms: 50,
            ..Default::default()
        };
        assert!(card_appear(&config, 0).contains("--appear-delay: 0ms"));
        assert!(card_appear(&config, 2).contains("--appear-delay: 100ms"));
    }

    #[test]
    fn test_disabled() {
        let config = AnimationConfig {
            enable: false,
            ..Default::default()
        };
        assert_eq!(appear(&config, Motion::Grow, 10), "");
        assert_eq!(card_appear(&config, 3), "");
    }
}
