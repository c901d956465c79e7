//! Entrance and scroll animation timing.

use serde::{Deserialize, Serialize};

/// Timing for reveal animations and smooth scrolling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Reveal duration in seconds (valid range: 0.0-5.0).
    pub reveal_duration: f64,
    /// Delay added per item index in seconds (valid range: 0.0-2.0).
    pub stagger: f64,
    /// Initial slide offset in pixels (valid range: 0-200).
    pub reveal_offset: u32,
    /// Skill bar fill duration in seconds (valid range: 0.0-5.0).
    pub skill_bar_duration: f64,
    /// Smooth-scroll duration in seconds (valid range: 0.0-3.0).
    pub scroll_duration: f64,
    /// Pixels scrolled per mouse-wheel line (valid range: 10-400).
    pub wheel_line_px: u32,
    /// Skip all entrance animations and show final states.
    pub reduced_motion: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            reveal_duration: 0.6,
            stagger: 0.1,
            reveal_offset: 30,
            skill_bar_duration: 1.0,
            scroll_duration: 0.6,
            wheel_line_px: 60,
            reduced_motion: false,
        }
    }
}
