use log::Level;

use crate::nav::viewport::ScrollMode;

/// Offset in pixels past which the header switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderConfig {
    pub scroll_threshold: f64,
    pub scroll_mode: ScrollMode,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: SCROLL_THRESHOLD_PX,
            scroll_mode: ScrollMode::Smooth,
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_header_config_uses_constants() {
        let config = HeaderConfig::default();
        assert_eq!(config.scroll_threshold, SCROLL_THRESHOLD_PX);
        assert_eq!(config.scroll_mode, ScrollMode::Smooth);
    }
}
