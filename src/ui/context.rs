use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
    /// Redraw a live progress line instead of printing one line per step
    pub animation: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8) -> Self {
        Self::from_caps(json, verbose, detect_capabilities())
    }

    pub(crate) fn from_caps(json: bool, verbose: u8, caps: TerminalCapabilities) -> Self {
        Self {
            json,
            verbose,
            caps,
            color: caps.supports_color && !caps.is_ci,
            unicode: caps.supports_unicode,
            animation: !json && verbose == 0 && caps.is_tty && !caps.is_ci,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty_caps(is_ci: bool) -> TerminalCapabilities {
        TerminalCapabilities {
            is_tty: true,
            supports_color: true,
            supports_unicode: true,
            is_ci,
            width: 120,
        }
    }

    #[test]
    fn ci_forces_animation_and_color_off() {
        let ui = UiContext::from_caps(false, 0, tty_caps(true));
        assert!(!ui.animation);
        assert!(!ui.color);
    }

    #[test]
    fn verbose_logging_disables_animation() {
        assert!(UiContext::from_caps(false, 0, tty_caps(false)).animation);
        assert!(!UiContext::from_caps(false, 1, tty_caps(false)).animation);
    }

    #[test]
    fn json_disables_animation() {
        assert!(!UiContext::from_caps(true, 0, tty_caps(false)).animation);
    }
}
