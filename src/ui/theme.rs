use crossterm::style::{Color, Stylize};

/// Design tokens for the modtrim CLI.
///
/// All colors and icons used by views come from this module.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const KEEP: &str = "●";
    pub const REMOVE: &str = "○";
    pub const ARROW: &str = "↳";
    pub const PRUNE: &str = "✂";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const KEEP: &str = "[+]";
    pub const REMOVE: &str = "[-]";
    pub const ARROW: &str = "->";
    pub const PRUNE: &str = "[PRUNE]";
}

/// Apply a semantic color when color output is enabled
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        format!("{}", text.with(color))
    } else {
        text.to_string()
    }
}

/// Bold variant of [`paint`]
pub fn paint_bold(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        format!("{}", text.with(color).bold())
    } else {
        text.to_string()
    }
}
