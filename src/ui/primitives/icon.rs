use crate::ui::theme::{self, colors, icons, icons_ascii};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Keep,
    Remove,
    Arrow,
    Prune,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => icons::SUCCESS,
            (true, Icon::Error) => icons::ERROR,
            (true, Icon::Warning) => icons::WARNING,
            (true, Icon::Keep) => icons::KEEP,
            (true, Icon::Remove) => icons::REMOVE,
            (true, Icon::Arrow) => icons::ARROW,
            (true, Icon::Prune) => icons::PRUNE,
            (false, Icon::Success) => icons_ascii::SUCCESS,
            (false, Icon::Error) => icons_ascii::ERROR,
            (false, Icon::Warning) => icons_ascii::WARNING,
            (false, Icon::Keep) => icons_ascii::KEEP,
            (false, Icon::Remove) => icons_ascii::REMOVE,
            (false, Icon::Arrow) => icons_ascii::ARROW,
            (false, Icon::Prune) => icons_ascii::PRUNE,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let color = match self {
            Icon::Success | Icon::Keep => colors::SUCCESS,
            Icon::Error => colors::ERROR,
            Icon::Warning | Icon::Remove => colors::WARNING,
            Icon::Arrow => colors::DIM,
            Icon::Prune => colors::INFO,
        };
        theme::paint(self.render(supports_unicode), color, supports_color)
    }
}
