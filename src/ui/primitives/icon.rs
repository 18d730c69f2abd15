use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Arrow,
    Render,
    Copy,
    Fresh,
    Watch,
    Serve,
    Trash,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Progress) => theme::icons::PROGRESS,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Render) => theme::icons::RENDER,
            (true, Icon::Copy) => theme::icons::COPY,
            (true, Icon::Fresh) => theme::icons::FRESH,
            (true, Icon::Watch) => theme::icons::WATCH,
            (true, Icon::Serve) => theme::icons::SERVE,
            (true, Icon::Trash) => theme::icons::TRASH,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Progress) => theme::icons_ascii::PROGRESS,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Render) => theme::icons_ascii::RENDER,
            (false, Icon::Copy) => theme::icons_ascii::COPY,
            (false, Icon::Fresh) => theme::icons_ascii::FRESH,
            (false, Icon::Watch) => theme::icons_ascii::WATCH,
            (false, Icon::Serve) => theme::icons_ascii::SERVE,
            (false, Icon::Trash) => theme::icons_ascii::TRASH,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success | Icon::Render => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Progress | Icon::Trash => theme::colors::WARNING,
            Icon::Arrow | Icon::Fresh => theme::colors::DIM,
            Icon::Copy | Icon::Watch | Icon::Serve => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
