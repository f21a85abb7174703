use ratatui::style::{Color, Modifier, Style};

use crate::models::ProgressTier;

/// Light or dark colour scheme. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DisplayMode {
    Light,
    Dark,
}

impl DisplayMode {
    pub(crate) fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub(crate) fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Debug)]
pub(crate) struct Palette {
    pub(crate) header_bg: Color,
    pub(crate) header_fg: Color,
    pub(crate) background: Color,
    pub(crate) accent: Color,
    pub(crate) green: Color,
    pub(crate) red: Color,
    pub(crate) yellow: Color,
    pub(crate) surface: Color,
    pub(crate) text: Color,
    pub(crate) text_dim: Color,
    pub(crate) overlay: Color,
    pub(crate) command_bg: Color,
    /// One colour per category, in [`Category::all`] order.
    pub(crate) series: [Color; 6],
}

pub(crate) const DARK: Palette = Palette {
    header_bg: Color::Rgb(30, 30, 46),
    header_fg: Color::Rgb(205, 214, 244),
    background: Color::Rgb(17, 17, 27),
    accent: Color::Rgb(137, 180, 250),
    green: Color::Rgb(166, 227, 161),
    red: Color::Rgb(243, 139, 168),
    yellow: Color::Rgb(249, 226, 175),
    surface: Color::Rgb(49, 50, 68),
    text: Color::Rgb(205, 214, 244),
    text_dim: Color::Rgb(127, 132, 156),
    overlay: Color::Rgb(69, 71, 90),
    command_bg: Color::Rgb(24, 24, 37),
    series: [
        Color::Rgb(137, 180, 250),
        Color::Rgb(203, 166, 247),
        Color::Rgb(148, 226, 213),
        Color::Rgb(243, 139, 168),
        Color::Rgb(250, 179, 135),
        Color::Rgb(147, 153, 178),
    ],
};

pub(crate) const LIGHT: Palette = Palette {
    header_bg: Color::Rgb(30, 102, 245),
    header_fg: Color::Rgb(239, 241, 245),
    background: Color::Rgb(239, 241, 245),
    accent: Color::Rgb(30, 102, 245),
    green: Color::Rgb(64, 160, 43),
    red: Color::Rgb(210, 15, 57),
    yellow: Color::Rgb(223, 142, 29),
    surface: Color::Rgb(220, 224, 232),
    text: Color::Rgb(76, 79, 105),
    text_dim: Color::Rgb(124, 127, 147),
    overlay: Color::Rgb(172, 176, 190),
    command_bg: Color::Rgb(230, 233, 239),
    series: [
        Color::Rgb(30, 102, 245),
        Color::Rgb(136, 57, 239),
        Color::Rgb(23, 146, 153),
        Color::Rgb(210, 15, 57),
        Color::Rgb(254, 100, 11),
        Color::Rgb(124, 127, 147),
    ],
};

impl Palette {
    pub(crate) fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn selected_style(&self) -> Style {
        Style::default().fg(self.header_fg).bg(self.accent)
    }

    pub(crate) fn normal_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub(crate) fn dim_style(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub(crate) fn expense_style(&self) -> Style {
        Style::default().fg(self.red)
    }

    pub(crate) fn alt_row_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub(crate) fn title_style(&self) -> Style {
        Style::default()
            .fg(self.text_dim)
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn command_bar_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.command_bg)
    }

    pub(crate) fn status_bar_style(&self) -> Style {
        Style::default().fg(self.text_dim).bg(self.surface)
    }

    pub(crate) fn series_color(&self, index: usize) -> Color {
        self.series[index % self.series.len()]
    }

    pub(crate) fn tier_color(&self, tier: ProgressTier) -> Color {
        match tier {
            ProgressTier::Danger => self.red,
            ProgressTier::Warning => self.yellow,
            ProgressTier::Success => self.green,
        }
    }
}
