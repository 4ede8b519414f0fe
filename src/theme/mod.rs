use crate::domain::Category;
use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod palette;

pub use palette::{dim_color, Palette, CATPPUCCIN_MOCHA, NORD};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub status_info: Style,
    pub status_warn: Style,
    pub status_error: Style,
    pub timestamp: Style,

    pub header_logo: Style,
    pub header_item: Style,
    pub header_active: Style,
    pub header: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer: Style,

    pub query_prompt: Style,
    pub query_text: Style,
    pub group_header: Style,
    pub shortcut: Style,
    pub description: Style,
    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,

    pub category_navigation: Style,
    pub category_actions: Style,
    pub category_ai: Style,
    pub category_recent: Style,
    pub category_suggestions: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    CatppuccinMocha,
    Nord,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::CatppuccinMocha => "Catppuccin (Mocha)",
            PaletteType::Nord => "Nord",
        }
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::CatppuccinMocha => Self::from_palette(&CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&NORD),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            status_info: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_warn: Style::default()
                .bg(p.yellow)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            timestamp: Style::default().fg(p.subtext0).add_modifier(Modifier::DIM),

            header_logo: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface0).fg(p.text),
            header_active: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(p.base).fg(p.text),

            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.base).fg(p.text),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            query_prompt: Style::default().fg(p.blue).add_modifier(Modifier::BOLD),
            query_text: Style::default().fg(p.text),
            group_header: Style::default().fg(p.subtext1).add_modifier(Modifier::BOLD),
            shortcut: Style::default().fg(p.overlay1),
            description: Style::default().fg(p.overlay2).add_modifier(Modifier::DIM),
            list_selected: Style::default()
                .bg(dim_color(p.blue, 0.35))
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),

            category_navigation: Style::default().fg(p.sapphire),
            category_actions: Style::default().fg(p.peach),
            category_ai: Style::default().fg(p.mauve),
            category_recent: Style::default().fg(p.teal),
            category_suggestions: Style::default().fg(p.yellow),
        }
    }

    pub fn category(&self, category: Category) -> Style {
        match category {
            Category::Navigation => self.category_navigation,
            Category::Actions => self.category_actions,
            Category::Ai => self.category_ai,
            Category::Recent => self.category_recent,
            Category::Suggestions => self.category_suggestions,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::CatppuccinMocha)
    }
}
