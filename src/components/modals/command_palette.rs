use crate::app::state::PaletteState;
use crate::domain::{Category, CommandDescriptor};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};
use std::sync::Arc;

use super::helpers::{draw_drop_shadow, top_third_rect};

// Borders, query, separator, hint
const CHROME_HEIGHT: u16 = 5;
const NAME_WIDTH: usize = 28;
const MAX_WIDTH: u16 = 96;

#[derive(Debug, Clone)]
pub enum PaletteRow {
    Header(Category),
    Item(Arc<CommandDescriptor>),
}

/// Display rows: a header per category bucket followed by its commands.
pub fn palette_rows(state: &PaletteState) -> Vec<PaletteRow> {
    let mut rows = Vec::new();
    for (category, commands) in state.grouped().iter() {
        rows.push(PaletteRow::Header(category));
        rows.extend(commands.iter().cloned().map(PaletteRow::Item));
    }
    rows
}

pub fn modal_area(state: &PaletteState, area: Rect) -> Rect {
    let rows = u16::try_from(palette_rows(state).len().max(1)).unwrap_or(u16::MAX);
    top_third_rect(60, MAX_WIDTH, rows.saturating_add(CHROME_HEIGHT), area)
}

/// First row to draw so the selected command stays inside `visible` rows.
///
/// The category header directly above the selection is kept in view when
/// there is room for it.
pub fn scroll_offset(rows: &[PaletteRow], state: &PaletteState, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    let selected = rows.iter().position(|row| match row {
        PaletteRow::Item(cmd) => state.is_selected(&cmd.id),
        PaletteRow::Header(_) => false,
    });
    match selected {
        Some(pos) if pos >= visible => pos + 1 - visible,
        // Selection fits on the first page, or there is none.
        _ => 0,
    }
}

/// The command under terminal cell (`column`, `row`), if any.
pub fn command_at(
    state: &PaletteState,
    area: Rect,
    column: u16,
    row: u16,
) -> Option<Arc<CommandDescriptor>> {
    let modal = modal_area(state, area);
    // Results start below the top border, query line and separator.
    let first_row = modal.y + 3;
    let last_row = modal.y + modal.height.saturating_sub(2);
    if column <= modal.x
        || column + 1 >= modal.x + modal.width
        || row < first_row
        || row >= last_row
    {
        return None;
    }
    let rows = palette_rows(state);
    let offset = scroll_offset(&rows, state, usize::from(last_row - first_row));
    match rows.into_iter().nth(offset + usize::from(row - first_row))? {
        PaletteRow::Item(cmd) => Some(cmd),
        PaletteRow::Header(_) => None,
    }
}

pub struct CommandPaletteModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a PaletteState,
}

impl Widget for CommandPaletteModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = modal_area(self.state, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" COMMAND PALETTE ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let inner_area = block.inner(modal_area);
        block.render(modal_area, buf);
        if inner_area.height < 3 || inner_area.width == 0 {
            return;
        }

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Query input
                Constraint::Length(1), // Separator
                Constraint::Min(0),    // Results
                Constraint::Length(1), // Key hints
            ])
            .split(inner_area);

        let query_line = Line::from(vec![
            Span::styled(" > ", self.theme.query_prompt),
            Span::styled(self.state.query(), self.theme.query_text),
            Span::styled(
                "_",
                self.theme.query_text.add_modifier(Modifier::SLOW_BLINK),
            ),
        ]);
        buf.set_line(layout[0].x, layout[0].y, &query_line, layout[0].width);

        let separator = "─".repeat(layout[1].width as usize);
        buf.set_string(layout[1].x, layout[1].y, separator, self.theme.border_focus);

        let results_area = layout[2];
        let rows = palette_rows(self.state);
        if rows.is_empty() && results_area.height > 0 {
            let no_results = Line::from(Span::styled(
                "  No matching commands.",
                self.theme.dimmed,
            ));
            buf.set_line(
                results_area.x,
                results_area.y,
                &no_results,
                results_area.width,
            );
        }

        let visible = usize::from(results_area.height);
        let first = scroll_offset(&rows, self.state, visible);
        for (y, row) in (results_area.y..results_area.bottom()).zip(rows.iter().skip(first)) {
            let line = match row {
                PaletteRow::Header(category) => Line::from(vec![
                    Span::styled(
                        format!(" {} ", category.icon()),
                        self.theme.category(*category),
                    ),
                    Span::styled(category.label().to_uppercase(), self.theme.group_header),
                ]),
                PaletteRow::Item(cmd) => self.item_line(cmd, results_area.width as usize),
            };
            buf.set_line(results_area.x, y, &line, results_area.width);
        }

        let hints = Line::from(vec![
            Span::styled(" ↑↓ ", self.theme.footer_segment_key),
            Span::styled(" navigate ", self.theme.dimmed),
            Span::styled(" ↵ ", self.theme.footer_segment_key),
            Span::styled(" run ", self.theme.dimmed),
            Span::styled(" esc ", self.theme.footer_segment_key),
            Span::styled(" close ", self.theme.dimmed),
        ]);
        buf.set_line(layout[3].x, layout[3].y, &hints, layout[3].width);
    }
}

impl CommandPaletteModal<'_> {
    fn item_line(&self, cmd: &CommandDescriptor, width: usize) -> Line<'static> {
        let selected = self.state.is_selected(&cmd.id);
        let style = if selected {
            self.theme.list_selected
        } else {
            self.theme.list_item
        };
        let prefix = if selected { " ▸ " } else { "   " };

        let name = format!("{:<NAME_WIDTH$}", cmd.name);
        let shortcut = cmd.shortcut.clone().unwrap_or_default();
        let used = prefix.chars().count() + name.chars().count() + shortcut.chars().count() + 1;
        let description: String = cmd
            .description
            .chars()
            .take(width.saturating_sub(used + 1))
            .collect();
        let padding = width.saturating_sub(used + description.chars().count());

        Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(name, style),
            Span::styled(
                format!("{description}{}", " ".repeat(padding)),
                self.theme.description,
            ),
            Span::styled(shortcut, self.theme.shortcut),
            Span::raw(" "),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::PaletteConfig;
    use crate::domain::Registry;

    fn state(query: &str) -> PaletteState {
        let registry = Registry::new(vec![
            CommandDescriptor::new("nav-dashboard", "Go to Dashboard", Category::Navigation, || Ok(()))
                .priority(10)
                .shortcut("g d"),
            CommandDescriptor::new("ai-optimize", "AI Performance Optimizer", Category::Ai, || Ok(()))
                .priority(10)
                .description("Tune slow queries"),
            CommandDescriptor::new("nav-projects", "View All Projects", Category::Navigation, || Ok(()))
                .priority(9),
        ])
        .unwrap();
        let config = PaletteConfig::default();
        let mut state = PaletteState::opened(&registry, &config);
        state.set_query(query.to_string(), &registry, &config);
        state
    }

    fn render(state: &PaletteState, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        CommandPaletteModal {
            theme: &Theme::default(),
            state,
        }
        .render(area, &mut buf);

        (0..height)
            .map(|y| (0..width).map(|x| buf[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_rows_follow_grouping() {
        let rows = palette_rows(&state(""));
        let labels: Vec<String> = rows
            .iter()
            .map(|r| match r {
                PaletteRow::Header(c) => format!("#{}", c.label()),
                PaletteRow::Item(cmd) => cmd.id.clone(),
            })
            .collect();
        assert_eq!(
            labels,
            vec!["#Navigation", "nav-dashboard", "nav-projects", "#AI Tools", "ai-optimize"]
        );
    }

    #[test]
    fn test_renders_sections_and_shortcut() {
        let out = render(&state(""), 120, 30);
        assert!(out.contains("COMMAND PALETTE"));
        assert!(out.contains("NAVIGATION"));
        assert!(out.contains("AI TOOLS"));
        assert!(out.contains("▸ Go to Dashboard"));
        assert!(out.contains("g d"));
    }

    #[test]
    fn test_renders_empty_state() {
        let out = render(&state("zzz"), 100, 20);
        assert!(out.contains("No matching commands."));
    }

    #[test]
    fn test_survives_tiny_areas() {
        let s = state("");
        for width in 0..30 {
            for height in 0..12 {
                render(&s, width, height);
            }
        }
    }

    fn long_state(count: usize) -> PaletteState {
        let registry = Registry::new(
            (0..count)
                .map(|i| {
                    CommandDescriptor::new(format!("c{i}"), format!("Command {i:02}"), Category::Actions, || Ok(()))
                })
                .collect(),
        )
        .unwrap();
        let config = PaletteConfig {
            result_limit: count,
            ..Default::default()
        };
        PaletteState::opened(&registry, &config)
    }

    #[test]
    fn test_scroll_keeps_selection_visible() {
        let mut s = long_state(30);
        for _ in 0..25 {
            s.move_down();
        }
        assert!(s.is_selected("c25"));

        // 14 rows tall leaves 9 result rows.
        let out = render(&s, 100, 14);
        assert!(out.contains("▸ Command 25"));
        assert!(!out.contains("Command 00"));

        let rows = palette_rows(&s);
        assert_eq!(scroll_offset(&rows, &s, 9), 26 + 1 - 9);
        assert_eq!(scroll_offset(&rows, &s, 40), 0);
        assert_eq!(scroll_offset(&rows, &s, 0), 0);
    }

    #[test]
    fn test_command_at_follows_scroll() {
        let mut s = long_state(30);
        for _ in 0..25 {
            s.move_down();
        }
        let area = Rect::new(0, 0, 100, 14);
        let modal = modal_area(&s, area);
        let first_row = modal.y + 3;
        let last_row = modal.y + modal.height - 2;

        // Selected command is drawn on the last visible result row.
        let hit = command_at(&s, area, modal.x + 4, last_row - 1).unwrap();
        assert_eq!(hit.id, "c25");
        assert_ne!(command_at(&s, area, modal.x + 4, first_row).unwrap().id, "c0");
    }

    #[test]
    fn test_modal_height_saturates() {
        let tall = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: u16::MAX,
        };
        assert_eq!(modal_area(&long_state(3), tall).height, 4 + CHROME_HEIGHT);
        // More rows than a u16 can count must not wrap to a short modal.
        assert_eq!(modal_area(&long_state(70_000), tall).height, u16::MAX);
    }

    #[test]
    fn test_command_at_hits_items_only() {
        let s = state("");
        let area = Rect::new(0, 0, 100, 40);
        let modal = modal_area(&s, area);
        let first_row = modal.y + 3;
        let x = modal.x + 4;

        assert!(command_at(&s, area, x, first_row).is_none()); // Navigation header
        assert_eq!(command_at(&s, area, x, first_row + 1).unwrap().id, "nav-dashboard");
        assert_eq!(command_at(&s, area, x, first_row + 4).unwrap().id, "ai-optimize");
        assert!(command_at(&s, area, modal.x, first_row + 1).is_none());
        assert!(command_at(&s, area, x, modal.y).is_none());
    }
}
