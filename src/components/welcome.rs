use crate::app::state::AppState;
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

/// Backdrop shown behind the palette: a hint plus recently run commands.
pub struct Welcome<'a> {
    pub app_state: &'a AppState,
    pub theme: &'a Theme,
}

impl Widget for Welcome<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let logo_ascii = [
            r"  ___ __  __ ___  _  __",
            r" / __|  \/  |   \| |/ /",
            r"| (__| |\/| | |) | ' < ",
            r" \___|_|  |_|___/|_|\_\",
        ];

        let mut lines: Vec<Line> = vec![Line::from("")];
        lines.extend(
            logo_ascii
                .iter()
                .map(|l| Line::from(Span::styled(*l, self.theme.border_focus))),
        );

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Press "),
            Span::styled(
                format!(" {} ", self.app_state.hotkeys.open_combo()),
                self.theme.footer_segment_key,
            ),
            Span::raw(" to open the command palette"),
        ]));
        lines.push(Line::from(""));

        if self.app_state.activity.is_empty() {
            lines.push(Line::from(Span::styled(
                "Nothing run yet.",
                self.theme.dimmed,
            )));
        } else {
            lines.push(Line::from(Span::styled("Recently run", self.theme.group_header)));
            let visible = (area.height as usize).saturating_sub(lines.len() + 1);
            lines.extend(
                self.app_state
                    .activity
                    .iter()
                    .rev()
                    .take(visible)
                    .map(|entry| Line::from(Span::styled(entry.clone(), self.theme.list_item))),
            );
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
