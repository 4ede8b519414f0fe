use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub state: &'a AppState,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let registry = self.state.hotkeys.palette().registry();
        let mut spans = vec![
            Span::styled(" CMDK ", self.theme.header_logo),
            Span::raw(" "),
            Span::styled(
                format!(" {} commands ", registry.len()),
                self.theme.header_item,
            ),
        ];

        if !registry.duplicates().is_empty() {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!(" {} duplicate ids ignored ", registry.duplicates().len()),
                self.theme.status_warn,
            ));
        }

        if self.state.mode() == AppMode::CommandPalette {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(" PALETTE ", self.theme.header_active));
        }

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
