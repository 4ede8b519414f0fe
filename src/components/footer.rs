use crate::app::state::{AppMode, AppState, StatusSeverity};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterItem {
    pub key: String,
    pub desc: &'static str,
}

pub struct Footer<'a> {
    pub state: &'a AppState,
    pub theme: &'a Theme,
}

impl Footer<'_> {
    fn get_items(&self) -> Vec<FooterItem> {
        let item = |key: &str, desc| FooterItem {
            key: key.to_string(),
            desc,
        };
        match self.state.mode() {
            AppMode::Normal => vec![
                item(&self.state.hotkeys.open_combo().to_string(), "palette"),
                item("q", "quit"),
            ],
            AppMode::CommandPalette => vec![
                item("↑/↓", "move"),
                item("Enter", "run"),
                item("Ctrl+U", "clear"),
                item("Esc", "close"),
            ],
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        if let Some(status) = &self.state.status {
            let style = match status.severity {
                StatusSeverity::Info => self.theme.status_info,
                StatusSeverity::Warning => self.theme.status_warn,
                StatusSeverity::Error => self.theme.status_error,
            };
            spans.push(Span::styled(
                format!(" {} ", status.timestamp.format("%H:%M:%S")),
                self.theme.timestamp,
            ));
            spans.push(Span::styled(format!(" {} ", status.message), style));
        } else {
            for item in self.get_items() {
                spans.push(Span::styled(
                    format!(" {} ", item.key),
                    self.theme.footer_segment_key,
                ));
                spans.push(Span::styled(
                    format!(" {} ", item.desc),
                    self.theme.footer_segment_val,
                ));
                spans.push(Span::raw(" "));
            }
        }

        Paragraph::new(Line::from(spans))
            .style(self.theme.footer)
            .render(area, buf);
    }
}
