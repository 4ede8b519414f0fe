use crate::app::state::{AppMode, AppState};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modals::{helpers::dim_area, CommandPaletteModal};
use crate::components::welcome::Welcome;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        body: main[1],
        footer: main[2],
    }
}

pub fn draw(f: &mut Frame, app_state: &AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let theme = &app_state.theme;
    let layout = get_layout(area);

    f.render_widget(
        Header {
            state: app_state,
            theme,
        },
        layout.header,
    );
    f.render_widget(
        Welcome {
            app_state,
            theme,
        },
        layout.body,
    );
    f.render_widget(
        Footer {
            state: app_state,
            theme,
        },
        layout.footer,
    );

    if app_state.mode() == AppMode::CommandPalette {
        dim_area(f.buffer_mut(), layout.body);
        f.render_widget(
            CommandPaletteModal {
                theme,
                state: app_state.palette(),
            },
            area,
        );
    }
}
