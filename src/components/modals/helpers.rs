use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

/// Horizontally centered box `percent_x` wide (capped at `max_width`) and
/// `height` tall, placed a third of the way down like a launcher.
pub fn top_third_rect(percent_x: u16, max_width: u16, height: u16, r: Rect) -> Rect {
    let width = ((u32::from(r.width) * u32::from(percent_x.min(100))) / 100) as u16;
    let width = width.min(max_width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 3,
        width,
        height,
    }
}

pub fn dim_area(buf: &mut Buffer, area: Rect) {
    let area = area.intersection(buf.area);
    for pos in area.positions() {
        let cell = &mut buf[pos];
        cell.set_style(cell.style().add_modifier(Modifier::DIM));
    }
}

/// One-cell shadow below and right of `area`, clipped to `bounds`.
pub fn draw_drop_shadow(buf: &mut Buffer, area: Rect, bounds: Rect) {
    let shadow = Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        ..area
    }
    .intersection(bounds)
    .intersection(buf.area);

    for pos in shadow.positions() {
        buf[pos].set_symbol(" ").set_style(Style::default().bg(Color::Black));
    }
}
