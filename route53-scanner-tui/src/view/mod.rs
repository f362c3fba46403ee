//! View layer: pure rendering of the model.

mod form;
mod records;
mod statusbar;
mod theme;
mod toast;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use theme::colors;

/// Renders the whole screen from the current state.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // Three bands: title bar, main content, status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    render_title_bar(frame, main_layout[0]);

    // Form on the left, records on the right
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(46), Constraint::Min(1)])
        .split(main_layout[1]);

    form::render(app, frame, columns[0]);
    records::render(app, frame, columns[1]);

    statusbar::render(app, frame, main_layout[2]);

    // Toasts sit on top of everything
    toast::render(app, frame);
}

fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(" Route 53 Scanner")
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}
