//! Records table pane.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// Renders the records pane: empty state or the result table with a count.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let title = if app.scan.records.is_empty() {
        " DNS Records ".to_string()
    } else {
        format!(" DNS Records ({}) ", app.scan.records.len())
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.scan.records.is_empty() {
        render_empty(app, frame, inner);
    } else {
        render_table(app, frame, inner);
    }
}

fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let content = if app.scan.loading {
        vec![
            Line::from(""),
            Line::styled("  Scanning Route 53...", Style::default().fg(c.warning)),
        ]
    } else {
        vec![
            Line::from(""),
            Line::styled("  No DNS records to display.", Style::default().fg(c.muted)),
            Line::from(""),
            Line::styled(
                "  Enter your AWS credentials and press Enter to scan.",
                Style::default().fg(c.muted),
            ),
        ]
    };

    frame.render_widget(Paragraph::new(content), area);
}

fn render_table(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let header = Row::new(["Name", "Type", "TTL", "Value"]).style(Styles::title());

    let rows = app.scan.records.iter().map(|record| {
        Row::new([
            record.name.clone(),
            record.record_type.clone(),
            record.display_ttl(),
            record.display_value(),
        ])
        .style(Style::default().fg(c.fg))
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Length(6),
            Constraint::Length(7),
            Constraint::Percentage(50),
        ],
    )
    .header(header)
    .column_spacing(1);

    frame.render_widget(table, area);
}
