//! Toast overlay, stacked in the top-right corner.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::{App, ToastKind};
use crate::view::theme::colors;

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;
const MAX_VISIBLE: usize = 4;

/// Renders the currently visible toasts on top of everything else.
pub fn render(app: &App, frame: &mut Frame) {
    if app.toasts.is_empty() {
        return;
    }

    let c = colors();
    let area = frame.area();
    let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
    let x = area.right().saturating_sub(width + 1);

    for (i, toast) in app.toasts.iter().take(MAX_VISIBLE).enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        let y = 1 + (i as u16) * TOAST_HEIGHT;
        if y + TOAST_HEIGHT > area.bottom() {
            break;
        }
        let rect = Rect::new(x, y, width, TOAST_HEIGHT);

        let border_color = match toast.kind {
            ToastKind::Success => c.success,
            ToastKind::Error => c.error,
            ToastKind::Neutral => c.muted,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(toast.message.clone())
                .style(Style::default().fg(c.fg))
                .wrap(Wrap { trim: true })
                .block(block),
            rect,
        );
    }
}
