//! Credential form pane.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use route53_scanner_provider::ScanCredentials;

use crate::model::{App, FormField};
use crate::view::theme::colors;

/// Renders the credential form.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let block = Block::default()
        .title(" AWS Credentials ")
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = &app.form;
    let mut lines = Vec::new();

    // === Access Key ID ===
    push_input_lines(
        &mut lines,
        "Access Key ID",
        &form.credentials.access_key_id,
        "Enter your Access Key ID",
        form.focus == FormField::AccessKeyId,
    );

    // === Secret Access Key ===
    let secret_label = if form.show_secrets {
        "Secret Access Key".to_string()
    } else {
        "Secret Access Key ⊖".to_string()
    };
    let secret_display = if form.show_secrets {
        form.credentials.secret_access_key.clone()
    } else {
        "•".repeat(form.credentials.secret_access_key.len().min(20))
    };
    push_masked_input_lines(
        &mut lines,
        &secret_label,
        &secret_display,
        form.credentials.secret_access_key.is_empty(),
        "Enter your Secret Access Key",
        form.focus == FormField::SecretAccessKey,
    );

    // === Region (fixed single option) ===
    let region_focused = form.focus == FormField::Region;
    lines.push(Line::from(vec![
        Span::styled("Region", Style::default().fg(Color::Gray)),
        if region_focused {
            Span::styled(" (fixed)", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw("")
        },
    ]));
    let region_display = format!(
        "  {} {} {}",
        if region_focused { "◀" } else { " " },
        ScanCredentials::DEFAULT_REGION,
        if region_focused { "▶" } else { " " }
    );
    let region_style = if region_focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    lines.push(Line::styled(region_display, region_style));
    lines.push(Line::from(""));

    // === Inline error ===
    if let Some(err) = &form.error {
        lines.push(Line::styled(
            format!("  ⚠ {err}"),
            Style::default().fg(Color::Red),
        ));
        lines.push(Line::from(""));
    }

    // === Submit state ===
    if app.scan.loading {
        lines.push(Line::styled(
            "  Scanning...",
            Style::default().fg(c.warning),
        ));
    } else {
        lines.push(Line::from(vec![
            Span::styled("  Enter", Style::default().fg(Color::Yellow)),
            Span::styled(" Scan Route 53", Style::default().fg(Color::DarkGray)),
        ]));
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

/// Label plus value line for a plain text field.
fn push_input_lines(
    lines: &mut Vec<Line<'_>>,
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
) {
    push_masked_input_lines(lines, label, value, value.is_empty(), placeholder, focused);
}

/// Same as [`push_input_lines`] but with the display value precomputed, so
/// the secret field can mask it.
fn push_masked_input_lines(
    lines: &mut Vec<Line<'_>>,
    label: &str,
    display_value: &str,
    is_empty: bool,
    placeholder: &str,
    focused: bool,
) {
    lines.push(Line::styled(
        label.to_string(),
        Style::default().fg(Color::Gray),
    ));

    let value_display = if is_empty && !focused {
        format!("  {placeholder}")
    } else if focused {
        format!("  {display_value}▎")
    } else {
        format!("  {display_value}")
    };

    let value_style = if is_empty && !focused {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    lines.push(Line::styled(value_display, value_style));
    lines.push(Line::from(""));
}
