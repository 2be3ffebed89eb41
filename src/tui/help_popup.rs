//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::tui::theme::*;

const BINDINGS: [(&str, &str); 7] = [
    ("  →/l/+   ", "Increment"),
    ("  ←/h/-   ", "Decrement"),
    ("  1-9     ", "Select segment by number"),
    ("  Home/End", "Jump to lowest/highest"),
    ("  click   ", "Select segment, drag to sweep"),
    ("  wheel   ", "Increment/decrement"),
    ("  q       ", "Quit"),
];

/// Render the help popup with keyboard and mouse shortcuts.
pub fn render_help_popup(frame: &mut Frame, area: Rect) {
    // Calculate centered popup area
    let popup_width = 44u16;
    let popup_height = BINDINGS.len() as u16 + 6;
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![
        Line::from(vec![Span::styled(
            "Shortcuts",
            Style::new().fg(TEXT_WHITE).bold(),
        )]),
        Line::raw(""),
    ];

    lines.extend(BINDINGS.iter().map(|(keys, description)| {
        Line::from(vec![
            Span::styled(*keys, Style::new().fg(TEXT_WHITE)),
            Span::raw("  "),
            Span::styled(*description, Style::new().fg(TEXT_DIM)),
        ])
    }));
    lines.push(Line::raw(""));

    // Footer
    lines.push(Line::from(vec![
        Span::styled("Press ", Style::new().fg(TEXT_DIM)),
        Span::styled("?", Style::new().fg(TEXT_WHITE)),
        Span::styled(" or ", Style::new().fg(TEXT_DIM)),
        Span::styled("Esc", Style::new().fg(TEXT_WHITE)),
        Span::styled(" to close", Style::new().fg(TEXT_DIM)),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(ACCENT_MINT))
        .style(Style::new().bg(Color::Black));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup_area);
}
