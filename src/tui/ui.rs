use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, InputMode};
use crate::tui::help_popup::render_help_popup;
use crate::tui::interaction::ClickRegion;
use crate::tui::widget::RatingWidget;

use super::theme::*;

const CONTROL_WIDTH: u16 = 40;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.interactions.clear();

    // Main vertical layout: control, status, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Min(0),    // Control
        Constraint::Length(1), // Accessibility value
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    render_control(frame, main_layout[0], app);
    render_status(frame, main_layout[1], app);
    render_hotkeys(frame, main_layout[2], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, area);
    }
}

fn render_control(frame: &mut Frame, area: Rect, app: &mut App) {
    let widget = RatingWidget::new(&app.domain, &app.selection)
        .title(app.title.as_str())
        .colors(app.filled_color, app.empty_color);

    // Centre the bordered control; +2 for the border on each axis
    let width = (CONTROL_WIDTH + 2).min(area.width);
    let height = (widget.height() + 2).min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    let outer = Rect::new(x, y, width, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(TEXT_DIM));
    let inner = block.inner(outer);
    frame.render_widget(block, outer);

    let layout = widget.layout(inner);
    let segments = widget.segment_regions(layout.track);
    frame.render_widget(widget, inner);

    for (index, bounds) in segments {
        app.interactions.register_segment(index, bounds);
    }
    app.interactions.set_drag_track(ClickRegion::from(layout.track));
    app.interactions.register_adjustable(ClickRegion::from(outer));
}

fn render_status(frame: &mut Frame, area: Rect, app: &mut App) {
    let value = app.control().accessibility_value();
    let status = Line::from(vec![
        Span::styled("Value: ", Style::new().fg(TEXT_DIM)),
        Span::styled(value, Style::new().fg(TEXT_WHITE)),
        Span::styled(
            format!(" ({}/{})", app.selected_index() + 1, app.segment_count()),
            Style::new().fg(TEXT_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(status).centered(), area);
}

fn render_hotkeys(frame: &mut Frame, area: Rect, app: &App) {
    let hotkeys = match app.input_mode {
        InputMode::Normal => Line::from(vec![
            Span::styled("[←/→]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" adjust • ", Style::new().fg(TEXT_DIM)),
            Span::styled("[1-9]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" select • ", Style::new().fg(TEXT_DIM)),
            Span::styled("[?]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" help • ", Style::new().fg(TEXT_DIM)),
            Span::styled("[q]", Style::new().fg(TEXT_WHITE)),
            Span::styled("uit", Style::new().fg(TEXT_DIM)),
        ]),
        InputMode::Help => Line::from(vec![
            Span::styled("[Esc]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" close", Style::new().fg(TEXT_DIM)),
        ]),
    };
    frame.render_widget(Paragraph::new(hotkeys).centered(), area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

    use crate::config::Config;
    use crate::events::{Action, EventHandler};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn draw(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
    }

    #[test]
    fn test_render_registers_segments_and_track() {
        let mut app = App::new(&Config::default()).unwrap();
        draw(&mut app);

        let track = app.interactions.drag_track().unwrap();
        assert_eq!(track.width, CONTROL_WIDTH);

        // Pressing the last column of the track selects the last segment
        let last = track.x + track.width - 1;
        assert_eq!(app.interactions.handle_click(last, track.y), Action::Press(4));
        assert_eq!(
            app.interactions.handle_drag(last + 30),
            Action::DragTo(track.horizontal_fraction(last + 30))
        );
    }

    #[test]
    fn test_press_then_drag_updates_selection() {
        let mut app = App::new(&Config::default()).unwrap();
        draw(&mut app);
        let track = app.interactions.drag_track().unwrap();

        let press = app.interactions.handle_click(track.x, track.y);
        app.apply(press);
        assert_eq!(app.selection, "One");

        let drag = app.interactions.handle_drag(track.x + track.width / 2);
        app.apply(drag);
        assert_eq!(app.selection, "Three");
    }

    #[test]
    fn test_gap_between_segments_starts_drag() {
        let mut app = App::new(&Config::default()).unwrap();
        draw(&mut app);
        let track = app.interactions.drag_track().unwrap();

        // Column 7 is the blank gap after the first segment of a 40-wide track
        let gap = track.x + 7;
        let press = app.interactions.handle_click(gap, track.y);
        assert_eq!(press, Action::PressAt(track.horizontal_fraction(gap)));

        app.apply(press);
        assert!(app.dragging);
        assert_eq!(app.selection, "One");
    }

    #[test]
    fn test_help_overlay_blocks_mouse_input() {
        let mut app = App::new(&Config::default()).unwrap();
        app.apply(Action::OpenHelp);
        draw(&mut app);
        let track = app.interactions.drag_track().unwrap();
        let last = track.x + track.width - 1;

        for event in [
            mouse(MouseEventKind::ScrollUp, last, track.y),
            mouse(MouseEventKind::Down(MouseButton::Left), last, track.y),
            mouse(MouseEventKind::Drag(MouseButton::Left), last, track.y),
        ] {
            let action = EventHandler::handle_event(&app, &event);
            assert_eq!(action, Action::None);
            app.apply(action);
        }

        assert_eq!(app.selection, "One");
        assert!(!app.dragging);
    }
}
