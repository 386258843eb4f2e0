use ratatui::{
    Frame,
    layout::Alignment,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{App, ConfirmAction, InputMode};

/// Main entry point for drawing a question screen.
pub fn draw(f: &mut Frame, app: &App) {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3), // Header
                Constraint::Min(4),    // Question
                Constraint::Length(3), // Input
                Constraint::Length(5), // Status/Shortcuts
            ]
            .as_ref(),
        )
        .split(f.area());

    let header = Paragraph::new("ts-scaffold: new TypeScript module")
        .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, vertical_chunks[0]);

    draw_question_pane(f, app, vertical_chunks[1]);
    if let InputMode::Editing = app.input_mode {
        draw_input_pane(f, app, vertical_chunks[2]);
    }
    draw_status_pane(f, app, vertical_chunks[3]);

    if let InputMode::Confirm = app.input_mode {
        draw_confirm_modal(f, app);
    }
}

/// Renders the question text and its default, if any.
fn draw_question_pane(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        app.message.as_str(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))];

    if let Some(default) = &app.default {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Default: ", Style::default().fg(Color::DarkGray)),
            Span::styled(default.as_str(), Style::default().fg(Color::Yellow)),
        ]));
    }

    let question = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Question ")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(question, area);
}

fn draw_input_pane(f: &mut Frame, app: &App, area: Rect) {
    let input_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let input = Paragraph::new(app.input.as_str()).style(input_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Answer ", Style::default().fg(Color::Cyan)))
            .border_style(input_style),
    );
    f.render_widget(input, area);

    let cursor_x = area
        .x
        .saturating_add(1)
        .saturating_add(app.input.chars().count() as u16);
    let max_x = area.x.saturating_add(area.width.saturating_sub(1));
    f.set_cursor_position((cursor_x.min(max_x), area.y + 1));
}

/// Renders the bottom status bar with validation errors and key shortcuts.
fn draw_status_pane(f: &mut Frame, app: &App, area: Rect) {
    let mut status_lines = Vec::new();

    if let Some(err) = &app.error {
        status_lines.push(Line::from(vec![
            Span::styled(
                " ERROR ",
                Style::default()
                    .bg(Color::Red)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(err.as_str(), Style::default().fg(Color::LightRed)),
        ]));
    } else {
        status_lines.push(Line::from(""));
    }

    status_lines.push(Line::from(""));

    let shortcuts: &[(&str, &str)] = match app.input_mode {
        InputMode::Editing => &[("ENTER", "Submit"), ("TAB", "Edit Default"), ("ESC", "Abort")],
        InputMode::Confirm => &[("Y/N", "Choose"), ("ENTER", "Confirm"), ("ESC", "Abort")],
    };

    let mut shortcut_spans = Vec::new();
    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        if i > 0 {
            shortcut_spans.push(Span::raw("  "));
        }
        shortcut_spans.push(Span::styled(
            format!(" {} ", key),
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
        shortcut_spans.push(Span::raw(format!(" {}", desc)));
    }
    status_lines.push(Line::from(shortcut_spans));

    let status = Paragraph::new(status_lines)
        .block(Block::default().borders(Borders::ALL).title(" Info & Controls "));
    f.render_widget(status, area);
}

/// Renders the centered yes/no modal.
fn draw_confirm_modal(f: &mut Frame, app: &App) {
    let block = Block::default()
        .title(" Confirm ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let modal_area = centered_rect(50, 40, f.area());
    f.render_widget(ratatui::widgets::Clear, modal_area);

    let choice = |label: &'static str, action: ConfirmAction| {
        if app.confirm_action == action {
            Span::styled(
                label,
                Style::default()
                    .bg(Color::Green)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(label, Style::default().fg(Color::Green))
        }
    };

    let text = vec![
        Line::from(""),
        Line::from(app.message.as_str()),
        Line::from(""),
        Line::from(vec![
            choice(" [Y] Yes ", ConfirmAction::Yes),
            Span::raw("    "),
            choice(" [N] No ", ConfirmAction::No),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Use Left/Right Arrow or Y/N to select, Enter to confirm ",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )]),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, modal_area);
}

/// Helper function to create a centered rectangle for popups/modals.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ]
            .as_ref(),
        )
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(popup_layout[1])[1]
}
