//! The start, game-over and leaderboard panels.

use crate::app::App;
use crate::game::Panel;
use crate::ui::game_common::render_modal_frame;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the panel for the current screen over the play field.
pub fn render_panel(frame: &mut Frame, area: Rect, app: &App, panel: Panel) {
    match panel {
        Panel::Start => render_start_panel(frame, area, app),
        Panel::GameOver => render_game_over_panel(frame, area, app),
        Panel::Leaderboard => render_leaderboard_panel(frame, area, app),
    }
}

fn render_start_panel(frame: &mut Frame, area: Rect, app: &App) {
    let inner = render_modal_frame(frame, area, 40, 11, " Fireflap ", Color::Yellow);

    let mut lines = vec![
        Line::from(Span::styled(
            "FIREFLAP",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Fly through the gaps."),
        Line::from("Shoot hostiles for bonus points."),
        Line::from(""),
        Line::from(Span::styled(
            "Press SPACE to start",
            Style::default().fg(Color::White),
        )),
    ];

    if app.session.high_score > 0 {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("High Score: {}", app.session.high_score),
            Style::default().fg(Color::Cyan),
        )));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_game_over_panel(frame: &mut Frame, area: Rect, app: &App) {
    let inner = render_modal_frame(frame, area, 50, 13, " Game Over ", Color::Red);
    let session = &app.session;

    let cause = session
        .end_cause
        .map(|c| format!("You {}.", c.describe()))
        .unwrap_or_default();

    let mut lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(cause, Style::default().fg(Color::DarkGray))),
        Line::from(vec![
            Span::raw("Final score: "),
            Span::styled(
                session.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    if app.new_high_score {
        lines.push(Line::from(Span::styled(
            "New high score!",
            Style::default().fg(Color::Green),
        )));
    } else {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Name: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}_", app.name_entry.name_input),
            Style::default().fg(Color::White),
        ),
    ]));

    let status = if app.is_submitting() {
        Line::from(Span::styled(
            "Submitting...",
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(message) = &app.name_entry.message {
        Line::from(Span::styled(
            format!("✗ {}", message),
            Style::default().fg(Color::Red),
        ))
    } else {
        Line::from("")
    };
    lines.push(status);

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Submit score    [Esc] Play again",
        Style::default().fg(Color::Gray),
    )));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_leaderboard_panel(frame: &mut Frame, area: Rect, app: &App) {
    // Title, blank, header, blank, footer and the border
    let height = u16::try_from(app.leaderboard_rows)
        .unwrap_or(u16::MAX)
        .saturating_add(7);
    let inner = render_modal_frame(frame, area, 46, height, " Leaderboard ", Color::Cyan);

    let mut lines = vec![
        Line::from(Span::styled(
            "TOP SCORES",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for text in app.board.lines(app.leaderboard_rows) {
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(Color::White),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Continue",
        Style::default().fg(Color::Gray),
    )));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
