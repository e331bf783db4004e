//! The main game view: play field, status bar and info panel.

use crate::app::App;
use crate::game::Screen;
use crate::ui::game_common::{create_game_layout, render_info_panel_frame, render_status_bar};
use crate::ui::panels::render_panel;
use crate::ui::raster::render_world;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const FLAP_KEYS: (&str, &str) = ("[Space/W/Click]", "Flap");
const FIRE_KEYS: (&str, &str) = ("[A/F/Right-click]", "Fire");

/// Render the whole game screen.
pub fn render_game(frame: &mut Frame, area: Rect, app: &App) {
    let layout = create_game_layout(frame, area, " Fireflap ", Color::Cyan, 22);

    let raster = render_world(
        &app.session,
        app.leader_score,
        layout.content.width,
        layout.content.height,
    );
    frame.render_widget(Paragraph::new(raster.to_lines()), layout.content);

    render_status_bar_content(frame, layout.status_bar, app);
    render_info_panel(frame, layout.info_panel, app);

    if let Some(panel) = app.session.screen.panel() {
        render_panel(frame, layout.content, app, panel);
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, app: &App) {
    match app.session.screen {
        Screen::Start => render_status_bar(
            frame,
            area,
            "Press Space to start!",
            Color::Yellow,
            &[FLAP_KEYS, ("[Q]", "Quit")],
        ),
        Screen::Playing => render_status_bar(
            frame,
            area,
            &format!("Score: {}", app.session.score),
            Color::Green,
            &[FLAP_KEYS, FIRE_KEYS],
        ),
        Screen::Over => render_status_bar(
            frame,
            area,
            "Enter a name to submit your score",
            Color::Red,
            &[("[Enter]", "Submit"), ("[Esc]", "Play again")],
        ),
        Screen::Leaderboard => render_status_bar(
            frame,
            area,
            "Leaderboard",
            Color::Cyan,
            &[("[Enter]", "Continue"), ("[Q]", "Quit")],
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, app: &App) {
    if area.width == 0 {
        return;
    }
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let session = &app.session;
    let leader = app
        .leader_score
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string());

    let stat = |label: &str, value: String, color: Color| {
        Line::from(vec![
            Span::styled(format!(" {}: ", label), Style::default().fg(Color::DarkGray)),
            Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ])
    };

    let mut lines = vec![
        stat("Score", session.score.to_string(), Color::White),
        stat("Best", session.high_score.to_string(), Color::Yellow),
        stat("Leader", leader, Color::Cyan),
        Line::from(""),
    ];

    if session.screen == Screen::Playing {
        lines.push(stat("Shots", session.projectiles.len().to_string(), Color::LightRed));
        lines.push(stat("Hostiles", session.hostiles.len().to_string(), Color::Red));
    }

    if session.screen == Screen::Playing && app.beating_leader() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " New leader!",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
